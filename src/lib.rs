//! Omok rule engine with Renju-style restrictions
//!
//! A two-player five-in-a-row rule engine. Black opens and, when the rule
//! set is enabled, may not play a forbidden move: an overline (six or more
//! in a row), a double-four, or a double-open-three. A move that makes a
//! genuine five is always legal and wins. White is never restricted and
//! wins with five or more in a row.
//!
//! # Architecture
//!
//! - [`board`]: the grid of cells; pure data, no rules
//! - [`rules`]: line scanning, win detection, forbidden-move evaluation,
//!   all read-only over a borrowed board
//! - [`engine`]: the turn state machine and the single mutation point
//!   (commit, undo, draw-by-fill, advisory forbidden marks)
//!
//! Hypothetical placements are evaluated with a virtual stone: the
//! candidate cell is classified as if it held the color without ever
//! mutating the board, so there is no temporary state to leak on a rejected
//! move.
//!
//! # Quick Start
//!
//! ```
//! use omok::{Engine, GameConfig, MoveOutcome, Point, Stone};
//!
//! let mut engine = Engine::new(GameConfig::default()).unwrap();
//!
//! // Black opens in the center
//! assert_eq!(engine.commit_move(Point::new(7, 7)), MoveOutcome::Placed);
//! assert_eq!(engine.board().get(Point::new(7, 7)), Ok(Stone::Black));
//!
//! // White answers
//! assert_eq!(engine.commit_move(Point::new(7, 8)), MoveOutcome::Placed);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Point, Stone};
pub use config::GameConfig;
pub use engine::{Engine, GamePhase, MoveOutcome, UndoOutcome};
pub use error::EngineError;
pub use rules::{Direction, LineRun};
