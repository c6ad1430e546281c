//! Game rules for omok with Renju-style restrictions
//!
//! This module implements the rule set:
//! - Line scanning (run length and open-end classification)
//! - Win detection (exact five for Black, five or more for White)
//! - Forbidden moves for Black (overline, double-four, double-open-three)

pub mod forbidden;
pub mod scan;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{forbidden_cells, is_forbidden_move};
pub use scan::{classify_line, count_run, Direction, LineRun};
pub use win::{is_winning_move, winning_line};
