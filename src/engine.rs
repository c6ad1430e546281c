//! Move engine: the turn state machine
//!
//! Owns the single mutable [`Board`] and is its only mutation point.
//! Everything else (line scanning, win detection, forbidden-move
//! evaluation) borrows the board read-only, so a rejected move leaves no
//! trace. After every committed or undone move the advisory set of
//! forbidden points is recomputed for presentation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Point, Stone};
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::rules::{self, forbidden};

/// Phase of the game.
///
/// Transitions exactly once from `InProgress` to a terminal state and never
/// reverts; undo is only permitted while `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress { to_move: Stone },
    Won { winner: Stone },
    Draw,
}

/// Outcome of [`Engine::commit_move`].
///
/// Rejections guarantee the board, history, phase and advisory set are
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Placed,
    RejectedOccupied,
    RejectedForbidden,
    RejectedOutOfBounds,
    RejectedGameOver,
    WinsFor {
        color: Stone,
        winning_cells: Vec<Point>,
    },
    Draw,
}

/// Outcome of [`Engine::undo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoOutcome {
    Undone,
    NothingToUndo,
    RejectedGameOver,
}

/// Rule engine for one game.
///
/// Black moves first. When the forbidden-move rules are enabled Black may
/// not play an overline, double-four or double-open-three; White is never
/// restricted.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    phase: GamePhase,
    history: Vec<Point>,
    forbidden: HashSet<Point>,
    winning_line: Option<Vec<Point>>,
    rules_enabled: bool,
}

impl Engine {
    /// Start a new game
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let board = Board::new(config.width, config.height)?;
        let mut engine = Self {
            board,
            phase: GamePhase::InProgress {
                to_move: Stone::Black,
            },
            history: Vec::new(),
            forbidden: HashSet::new(),
            winning_line: None,
            rules_enabled: config.forbidden_moves,
        };
        engine.refresh_forbidden();
        Ok(engine)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Is Black's forbidden-move rule set in effect?
    #[inline]
    pub fn rules_enabled(&self) -> bool {
        self.rules_enabled
    }

    /// Advisory set of currently forbidden points.
    ///
    /// Empty unless the game is in progress, Black is to move and the rules
    /// are enabled; recomputed after every committed or undone move.
    #[inline]
    pub fn forbidden_cells(&self) -> &HashSet<Point> {
        &self.forbidden
    }

    /// Most recent committed coordinate
    #[inline]
    pub fn last_move(&self) -> Option<Point> {
        self.history.last().copied()
    }

    /// Committed moves in order
    #[inline]
    pub fn moves(&self) -> &[Point] {
        &self.history
    }

    /// The five cells of the winning run once the game is won
    pub fn winning_line(&self) -> Option<&[Point]> {
        self.winning_line.as_deref()
    }

    /// Attempt to place a stone for the active color.
    ///
    /// Validation order: terminal phase, bounds, occupancy, then (for Black
    /// with rules enabled) the forbidden-move evaluation. A move that makes
    /// a genuine five is exempt from the forbidden check and wins.
    pub fn commit_move(&mut self, pos: Point) -> MoveOutcome {
        let to_move = match self.phase {
            GamePhase::InProgress { to_move } => to_move,
            _ => {
                debug!(%pos, "move rejected: game over");
                return MoveOutcome::RejectedGameOver;
            }
        };

        let occupant = match self.board.get(pos) {
            Ok(stone) => stone,
            Err(_) => {
                debug!(%pos, "move rejected: out of bounds");
                return MoveOutcome::RejectedOutOfBounds;
            }
        };
        if occupant != Stone::Empty {
            debug!(%pos, "move rejected: cell occupied");
            return MoveOutcome::RejectedOccupied;
        }

        if to_move == Stone::Black
            && self.rules_enabled
            && forbidden::forbidden_at(&self.board, pos)
        {
            debug!(%pos, "move rejected: forbidden point");
            return MoveOutcome::RejectedForbidden;
        }

        self.board.put(pos, to_move);
        self.history.push(pos);

        if let Some(cells) = rules::winning_line(&self.board, pos, to_move) {
            info!(winner = %to_move, %pos, "five in a row");
            self.phase = GamePhase::Won { winner: to_move };
            self.winning_line = Some(cells.clone());
            self.forbidden.clear();
            return MoveOutcome::WinsFor {
                color: to_move,
                winning_cells: cells,
            };
        }

        if self.history.len() == self.board.area() {
            info!("board full, game drawn");
            self.phase = GamePhase::Draw;
            self.forbidden.clear();
            return MoveOutcome::Draw;
        }

        debug!(%pos, color = %to_move, "stone placed");
        self.phase = GamePhase::InProgress {
            to_move: to_move.opponent(),
        };
        self.refresh_forbidden();
        MoveOutcome::Placed
    }

    /// Take back the most recent move.
    ///
    /// Only valid while the game is in progress; a completed game is final.
    pub fn undo(&mut self) -> UndoOutcome {
        let to_move = match self.phase {
            GamePhase::InProgress { to_move } => to_move,
            _ => return UndoOutcome::RejectedGameOver,
        };
        let last = match self.history.pop() {
            Some(p) => p,
            None => return UndoOutcome::NothingToUndo,
        };

        self.board.put(last, Stone::Empty);
        self.phase = GamePhase::InProgress {
            to_move: to_move.opponent(),
        };
        self.refresh_forbidden();
        debug!(%last, "move undone");
        UndoOutcome::Undone
    }

    fn refresh_forbidden(&mut self) {
        self.forbidden.clear();
        if !self.rules_enabled {
            return;
        }
        if let GamePhase::InProgress {
            to_move: Stone::Black,
        } = self.phase
        {
            self.forbidden = rules::forbidden_cells(&self.board);
        }
    }
}
