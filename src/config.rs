//! Game configuration

use serde::{Deserialize, Serialize};

/// Configuration for a new game.
///
/// `forbidden_moves` toggles Black's Renju-style restrictions (overline,
/// double-four, double-open-three). White is never restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells
    pub width: u16,
    /// Board height in cells
    pub height: u16,
    /// Enforce Black's forbidden-move rules
    pub forbidden_moves: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            forbidden_moves: true,
        }
    }
}

impl GameConfig {
    /// Square board with the forbidden-move rules enabled.
    pub fn square(size: u16) -> Self {
        Self {
            width: size,
            height: size,
            ..Self::default()
        }
    }
}
