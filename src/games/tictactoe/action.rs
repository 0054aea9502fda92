//! A single ply as a first-class value.

use super::{Position, Symbol};
use serde::{Deserialize, Serialize};

/// One player's mark placed at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub symbol: Symbol,
    /// Where the mark went.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position)
    }
}
