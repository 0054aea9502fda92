//! Core domain types for tic-tac-toe.

use super::error::GameError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Marker a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Symbol {
    /// First mover.
    #[display("X")]
    X,
    /// Second mover.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the symbol of the other player.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Symbol),
}

impl Cell {
    /// Character used when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Symbol::X) => 'X',
            Cell::Occupied(Symbol::O) => 'O',
        }
    }
}

/// A zero-indexed `(row, col)` pair.
///
/// A position carries no validity of its own; it is only judged against
/// a specific [`Board`](super::Board).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    new,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl FromStr for Position {
    type Err = GameError;

    /// Parses `"row col"` or `"row,col"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(GameError::MalformedInput(s.trim().to_string()));
        };

        let row = row
            .parse::<usize>()
            .map_err(|_| GameError::MalformedInput(s.trim().to_string()))?;
        let col = col
            .parse::<usize>()
            .map_err(|_| GameError::MalformedInput(s.trim().to_string()))?;

        Ok(Position::new(row, col))
    }
}
