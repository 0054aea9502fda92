//! Error type for board, state machine and player failures.

use super::types::{Position, Symbol};

/// Error raised while configuring or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The position is off the board or the cell is already taken.
    #[display("Invalid move at {}", _0)]
    InvalidMove(Position),

    /// Text could not be read as a `row col` pair.
    #[display("Malformed input: {:?}", _0)]
    MalformedInput(String),

    /// Board dimensions must both be at least one.
    #[display("Invalid board dimensions {}x{}", rows, cols)]
    InvalidConfiguration {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// The game has already reached a terminal state.
    #[display("Game is already over")]
    GameOver,

    /// A non-winning ply was reported for the player not on turn.
    #[display("It's {}'s turn, not {}'s", expected, actual)]
    WrongTurn {
        /// Symbol whose turn it is.
        expected: Symbol,
        /// Symbol that was reported as moving.
        actual: Symbol,
    },

    /// A scripted player has no valid moves left.
    #[display("Script for {} ran out of moves", _0)]
    ScriptExhausted(Symbol),

    /// Interactive input reached end of stream.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(String),

    /// A post-ply invariant check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
