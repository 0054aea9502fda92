mod action;
mod board;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod state;
mod types;

pub use action::Move;
pub use board::{Board, DEFAULT_SIZE};
pub use error::GameError;
pub use game::TicTacToeGame;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use state::{GameContext, GameState, Outcome};
pub use types::{Cell, Position, Symbol};
