//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so the game loop and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::is_winning_cell;
