//! Move-selection strategies and the player that owns one.

mod human;
mod scripted;

pub use human::{InteractiveStrategy, LineSource, StdinLines};
pub use scripted::ScriptedStrategy;

use crate::games::tictactoe::{Board, GameError, Position, Symbol};
use tracing::instrument;

/// Capability to choose the next move.
///
/// New kinds of player are added by implementing this trait; the board
/// and the game loop stay untouched.
pub trait PlayerStrategy {
    /// Picks a position for `symbol`.
    ///
    /// A returned position must satisfy [`Board::is_valid_move`].
    fn select_move(&mut self, board: &Board, symbol: Symbol) -> Result<Position, GameError>;

    /// Display name of the player behind this strategy.
    fn name(&self) -> &str;
}

/// A symbol bound to the strategy that plays it.
pub struct Player {
    symbol: Symbol,
    strategy: Box<dyn PlayerStrategy>,
}

impl Player {
    /// Creates a player for `symbol`.
    pub fn new(symbol: Symbol, strategy: Box<dyn PlayerStrategy>) -> Self {
        Self { symbol, strategy }
    }

    /// The mark this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Display name from the strategy.
    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    /// Asks the strategy for a move.
    #[instrument(skip(self, board), fields(player = %self.name(), symbol = %self.symbol))]
    pub fn select_move(&mut self, board: &Board) -> Result<Position, GameError> {
        self.strategy.select_move(board, self.symbol)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("symbol", &self.symbol)
            .field("name", &self.name())
            .finish()
    }
}
