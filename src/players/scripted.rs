//! Player that replays a fixed list of moves.

use super::PlayerStrategy;
use crate::games::tictactoe::{Board, GameError, Position, Symbol};
use std::collections::VecDeque;
use tracing::{debug, instrument, warn};

/// Plays queued positions in order, skipping any that are no longer valid.
#[derive(Debug, Clone)]
pub struct ScriptedStrategy {
    name: String,
    moves: VecDeque<Position>,
}

impl ScriptedStrategy {
    /// Creates a scripted player.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl PlayerStrategy for ScriptedStrategy {
    #[instrument(skip(self, board), fields(player = %self.name, remaining = self.moves.len()))]
    fn select_move(&mut self, board: &Board, symbol: Symbol) -> Result<Position, GameError> {
        while let Some(pos) = self.moves.pop_front() {
            if board.is_valid_move(pos) {
                debug!(%pos, "Scripted move");
                return Ok(pos);
            }
            warn!(%pos, "Skipping unavailable scripted move");
        }
        Err(GameError::ScriptExhausted(symbol))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
