//! Turn loop tying board, players and state machine together.

use super::action::Move;
use super::board::Board;
use super::error::GameError;
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::state::{GameContext, GameState, Outcome};
use super::types::Symbol;
use crate::players::{Player, PlayerStrategy};
use std::io::Write;
use tracing::{debug, info, instrument};

/// A single game between two players.
///
/// Owns the board, both players and the state machine. The dispatching
/// player is tracked next to the state; while the game runs the state's
/// symbol on turn always equals `current`.
#[derive(Debug)]
pub struct TicTacToeGame {
    pub(crate) board: Board,
    player_x: Player,
    player_o: Player,
    pub(crate) current: Symbol,
    pub(crate) context: GameContext,
    pub(crate) history: Vec<Move>,
}

impl TicTacToeGame {
    /// Creates a 3x3 game. X moves first.
    pub fn new(x: Box<dyn PlayerStrategy>, o: Box<dyn PlayerStrategy>) -> Self {
        Self::from_board(Board::default(), x, o)
    }

    /// Creates a game on a `rows` x `cols` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if either dimension is zero.
    #[instrument(skip(x, o))]
    pub fn with_dimensions(
        x: Box<dyn PlayerStrategy>,
        o: Box<dyn PlayerStrategy>,
        rows: usize,
        cols: usize,
    ) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(rows, cols)?, x, o))
    }

    fn from_board(board: Board, x: Box<dyn PlayerStrategy>, o: Box<dyn PlayerStrategy>) -> Self {
        Self {
            board,
            player_x: Player::new(Symbol::X, x),
            player_o: Player::new(Symbol::O, o),
            current: Symbol::X,
            context: GameContext::new(),
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The state machine.
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// True iff the game reached a terminal state.
    pub fn is_game_over(&self) -> bool {
        self.context.is_game_over()
    }

    /// Symbol of the player who moves next.
    pub fn current_symbol(&self) -> Symbol {
        self.current
    }

    /// Plies applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The player holding `symbol`.
    pub fn player(&self, symbol: Symbol) -> &Player {
        match symbol {
            Symbol::X => &self.player_x,
            Symbol::O => &self.player_o,
        }
    }

    /// Outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.context.state().outcome()
    }

    /// Plays one ply: ask the current player, place, then advance state.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game already ended.
    /// - Any error from the current player's strategy.
    /// - [`GameError::InvalidMove`] if the strategy returned an unplayable
    ///   position.
    /// - [`GameError::InvariantViolation`] if the post-ply checks fail.
    ///   These run in debug builds only.
    #[instrument(skip(self), fields(symbol = %self.current, ply = self.history.len() + 1))]
    pub fn play_turn(&mut self) -> Result<GameState, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let symbol = self.current;
        let board = &self.board;
        let position = match symbol {
            Symbol::X => self.player_x.select_move(board),
            Symbol::O => self.player_o.select_move(board),
        }?;

        self.board.place_move(position, symbol)?;
        self.history.push(Move::new(symbol, position));

        let won = self.board.is_winning_cell(position, symbol);
        let state = if won {
            self.context.advance(symbol, true)?
        } else if self.board.is_full() {
            self.context.declare_draw()?
        } else {
            let state = self.context.advance(symbol, false)?;
            self.current = symbol.opponent();
            state
        };

        debug!(%position, ?state, "Ply complete");
        #[cfg(debug_assertions)]
        self.check_invariants()?;
        Ok(state)
    }

    /// Runs the loop to completion, rendering to `out`.
    ///
    /// The board is printed before every ply and once more at the end,
    /// followed by the result line.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`play_turn`](Self::play_turn) or from
    /// writing to `out`.
    #[instrument(skip(self, out), fields(rows = self.board.rows(), cols = self.board.cols()))]
    pub fn play(&mut self, out: &mut impl Write) -> Result<Outcome, GameError> {
        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            "Starting game"
        );

        while !self.is_game_over() {
            write!(out, "{}", self.board)?;
            out.flush()?;
            self.play_turn()?;
        }

        let outcome = self.outcome().ok_or(GameError::GameOver)?;
        write!(out, "{}", self.board)?;
        writeln!(out, "{}", outcome)?;

        match outcome.winner() {
            Some(symbol) => info!(winner = %self.player(symbol).name(), %outcome, "Game over"),
            None => info!(%outcome, "Game over"),
        }
        Ok(outcome)
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), GameError> {
        TicTacToeInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(descriptions)
        })
    }
}
