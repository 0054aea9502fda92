//! Turn and result state machine.
//!
//! The state is a plain enum replaced by assignment on every transition.
//! Terminal variants carry the outcome directly, so reporting the result
//! is a `match` rather than a type query.

use super::error::GameError;
use super::types::Symbol;
use tracing::{debug, instrument, warn};

/// Whose turn it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum GameState {
    /// X to move.
    TurnOfFirst,
    /// O to move.
    TurnOfSecond,
    /// X completed a line.
    FirstWon,
    /// O completed a line.
    SecondWon,
    /// Board filled with no line.
    Draw,
}

impl GameState {
    /// True for `FirstWon`, `SecondWon` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::TurnOfFirst | GameState::TurnOfSecond)
    }

    /// Symbol on turn, if the game is still running.
    pub fn to_move(self) -> Option<Symbol> {
        match self {
            GameState::TurnOfFirst => Some(Symbol::X),
            GameState::TurnOfSecond => Some(Symbol::O),
            _ => None,
        }
    }

    /// Outcome encoded by a terminal state.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameState::FirstWon => Some(Outcome::Winner(Symbol::X)),
            GameState::SecondWon => Some(Outcome::Winner(Symbol::O)),
            GameState::Draw => Some(Outcome::Draw),
            GameState::TurnOfFirst | GameState::TurnOfSecond => None,
        }
    }

    fn won_by(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => GameState::FirstWon,
            Symbol::O => GameState::SecondWon,
        }
    }

    fn turn_of(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => GameState::TurnOfFirst,
            Symbol::O => GameState::TurnOfSecond,
        }
    }

    /// Computes the state after `mover` finishes a ply.
    ///
    /// A winning ply always ends the game in favour of `mover`, even when
    /// `mover` was not on turn. A non-winning ply by the wrong player is
    /// rejected.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] from a terminal state.
    /// - [`GameError::WrongTurn`] for a non-winning ply out of turn.
    #[instrument]
    pub fn next(self, mover: Symbol, won: bool) -> Result<GameState, GameError> {
        let Some(expected) = self.to_move() else {
            return Err(GameError::GameOver);
        };

        if mover != expected {
            if !won {
                return Err(GameError::WrongTurn {
                    expected,
                    actual: mover,
                });
            }
            warn!(%expected, %mover, "Winning ply reported for player not on turn");
        }

        if won {
            Ok(GameState::won_by(mover))
        } else {
            Ok(GameState::turn_of(mover.opponent()))
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("Player {} Wins", _0)]
    Winner(Symbol),
    /// Board filled with no line.
    #[display("It's a draw!")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(*symbol),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Holder of the single live [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameContext {
    state: GameState,
}

impl GameContext {
    /// Starts at [`GameState::TurnOfFirst`].
    pub fn new() -> Self {
        Self {
            state: GameState::TurnOfFirst,
        }
    }

    /// Current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// True iff the current state is terminal.
    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Applies a finished ply and replaces the current state.
    ///
    /// # Errors
    ///
    /// See [`GameState::next`]. The state is unchanged on error.
    #[instrument(skip(self), fields(from = ?self.state))]
    pub fn advance(&mut self, mover: Symbol, won: bool) -> Result<GameState, GameError> {
        let next = self.state.next(mover, won)?;
        debug!(to = ?next, "State transition");
        self.state = next;
        Ok(next)
    }

    /// Ends a running game as a draw.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game already ended.
    #[instrument(skip(self), fields(from = ?self.state))]
    pub fn declare_draw(&mut self) -> Result<GameState, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        self.state = GameState::Draw;
        Ok(self.state)
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_transition_table() {
        use GameState::*;

        assert_eq!(TurnOfFirst.next(Symbol::X, false), Ok(TurnOfSecond));
        assert_eq!(TurnOfFirst.next(Symbol::X, true), Ok(FirstWon));
        assert_eq!(TurnOfFirst.next(Symbol::O, true), Ok(SecondWon));
        assert_eq!(TurnOfSecond.next(Symbol::O, false), Ok(TurnOfFirst));
        assert_eq!(TurnOfSecond.next(Symbol::O, true), Ok(SecondWon));
        assert_eq!(TurnOfSecond.next(Symbol::X, true), Ok(FirstWon));
    }

    #[test]
    fn test_out_of_turn_non_winning_ply_rejected() {
        assert_eq!(
            GameState::TurnOfFirst.next(Symbol::O, false),
            Err(GameError::WrongTurn {
                expected: Symbol::X,
                actual: Symbol::O
            })
        );
        assert!(GameState::TurnOfSecond.next(Symbol::X, false).is_err());
    }

    #[test]
    fn test_terminal_states_reject_transitions() {
        for state in GameState::iter().filter(|s| s.is_terminal()) {
            for mover in [Symbol::X, Symbol::O] {
                for won in [false, true] {
                    assert_eq!(state.next(mover, won), Err(GameError::GameOver));
                }
            }
        }
    }

    #[test]
    fn test_terminal_iff_outcome() {
        for state in GameState::iter() {
            assert_eq!(state.is_terminal(), state.outcome().is_some());
            assert_eq!(state.is_terminal(), state.to_move().is_none());
        }
    }

    #[test]
    fn test_context_alternates() {
        let mut context = GameContext::new();
        let mut mover = Symbol::X;
        for _ in 0..6 {
            assert!(!context.is_game_over());
            assert_eq!(context.state().to_move(), Some(mover));
            context.advance(mover, false).unwrap();
            mover = mover.opponent();
        }
    }

    #[test]
    fn test_context_rejects_after_terminal() {
        let mut context = GameContext::new();
        context.advance(Symbol::X, true).unwrap();
        assert!(context.is_game_over());
        assert_eq!(context.advance(Symbol::O, false), Err(GameError::GameOver));
        assert_eq!(context.declare_draw(), Err(GameError::GameOver));
        assert_eq!(context.state(), GameState::FirstWon);
    }

    #[test]
    fn test_declare_draw() {
        let mut context = GameContext::new();
        context.advance(Symbol::X, false).unwrap();
        assert_eq!(context.declare_draw(), Ok(GameState::Draw));
        assert_eq!(context.state().outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Symbol::X).to_string(), "Player X Wins");
        assert_eq!(Outcome::Winner(Symbol::O).to_string(), "Player O Wins");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }
}
