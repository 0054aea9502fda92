//! Turn agreement invariant: the state machine and the dispatcher agree.

use super::super::TicTacToeGame;
use super::Invariant;

/// Invariant: while the game runs, the symbol on turn in the state
/// machine is the symbol of the player the loop will ask next.
pub struct TurnAgreementInvariant;

impl Invariant<TicTacToeGame> for TurnAgreementInvariant {
    fn holds(game: &TicTacToeGame) -> bool {
        match game.context().state().to_move() {
            Some(symbol) => symbol == game.current_symbol(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "State machine turn matches dispatching player"
    }
}
