//! Move count invariant: the counter, the cells and the history agree.

use super::super::{Cell, TicTacToeGame};
use super::Invariant;

/// Invariant: moves made equals occupied cells equals history length.
pub struct MoveCountInvariant;

impl Invariant<TicTacToeGame> for MoveCountInvariant {
    fn holds(game: &TicTacToeGame) -> bool {
        let board = game.board();
        let occupied = board.cells().filter(|c| *c != Cell::Empty).count();

        board.moves_made() == occupied && occupied == game.history().len()
    }

    fn description() -> &'static str {
        "Move count matches occupied cells and history"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::scripted_game;
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let game = scripted_game(&[], &[]);
        assert!(MoveCountInvariant::holds(&game));
    }

    #[test]
    fn test_holds_through_full_game() {
        let mut game = scripted_game(&[(0, 0), (1, 1), (2, 2)], &[(0, 1), (0, 2)]);
        while !game.is_game_over() {
            game.play_turn().unwrap();
            assert!(MoveCountInvariant::holds(&game));
        }
    }

    #[test]
    fn test_lost_history_violates() {
        let mut game = scripted_game(&[(2, 1)], &[]);
        game.play_turn().unwrap();
        game.history.clear();
        assert!(!MoveCountInvariant::holds(&game));
    }
}
