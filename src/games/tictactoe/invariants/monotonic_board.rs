//! Monotonic board invariant: cells never change once set.

use super::super::{Board, TicTacToeGame};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty board of the same size must
/// succeed move by move and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<TicTacToeGame> for MonotonicBoardInvariant {
    fn holds(game: &TicTacToeGame) -> bool {
        let board = game.board();
        let Ok(mut reconstructed) = Board::new(board.rows(), board.cols()) else {
            return false;
        };

        for mov in game.history() {
            if reconstructed.place_move(mov.position, mov.symbol).is_err() {
                return false;
            }
        }

        reconstructed == *board
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::scripted_game;
    use super::*;
    use crate::games::tictactoe::{Move, Position, Symbol};

    #[test]
    fn test_new_game_holds() {
        let game = scripted_game(&[], &[]);
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = scripted_game(&[(0, 0), (0, 2)], &[(1, 1), (2, 0)]);
        for _ in 0..4 {
            game.play_turn().unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_history_replaying_onto_taken_cell_violates() {
        let mut game = scripted_game(&[(1, 1)], &[]);
        game.play_turn().unwrap();

        // A second history entry for the same cell cannot be replayed.
        game.history.push(Move::new(Symbol::O, Position::new(1, 1)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
