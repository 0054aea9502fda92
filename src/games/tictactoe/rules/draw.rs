//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if every cell of the board is occupied.
///
/// A full board whose last move did not win is a draw.
#[instrument(skip(board), fields(moves = board.moves_made()))]
pub fn is_full(board: &Board) -> bool {
    board.moves_made() == board.rows() * board.cols()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Position, Symbol};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::default();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::default();
        board.place_move(Position::new(1, 1), Symbol::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_single_cell_board_full_after_one_move() {
        let mut board = Board::new(1, 1).unwrap();
        board.place_move(Position::new(0, 0), Symbol::O).unwrap();
        assert!(is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 3).unwrap();
        let mut symbol = Symbol::X;
        for row in 0..2 {
            for col in 0..3 {
                assert!(!is_full(&board));
                board.place_move(Position::new(row, col), symbol).unwrap();
                symbol = symbol.opponent();
            }
        }
        assert!(is_full(&board));
    }
}
