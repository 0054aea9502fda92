//! Win detection logic for tic-tac-toe.
//!
//! Only the most recent placement can create a new line, so the check
//! walks the row, column and (where the cell lies on one) diagonals
//! through that cell instead of rescanning the whole board.

use super::super::{Board, Cell, Position, Symbol};
use tracing::instrument;

/// Checks whether `symbol` at `pos` completes a full line.
///
/// Lines considered: the row and column of `pos`, the main diagonal when
/// `row == col`, and the anti-diagonal when `row + col == cols - 1`.
/// Diagonals only exist on square boards. Returns `false` when `pos` is
/// off the board.
#[instrument(skip(board))]
pub fn is_winning_cell(board: &Board, pos: Position, symbol: Symbol) -> bool {
    let (rows, cols) = (board.rows(), board.cols());
    if pos.row >= rows || pos.col >= cols {
        return false;
    }

    let owned = |row: usize, col: usize| {
        board.get(Position::new(row, col)) == Some(Cell::Occupied(symbol))
    };

    if (0..cols).all(|col| owned(pos.row, col)) {
        return true;
    }

    if (0..rows).all(|row| owned(row, pos.col)) {
        return true;
    }

    if rows != cols {
        return false;
    }

    if pos.row == pos.col && (0..rows).all(|i| owned(i, i)) {
        return true;
    }

    pos.row + pos.col == cols - 1 && (0..rows).all(|i| owned(i, cols - 1 - i))
}
