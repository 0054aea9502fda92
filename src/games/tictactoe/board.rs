//! Rectangular tic-tac-toe board with move validation.

use super::error::GameError;
use super::rules;
use super::types::{Cell, Position, Symbol};
use tracing::{debug, instrument, warn};

/// Default side length of the board.
pub const DEFAULT_SIZE: usize = 3;

/// Grid of cells plus a running count of placed marks.
///
/// The count always equals the number of occupied cells, and an occupied
/// cell is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    moves_made: usize,
}

impl Board {
    /// Creates an empty `rows` x `cols` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if either dimension is
    /// zero, or if the cell count overflows or cannot be allocated.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            warn!(rows, cols, "Rejecting empty board dimensions");
            return Err(GameError::InvalidConfiguration { rows, cols });
        }
        let Some(size) = rows.checked_mul(cols) else {
            warn!(rows, cols, "Rejecting board whose cell count overflows");
            return Err(GameError::InvalidConfiguration { rows, cols });
        };

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|e| {
            warn!(rows, cols, error = %e, "Cannot allocate board");
            GameError::InvalidConfiguration { rows, cols }
        })?;
        cells.resize(size, Cell::Empty);

        Ok(Self {
            rows,
            cols,
            cells,
            moves_made: 0,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of marks placed so far.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Returns the cell at `pos`, or `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// True iff `pos` is on the board and the cell is empty.
    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Places `symbol` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] when `pos` is off the board or
    /// already taken. The board is left untouched in that case.
    #[instrument(skip(self), fields(moves = self.moves_made))]
    pub fn place_move(&mut self, pos: Position, symbol: Symbol) -> Result<(), GameError> {
        let idx = match self.index(pos) {
            Some(idx) if self.cells[idx] == Cell::Empty => idx,
            _ => {
                warn!(%pos, %symbol, "Rejected placement");
                return Err(GameError::InvalidMove(pos));
            }
        };

        self.cells[idx] = Cell::Occupied(symbol);
        self.moves_made += 1;
        debug!(%pos, %symbol, moves = self.moves_made, "Placed mark");
        Ok(())
    }

    /// True once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks whether the mark just placed at `pos` completes a line.
    pub fn is_winning_cell(&self, pos: Position, symbol: Symbol) -> bool {
        rules::is_winning_cell(self, pos, symbol)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            cells: vec![Cell::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
            moves_made: 0,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|cell| cell.glyph().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
