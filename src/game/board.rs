use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single-character symbol for terminal rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Errors from applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column index out of range")]
    InvalidColumn,
    #[error("the game is already over")]
    GameOver,
}

/// The playing grid. Row 0 is the top, row `rows - 1` the bottom; within any
/// column the occupied cells form a contiguous run up from the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check whether a piece can be dropped in a column. Out-of-range
    /// columns are unplayable, not a fault.
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.set(row, col, cell);
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// Remove the most recently dropped piece in a column. Used by the
    /// search to backtrack simulated moves. No-op on an empty or
    /// out-of-range column.
    pub fn undo_drop(&mut self, col: usize) {
        if col >= self.cols {
            return;
        }
        for row in 0..self.rows {
            if self.get(row, col) != Cell::Empty {
                self.set(row, col, Cell::Empty);
                return;
            }
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.get(0, col) != Cell::Empty)
    }

    /// Check whether `cell` has four in a row anywhere on the board, along
    /// any row, column, or diagonal.
    pub fn has_connect_four(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        // Horizontal
        for row in 0..self.rows {
            for col in 0..self.cols.saturating_sub(3) {
                if (0..4).all(|i| self.get(row, col + i) == cell) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..self.cols {
            for row in 0..self.rows.saturating_sub(3) {
                if (0..4).all(|i| self.get(row + i, col) == cell) {
                    return true;
                }
            }
        }

        // Diagonal / (up-right)
        for row in 3..self.rows {
            for col in 0..self.cols.saturating_sub(3) {
                if (0..4).all(|i| self.get(row - i, col + i) == cell) {
                    return true;
                }
            }
        }

        // Diagonal \ (down-right)
        for row in 0..self.rows.saturating_sub(3) {
            for col in 0..self.cols.saturating_sub(3) {
                if (0..4).all(|i| self.get(row + i, col + i) == cell) {
                    return true;
                }
            }
        }

        false
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        for col in 0..self.cols {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", col % 10)?;
        }
        writeln!(f)
    }
}
