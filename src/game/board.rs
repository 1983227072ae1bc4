use super::PlayerId;

/// Number of same-player pieces in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Step vectors (row, col) checked from every origin cell: right, down,
/// down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Piece(id) => Some(id),
        }
    }
}

/// A `height` x `width` grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Row a piece dropped into `col` would land on, or `None` if the column
    /// is full or does not exist.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| self.get(row, col).is_empty())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.drop_row(col).is_none()
    }

    /// Columns that can still take a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Put a piece for `id` into an empty cell. Returns `false` and leaves the
    /// board untouched if the cell is already occupied.
    pub fn place(&mut self, row: usize, col: usize, id: PlayerId) -> bool {
        let idx = row * self.width + col;
        if !self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = Cell::Piece(id);
        true
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Scan every cell as the origin of a four-long line in each direction and
    /// return the first line fully owned by `id`. Lines that leave the board
    /// are discarded; nothing wraps around.
    pub fn winning_line(&self, id: PlayerId) -> Option<[(usize, usize); WIN_LENGTH]> {
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.line_from(row, col, dr, dc) {
                        if line
                            .iter()
                            .all(|&(r, c)| self.get(r, c) == Cell::Piece(id))
                        {
                            return Some(line);
                        }
                    }
                }
            }
        }
        None
    }

    /// Check if `id` owns four in a row anywhere on the board
    pub fn has_four(&self, id: PlayerId) -> bool {
        self.winning_line(id).is_some()
    }

    /// The four in-bounds cells starting at (row, col) stepping by (dr, dc).
    fn line_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<[(usize, usize); WIN_LENGTH]> {
        let mut line = [(0, 0); WIN_LENGTH];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }
}
