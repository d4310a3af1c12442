//! The puzzle grid: a rectangular board of blocked, open, and lettered cells,
//! plus the placement primitives the solver is built on.
//!
//! Cells are stored row-major in a single `Vec`, addressed as
//! `row * cols + col`. All placement operations (`fits`, `place`, `snapshot`,
//! `restore`) walk a straight run of cells from a starting coordinate in one
//! of the two [`Orientation`]s.

use std::fmt;

use crate::puzzle_char::{PuzzleChar, BLOCKED_CHAR, OPEN_CHAR};

/// A single grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Never writable; terminates runs.
    Blocked,
    /// Writable and not yet holding a letter.
    Open,
    /// Holds a letter, either pre-filled in the puzzle or written by the
    /// solver. Case matters: 'A' and 'a' are distinct.
    Letter(char),
}

impl Cell {
    /// Map one character of puzzle text to a cell, or `None` if the
    /// character is not part of the grid alphabet.
    pub fn from_input_char(c: char) -> Option<Self> {
        if c.is_blocked_marker() {
            Some(Cell::Blocked)
        } else if c.is_open_marker() {
            Some(Cell::Open)
        } else if c.is_fill_letter() {
            Some(Cell::Letter(c))
        } else {
            None
        }
    }

    /// The character this cell renders as.
    pub fn to_char(self) -> char {
        match self {
            Cell::Blocked => BLOCKED_CHAR,
            Cell::Open => OPEN_CHAR,
            Cell::Letter(c) => c,
        }
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, Cell::Blocked)
    }

    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }
}

/// Direction of travel for a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right within a row.
    Across,
    /// Top to bottom within a column.
    Down,
}

impl Orientation {
    /// Both orientations, in the order the solver tries them.
    pub const ALL: [Orientation; 2] = [Orientation::Across, Orientation::Down];

    /// `(row, col)` step between consecutive cells of a run.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }
}

/// A rectangular puzzle grid.
///
/// Construction goes through the puzzle parser, which guarantees at least
/// one row, equal-width rows, and cells drawn from the grid alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major; index = row * cols + col.
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert!(rows > 0 && cols > 0, "grid must be non-empty");
        debug_assert_eq!(cells.len(), rows * cols, "cell count must match dimensions");
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`. Panics if the coordinate is off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "coordinate off the grid");
        row * self.cols + col
    }

    /// Can `word` be placed starting at `(row, col)` travelling in
    /// `orientation`?
    ///
    /// Three checks, all required:
    /// - the last cell of the run stays on the grid;
    /// - the run starts at a boundary: the cell immediately before the start,
    ///   when one exists in the direction of travel, is blocked (words may
    ///   not begin mid-run);
    /// - every cell of the run is open or already holds the matching letter.
    ///
    /// `word` must be non-empty ASCII; the puzzle parser guarantees this.
    pub fn fits(&self, word: &str, row: usize, col: usize, orientation: Orientation) -> bool {
        debug_assert!(!word.is_empty() && word.is_ascii());
        let (d_row, d_col) = orientation.delta();
        let len = word.len();

        let end_row = row + d_row * (len - 1);
        let end_col = col + d_col * (len - 1);
        if end_row >= self.rows || end_col >= self.cols {
            return false;
        }

        let before = match orientation {
            Orientation::Across => col.checked_sub(1).map(|c| (row, c)),
            Orientation::Down => row.checked_sub(1).map(|r| (r, col)),
        };
        if let Some((r, c)) = before {
            if !self.cell(r, c).is_blocked() {
                return false;
            }
        }

        word.chars().enumerate().all(|(i, ch)| {
            match self.cell(row + i * d_row, col + i * d_col) {
                Cell::Open => true,
                Cell::Letter(existing) => existing == ch,
                Cell::Blocked => false,
            }
        })
    }

    /// Write `word` into the run starting at `(row, col)`.
    ///
    /// Open cells and already-lettered cells take the word's letters;
    /// blocked cells are left untouched (a run accepted by [`Grid::fits`]
    /// never contains one).
    pub fn place(&mut self, word: &str, row: usize, col: usize, orientation: Orientation) {
        let (d_row, d_col) = orientation.delta();
        for (i, ch) in word.chars().enumerate() {
            let idx = self.index(row + i * d_row, col + i * d_col);
            if !self.cells[idx].is_blocked() {
                self.cells[idx] = Cell::Letter(ch);
            }
        }
    }

    /// Capture the `len` cells of the run starting at `(row, col)`, in run
    /// order, so a later [`Grid::restore`] can undo a placement exactly.
    pub fn snapshot(&self, len: usize, row: usize, col: usize, orientation: Orientation) -> Vec<Cell> {
        let (d_row, d_col) = orientation.delta();
        (0..len)
            .map(|i| self.cell(row + i * d_row, col + i * d_col))
            .collect()
    }

    /// Write a snapshot back over the run it was taken from, restoring the
    /// exact cell values from before the corresponding placement.
    pub fn restore(&mut self, saved: &[Cell], row: usize, col: usize, orientation: Orientation) {
        let (d_row, d_col) = orientation.delta();
        for (i, &cell) in saved.iter().enumerate() {
            let idx = self.index(row + i * d_row, col + i * d_col);
            self.cells[idx] = cell;
        }
    }

    /// The grid as rows of puzzle text, one `String` per row.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    /// One row per line, each line newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
