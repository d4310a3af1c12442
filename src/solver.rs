//! The backtracking solver that assigns words to grid runs.
//!
//! # Search Policy
//!
//! Words are taken in input order, one at a time. For the current word the
//! grid is scanned row-major (row 0 first, then left to right within each
//! row); a cell is a candidate start only if it is open or already holds the
//! word's first letter. At each candidate start the across placement is
//! tried before the down placement. When a placement succeeds the solver
//! recurses on the next word; when the recursion dead-ends the placement is
//! undone from a snapshot and the scan continues. The whole search is
//! deterministic: the same grid and word list always produce the same
//! outcome, and the same filled grid when one exists.
//!
//! Every placement made on the way into a dead end is undone on the way
//! out, so a failed search leaves the grid exactly as it was.
//!
//! # Examples
//!
//! ## A solvable puzzle
//!
//! ```
//! use fillin::puzzle::Puzzle;
//! use fillin::solver::{self, SolveOutcome};
//!
//! let puzzle = Puzzle::parse_from_str("##\n##\n\nAB\n")?;
//! match solver::solve(&puzzle.grid, &puzzle.words) {
//!     SolveOutcome::Solved(grid) => assert_eq!(grid.render(), vec!["AB", "##"]),
//!     SolveOutcome::Impossible => panic!("this puzzle is solvable"),
//! }
//! # Ok::<(), fillin::errors::InputError>(())
//! ```
//!
//! ## An unsolvable puzzle
//!
//! ```
//! use fillin::puzzle::Puzzle;
//! use fillin::solver::{self, SolveOutcome};
//!
//! // The only open run is a single cell; a two-letter word cannot fit.
//! let puzzle = Puzzle::parse_from_str("*#\n\nAB\n")?;
//! assert_eq!(solver::solve(&puzzle.grid, &puzzle.words), SolveOutcome::Impossible);
//! # Ok::<(), fillin::errors::InputError>(())
//! ```

use log::debug;

use crate::grid::{Cell, Grid, Orientation};
use crate::puzzle::Word;

/// Outcome of a solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every word was placed; holds the completed grid.
    Solved(Grid),
    /// No combination of placements reachable under the search policy
    /// places every word.
    Impossible,
}

impl SolveOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

/// Try to place every word of `words` into a copy of `grid`.
///
/// The input grid is untouched; on success the outcome owns the completed
/// copy. Unfilled open cells stay open, so they render as `#`.
#[must_use]
pub fn solve(grid: &Grid, words: &[Word]) -> SolveOutcome {
    debug!(
        "solving {}x{} grid with {} words",
        grid.rows(),
        grid.cols(),
        words.len()
    );

    let mut working = grid.clone();
    if place_words(&mut working, words, 0) {
        SolveOutcome::Solved(working)
    } else {
        SolveOutcome::Impossible
    }
}

/// Depth-first placement of `words[k..]` into `grid`.
///
/// Returns `true` once `k` runs past the end of the list, i.e. every word
/// has a placement. On `false` the grid has been restored to the state the
/// caller passed in.
fn place_words(grid: &mut Grid, words: &[Word], k: usize) -> bool {
    let Some(word) = words.get(k) else {
        // every word is placed
        return true;
    };

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            // A word can only start on an open cell or one that already
            // holds its first letter.
            let cell = grid.cell(row, col);
            if !cell.is_open() && cell != Cell::Letter(word.first_letter()) {
                continue;
            }

            for orientation in Orientation::ALL {
                if !grid.fits(word.as_str(), row, col, orientation) {
                    continue;
                }

                let saved = grid.snapshot(word.len(), row, col, orientation);
                grid.place(word.as_str(), row, col, orientation);
                if place_words(grid, words, k + 1) {
                    return true;
                }
                grid.restore(&saved, row, col, orientation);
            }
        }
    }

    false
}
