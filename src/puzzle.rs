//! `puzzle`: loading and validation of fill-in puzzle descriptions.
//!
//! This module is responsible for reading a puzzle (either from a file, or
//! from an in-memory string, which is what the CLI uses when the puzzle
//! arrives on stdin) and turning it into a validated [`Grid`] plus word list
//! ready for the solver.
//!
//! The puzzle text format:
//! - First the grid, one line per row: `*` is a blocked cell, `#` is an open
//!   cell, and a letter is a pre-filled cell. Rows must all have the same
//!   width.
//! - Then a blank line.
//! - Then the words, one per line, in the order the solver should try them.
//!   Words are letters only (A-Z, a-z, case preserved) and at least 2 letters
//!   long. A blank line or the end of input ends the list; anything after a
//!   terminating blank line is ignored.
//!
//! Validation is strict: any character outside the grid alphabet, any ragged
//! row, any malformed word, an empty grid, or an empty word list is an
//! [`InputError`] rather than a best-effort repair.

use std::fmt;
use std::str::FromStr;

use crate::errors::InputError;
use crate::grid::{Cell, Grid};
use crate::puzzle_char::PuzzleChar;

/// A validated fill word: at least two ASCII letters, case preserved.
///
/// Parsing is the only way to construct one, so every `Word` the solver
/// sees already satisfies the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (equal to byte length; words are ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First letter, used to prune candidate start cells.
    pub(crate) fn first_letter(&self) -> char {
        self.0.as_bytes()[0] as char
    }
}

impl FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() < 2 {
            return Err(InputError::WordTooShort { word: s.to_string() });
        }
        if let Some(bad) = s.chars().find(|c| !c.is_fill_letter()) {
            return Err(InputError::InvalidWordChar {
                word: s.to_string(),
                invalid_char: bad,
            });
        }
        Ok(Word(s.to_string()))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed, validated puzzle: the grid and the words to place in it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    /// Words in input order. The solver tries them exactly as listed, so
    /// order (and any duplicates) are preserved here.
    pub words: Vec<Word>,
}

impl Puzzle {
    /// Parse a puzzle from an in-memory string.
    ///
    /// # Examples
    ///
    /// ```
    /// use fillin::puzzle::Puzzle;
    ///
    /// let puzzle = Puzzle::parse_from_str("*##\n###\n\ncat\nat\n")?;
    /// assert_eq!(puzzle.grid.rows(), 2);
    /// assert_eq!(puzzle.grid.cols(), 3);
    /// assert_eq!(puzzle.words.len(), 2);
    /// # Ok::<(), fillin::errors::InputError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] describing the first formatting rule the
    /// text breaks.
    pub fn parse_from_str(contents: &str) -> Result<Puzzle, InputError> {
        // `str::lines` splits on both `\n` and `\r\n`, so Windows line
        // endings come through as clean lines.
        let mut lines = contents.lines();

        // Grid section: everything up to the first blank line.
        let grid_rows: Vec<&str> = lines.by_ref().take_while(|l| !l.is_empty()).collect();
        let grid = parse_grid(&grid_rows)?;

        // Word section: everything up to the next blank line or the end of
        // input. Each line must be a well-formed word.
        let words = lines
            .take_while(|l| !l.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Word>, _>>()?;

        if words.is_empty() {
            return Err(InputError::NoWords);
        }

        Ok(Puzzle { grid, words })
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the file cannot be read or its contents
    /// are not a valid puzzle.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Puzzle, InputError> {
        let path_ref = path.as_ref();

        // Read the entire file into a single string.
        // Using `read_to_string` ensures UTF-8 decoding.
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read puzzle from '{}': {}", path_ref.display(), e),
            )
        })?;

        Self::parse_from_str(&data)
    }
}

/// Validate the grid section and build the [`Grid`].
///
/// The first row fixes the expected width. Row and column positions in
/// errors are 1-based.
fn parse_grid(rows: &[&str]) -> Result<Grid, InputError> {
    let Some(first) = rows.first() else {
        return Err(InputError::EmptyGrid);
    };
    let cols = first.chars().count();
    let mut cells = Vec::with_capacity(rows.len() * cols);

    for (r, line) in rows.iter().enumerate() {
        let len = line.chars().count();
        if len != cols {
            return Err(InputError::RaggedGrid {
                row: r + 1,
                len,
                expected: cols,
            });
        }
        for (c, ch) in line.chars().enumerate() {
            let cell = Cell::from_input_char(ch).ok_or(InputError::InvalidGridChar {
                invalid_char: ch,
                row: r + 1,
                col: c + 1,
            })?;
            cells.push(cell);
        }
    }

    Ok(Grid::from_cells(rows.len(), cols, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_as_strs(puzzle: &Puzzle) -> Vec<&str> {
        puzzle.words.iter().map(Word::as_str).collect()
    }

    #[test]
    fn test_parse_basic() {
        let input = "*##\n###\n\ncat\nat\n";
        let puzzle = Puzzle::parse_from_str(input).unwrap();

        assert_eq!(puzzle.grid.rows(), 2);
        assert_eq!(puzzle.grid.cols(), 3);
        assert_eq!(puzzle.grid.render(), vec!["*##", "###"]);
        assert_eq!(words_as_strs(&puzzle), vec!["cat", "at"]);
    }

    #[test]
    fn test_parse_prefilled_letters() {
        let input = "#A#\n\ncat\n";
        let puzzle = Puzzle::parse_from_str(input).unwrap();

        assert_eq!(puzzle.grid.cell(0, 1), Cell::Letter('A'));
        assert!(puzzle.grid.cell(0, 0).is_open());
    }

    #[test]
    fn test_parse_preserves_word_order_and_duplicates() {
        let input = "####\n\nbb\naa\nbb\n";
        let puzzle = Puzzle::parse_from_str(input).unwrap();

        assert_eq!(words_as_strs(&puzzle), vec!["bb", "aa", "bb"]);
    }

    #[test]
    fn test_parse_preserves_case() {
        let input = "##\n\nAb\n";
        let puzzle = Puzzle::parse_from_str(input).unwrap();

        assert_eq!(words_as_strs(&puzzle), vec!["Ab"]);
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let input = "##\r\n##\r\n\r\nab\r\ncd\r\n";
        let puzzle = Puzzle::parse_from_str(input).unwrap();

        assert_eq!(puzzle.grid.render(), vec!["##", "##"]);
        assert_eq!(words_as_strs(&puzzle), vec!["ab", "cd"]);
    }

    #[test]
    fn test_parse_missing_trailing_newline() {
        let input = "##\n\nab";
        let puzzle = Puzzle::parse_from_str(input).unwrap();

        assert_eq!(words_as_strs(&puzzle), vec!["ab"]);
    }

    #[test]
    fn test_parse_ignores_content_after_words() {
        let input = "##\n\nab\n\nthis line is ignored\nso is this\n";
        let puzzle = Puzzle::parse_from_str(input).unwrap();

        assert_eq!(words_as_strs(&puzzle), vec!["ab"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            Puzzle::parse_from_str(""),
            Err(InputError::EmptyGrid)
        ));
    }

    #[test]
    fn test_parse_blank_first_line() {
        assert!(matches!(
            Puzzle::parse_from_str("\nab\n"),
            Err(InputError::EmptyGrid)
        ));
    }

    #[test]
    fn test_parse_ragged_rows() {
        let err = Puzzle::parse_from_str("###\n##\n\nab\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::RaggedGrid { row: 2, len: 2, expected: 3 }
        ));
    }

    #[test]
    fn test_parse_invalid_grid_char() {
        let err = Puzzle::parse_from_str("##\n#5\n\nab\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidGridChar { invalid_char: '5', row: 2, col: 2 }
        ));
    }

    #[test]
    fn test_parse_space_in_grid_is_invalid() {
        let err = Puzzle::parse_from_str("# #\n\nab\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidGridChar { invalid_char: ' ', row: 1, col: 2 }
        ));
    }

    #[test]
    fn test_parse_no_words_at_eof() {
        assert!(matches!(
            Puzzle::parse_from_str("##\n##\n"),
            Err(InputError::NoWords)
        ));
    }

    #[test]
    fn test_parse_no_words_after_blank_line() {
        assert!(matches!(
            Puzzle::parse_from_str("##\n##\n\n"),
            Err(InputError::NoWords)
        ));
    }

    #[test]
    fn test_parse_word_too_short() {
        let err = Puzzle::parse_from_str("##\n\na\n").unwrap_err();
        assert!(matches!(err, InputError::WordTooShort { word } if word == "a"));
    }

    #[test]
    fn test_parse_word_with_digit() {
        let err = Puzzle::parse_from_str("###\n\nab1\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidWordChar { invalid_char: '1', .. }
        ));
    }

    #[test]
    fn test_parse_word_with_space() {
        let err = Puzzle::parse_from_str("#####\n\nab cd\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidWordChar { invalid_char: ' ', .. }
        ));
    }

    #[test]
    fn test_word_from_str() {
        let word: Word = "Cat".parse().unwrap();
        assert_eq!(word.as_str(), "Cat");
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
        assert_eq!(word.first_letter(), 'C');
        assert_eq!(word.to_string(), "Cat");
    }

    #[test]
    fn test_word_rejects_ascii_between_letter_ranges() {
        // '[', '\\', ']', '^', '_', '`' sit between 'Z' and 'a' in ASCII
        for bad in ['[', '\\', ']', '^', '_', '`'] {
            let input = format!("a{bad}");
            let err = input.parse::<Word>().unwrap_err();
            assert!(
                matches!(err, InputError::InvalidWordChar { invalid_char, .. } if invalid_char == bad)
            );
        }
    }

    #[test]
    fn test_word_rejects_empty_and_single_letter() {
        assert!(matches!(
            "".parse::<Word>(),
            Err(InputError::WordTooShort { .. })
        ));
        assert!(matches!(
            "x".parse::<Word>(),
            Err(InputError::WordTooShort { .. })
        ));
    }
}
