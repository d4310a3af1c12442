//! Error types for puzzle loading and validation, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E007) for documentation lookup:
//!
//! - E001: `EmptyGrid` (Puzzle text contains no grid rows)
//! - E002: `RaggedGrid` (Grid rows differ in width)
//! - E003: `InvalidGridChar` (Character outside the grid alphabet)
//! - E004: `NoWords` (Puzzle text contains no words)
//! - E005: `WordTooShort` (Word shorter than two letters)
//! - E006: `InvalidWordChar` (Non-letter character in a word)
//! - E007: `Io` (Underlying I/O failure)
//!
//! Row and column positions in error values are 1-based, matching how a
//! person counts lines in the puzzle file.
//!
//! # Examples
//!
//! ```
//! use fillin::errors::InputError;
//!
//! fn require_words(lines: &[&str]) -> Result<usize, InputError> {
//!     if lines.is_empty() {
//!         return Err(InputError::NoWords);
//!     }
//!     Ok(lines.len())
//! }
//!
//! match require_words(&[]) {
//!     Err(e) => {
//!         println!("Error: {e}");
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {help}");
//!         }
//!     }
//!     Ok(n) => println!("{n} words"),
//! }
//! ```

use std::io;

/// Custom error type for puzzle loading and validation
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Puzzle grid is empty")]
    EmptyGrid,

    #[error("Grid row {row} is {len} cells wide (expected {expected})")]
    RaggedGrid { row: usize, len: usize, expected: usize },

    #[error("Invalid grid character '{invalid_char}' at row {row}, column {col}")]
    InvalidGridChar { invalid_char: char, row: usize, col: usize },

    #[error("Puzzle has no words")]
    NoWords,

    #[error("Word \"{word}\" is too short (at least 2 letters required)")]
    WordTooShort { word: String },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only A-Z and a-z allowed)")]
    InvalidWordChar { word: String, invalid_char: char },

    #[error("{0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::EmptyGrid => "E001",
            InputError::RaggedGrid { .. } => "E002",
            InputError::InvalidGridChar { .. } => "E003",
            InputError::NoWords => "E004",
            InputError::WordTooShort { .. } => "E005",
            InputError::InvalidWordChar { .. } => "E006",
            InputError::Io(_) => "E007",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::EmptyGrid => Some("Start the puzzle with one line per grid row, e.g. '*##' (blocked, open, open)"),
            InputError::RaggedGrid { .. } => Some("Every grid row must be as wide as the first row"),
            InputError::InvalidGridChar { .. } => Some("Grid rows may contain only '*' (blocked), '#' (open), and letters (pre-filled)"),
            InputError::NoWords => Some("List one word per line after the blank line that ends the grid"),
            InputError::WordTooShort { .. } => Some("Every word must be at least 2 letters long"),
            InputError::InvalidWordChar { .. } => Some("Words must consist of letters only, with no spaces or punctuation"),
            InputError::Io(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
