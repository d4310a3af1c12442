#[cfg(test)]
use std::ops::RangeInclusive;

// Character-set constants for the puzzle text format
pub(crate) const BLOCKED_CHAR: char = '*';
pub(crate) const OPEN_CHAR: char = '#';

#[cfg(test)]
pub(crate) const UPPERCASE_LETTERS: RangeInclusive<char> = 'A'..='Z';
#[cfg(test)]
pub(crate) const LOWERCASE_LETTERS: RangeInclusive<char> = 'a'..='z';

pub(crate) trait PuzzleChar {
    fn is_blocked_marker(&self) -> bool;
    fn is_open_marker(&self) -> bool;
    fn is_fill_letter(&self) -> bool;
}

impl PuzzleChar for char {
    fn is_blocked_marker(&self) -> bool {
        *self == BLOCKED_CHAR
    }
    fn is_open_marker(&self) -> bool {
        *self == OPEN_CHAR
    }
    fn is_fill_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
}
