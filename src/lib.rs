// Reusable library API, shared by the CLI and the integration tests
pub mod errors;
pub mod grid;
pub mod log;
pub mod puzzle;
mod puzzle_char;
pub mod solver;
