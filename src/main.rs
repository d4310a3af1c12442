use std::io::Read;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use fillin::errors::InputError;
use fillin::puzzle::Puzzle;
use fillin::solver::{self, SolveOutcome};

/// Printed on stdout when no assignment of words to runs exists.
const UNSOLVABLE_MARKER: &str = "IMPOSSIBLE";

/// Printed on stdout when the puzzle text fails validation.
const INVALID_INPUT_MARKER: &str = "INVALID INPUT";

/// Version string shown by `--version`: crate version plus the git commit
/// the binary was built from.
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Fill-in puzzle solver
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the puzzle file (grid rows, a blank line, then one word per
    /// line). Reads the puzzle from stdin when omitted.
    puzzle_file: Option<String>,
}

/// Entry point of the fillin CLI.
///
/// Delegates to [`try_main`], catching any errors, printing the fixed
/// "INVALID INPUT" marker on stdout and the detailed explanation on stderr
/// before exiting with a nonzero code.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("FILLIN_DEBUG").is_ok();
    fillin::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // The marker goes to stdout for scripted callers; the explanation
        // goes to stderr for people.
        println!("{INVALID_INPUT_MARKER}");
        eprintln!("Error: {}", e.display_detailed());
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the fillin CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load and validate the puzzle, from the given file or from stdin.
/// 3. Run the solver.
/// 4. Print the filled grid (or "IMPOSSIBLE") on stdout.
/// 5. Print performance metrics (sizes, timings) on stderr.
///
/// An unsolvable puzzle is a normal answer, not an error, so it still
/// returns `Ok(())`. Errors here are invalid puzzle text or I/O failures,
/// which bubble up to [`main`].
fn try_main() -> Result<(), InputError> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the puzzle from disk or stdin, validating as we go
    let t_load = Instant::now();
    let puzzle = match &cli.puzzle_file {
        Some(path) => Puzzle::load_from_path(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Puzzle::parse_from_str(&text)?
        }
    };
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Assign words to runs
    let t_solve = Instant::now();
    let outcome = solver::solve(&puzzle.grid, &puzzle.words);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print the answer on stdout: the filled grid, or the fixed marker
    match &outcome {
        SolveOutcome::Solved(grid) => print!("{grid}"),
        SolveOutcome::Impossible => println!("{UNSOLVABLE_MARKER}"),
    }

    // 4. Print diagnostics (grid size, word count, timings) to stderr
    eprintln!(
        "Loaded {}x{} grid and {} words in {:.3}s; solved in {:.3}s.",
        puzzle.grid.rows(),
        puzzle.grid.cols(),
        puzzle.words.len(),
        load_secs,
        solve_secs
    );

    Ok(())
}
