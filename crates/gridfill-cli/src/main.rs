//! Command-line harness for the gridfill solver.
//!
//! Reads a puzzle from a file, stdin, or a built-in sample, runs the
//! backtracking search, and prints the solution (or "no solution") along with
//! the states-explored count and wall-clock time.
//!
//! ```sh
//! # Solve the built-in sample puzzle
//! gridfill
//!
//! # Solve a puzzle from a file with the naive reference policies
//! gridfill puzzle.txt --selection first-empty --unchecked
//!
//! # Read from stdin, abort after exploring a million states
//! cat puzzle.txt | gridfill - --limit 1000000
//! ```

use std::{error::Error, fs, io::Read as _, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use gridfill_core::Board;
use gridfill_solver::{BacktrackSolver, CellSelection, SearchStats, SuccessorPolicy};

/// Cell-selection policy names exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Selection {
    /// Fill the empty cell with the fewest remaining candidates.
    MostConstrained,
    /// Fill the first empty cell in scan order.
    FirstEmpty,
}

impl From<Selection> for CellSelection {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::MostConstrained => CellSelection::MostConstrained,
            Selection::FirstEmpty => CellSelection::FirstEmpty,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a puzzle file, or `-` for stdin. Solves a built-in sample
    /// puzzle when omitted.
    puzzle: Option<PathBuf>,

    /// Cell selection policy.
    #[arg(long, value_name = "POLICY", default_value = "most-constrained")]
    selection: Selection,

    /// Disable forward checking of successor boards.
    #[arg(long)]
    unchecked: bool,

    /// Abort after exploring this many states.
    #[arg(long, value_name = "COUNT")]
    limit: Option<usize>,
}

/// The puzzle solved when no input is given.
const SAMPLE: &str = "
    ___ __8 9_2
    6_4 3__ ___
    ___ 59_ ___
    __5 7_3 __9
    7__ _4_ ___
    __9 ___ 3_5
    _8_ __4 ___
    _41 ___ _3_
    2__ 15_ ___
";

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn Error>> {
    let text = read_puzzle_text(args.puzzle.as_ref())?;
    let puzzle: Board = text.parse()?;

    let successors = if args.unchecked {
        SuccessorPolicy::Unchecked
    } else {
        SuccessorPolicy::ForwardChecked
    };
    let mut solver = BacktrackSolver::new(args.selection.into(), successors);
    if let Some(limit) = args.limit {
        solver = solver.with_node_limit(limit);
    }

    println!("{puzzle}");
    println!();

    let mut stats = SearchStats::new();
    let start = Instant::now();
    let outcome = solver.solve_with_stats(&puzzle, &mut stats)?;
    let elapsed = start.elapsed();

    let code = match outcome {
        Some(solution) => {
            println!("{solution}");
            ExitCode::SUCCESS
        }
        None => {
            println!("no solution");
            ExitCode::FAILURE
        }
    };
    println!();
    println!("states explored: {}", stats.explored());
    println!("time elapsed: {elapsed:?}");
    Ok(code)
}

fn read_puzzle_text(path: Option<&PathBuf>) -> Result<String, Box<dyn Error>> {
    match path {
        None => Ok(SAMPLE.to_owned()),
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}
