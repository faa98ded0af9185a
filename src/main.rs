//! Sliding Puzzle Solver
//!
//! Reads an N-by-N board in the text format (dimension line, then row-major
//! tile values with 0 as the blank), finds a minimum-move solution with the
//! A* solver, and prints either the optimal board sequence or the verdict
//! that no solution exists.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use npuzzle::{Board, Solver};

/// Finds minimum-move solutions to N-by-N sliding tile puzzles.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print the optimal board sequence.
    Solve {
        /// Puzzle file; standard input when omitted.
        file: Option<PathBuf>,
    },
    /// Report only whether the puzzle is solvable.
    Check {
        /// Puzzle file; standard input when omitted.
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { file }) => run_solve(file.as_deref()),
        Some(Command::Check { file }) => run_check(file.as_deref()),
        // default: solve from standard input
        None => run_solve(None),
    }
}

/// Solves the board and prints the full report.
fn run_solve(file: Option<&Path>) {
    let solver = Solver::new(read_board(file));
    print!("{}", format_report(&solver));
}

/// Prints the solvability verdict only.
fn run_check(file: Option<&Path>) {
    let solver = Solver::new(read_board(file));
    if solver.is_solvable() {
        println!("Solvable");
    } else {
        println!("Unsolvable");
    }
}

/// Renders the solver verdict: the no-solution line, or the move count
/// followed by every board on an optimal path from initial to goal.
fn format_report(solver: &Solver) -> String {
    match solver.solution() {
        Some(path) => {
            let mut report = format!("Minimum number of moves = {}\n", path.len() - 1);
            for board in path {
                report.push_str(&board.to_string());
            }
            report
        }
        None => "No solution possible\n".to_string(),
    }
}

/// Reads and parses a board, exiting with a message on bad input.
fn read_board(file: Option<&Path>) -> Board {
    let text = match file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path.display(), err);
            process::exit(1);
        }),
        None => {
            let mut text = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut text) {
                eprintln!("failed to read standard input: {}", err);
                process::exit(1);
            }
            text
        }
    };

    text.parse().unwrap_or_else(|err| {
        eprintln!("invalid board: {}", err);
        process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_snapshot_solvable() {
        let board: Board = "3\n1 2 3\n4 0 5\n7 8 6\n".parse().unwrap();
        let report = format_report(&Solver::new(board));

        insta::assert_snapshot!(report, @r"
        Minimum number of moves = 2
        3
        1 2 3
        4 0 5
        7 8 6
        3
        1 2 3
        4 5 0
        7 8 6
        3
        1 2 3
        4 5 6
        7 8 0
        ");
    }

    #[test]
    fn test_report_snapshot_unsolvable() {
        let board: Board = "3\n1 2 3\n4 5 6\n8 7 0\n".parse().unwrap();
        let report = format_report(&Solver::new(board));

        insta::assert_snapshot!(report, @"No solution possible");
    }
}
