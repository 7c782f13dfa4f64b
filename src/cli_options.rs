/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Kazumaze.

Kazumaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Kazumaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Kazumaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers. In command-line mode, Kazumaze
//! batch generates random puzzles, verifies them, and prints them as text or
//! JSON.
//!
//! # Examples
//!
//! Generate one 4×4 puzzle and show its solution:
//!
//! ```text
//! $ kazumaze -n 4 --solution
//! Target: 4
//! 3 * 2 +
//! + 8 - 4
//! 4 - 1 *
//! / 5 + 2
//! Solution: (0,0) (0,1) (0,2) (1,2) (1,3) (2,3) (3,3)  3*2-4*2 = 4
//! ```
//!
//! Generate one hundred 7×7 puzzles and print generation statistics:
//!
//! ```text
//! $ kazumaze -n 7 -c 100 -s
//!
//!         total time = 0.00283s
//!       average time = 0.0000283s
//!           max time = 0.00019s
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use serde::Serialize;
use std::env;
use std::fmt;
use std::time::Instant;

use kazumaze::evaluator;
use kazumaze::generator::coordinate::Coordinate;
use kazumaze::generator::grid::Grid;
use kazumaze::generator::path::Path;
use kazumaze::generator::puzzles::Puzzle;

/// Output format for the generated puzzles.
#[derive(ValueEnum, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Format {
    /// Plain text grid.
    #[default]
    Text,

    /// One JSON document per puzzle.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Build random Kazumaze puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Grid size (number of rows and columns)
    #[arg(short = 'n', long, default_value_t = 3)]
    size: usize,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::Text)]
    format: Format,

    /// Print the solution path and its expression for each puzzle
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// JSON rendition of a generated puzzle.
#[derive(Serialize)]
struct PuzzleReport<'a> {
    /// Generation timestamp.
    generated: String,

    /// Number of rows and columns.
    size: usize,

    /// Value that a winning path must evaluate to.
    target: i64,

    /// Cell values, row by row, one token per cell.
    grid: &'a Grid,

    /// Solution path, when requested with `--solution`.
    #[serde(skip_serializing_if = "Option::is_none")]
    solution_path: Option<&'a Path>,

    /// Expression along the solution path, when requested with `--solution`.
    #[serde(skip_serializing_if = "Option::is_none")]
    expression: Option<String>,
}

/// Parse and process command-line options and return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;

    for i in 0..args.count {
        debug!("Iteration {i}");

        let start: Instant = Instant::now();
        let puzzle: Puzzle = match Puzzle::generate(args.size) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        };
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        verify(&puzzle);

        match args.format {
            Format::Text => print_text(&puzzle, args.solution),
            Format::Json => {
                if let Err(e) = print_json(&puzzle, args.solution) {
                    eprintln!("Error: cannot serialize the puzzle: {e}");
                    return 1;
                }
            }
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s",
            total,
            total / args.count as f32,
            max
        );
    }
    0
}

/// Verify the invariants of a freshly generated puzzle.
///
/// Generation bugs are programming errors, so the function panics instead of
/// returning an error.
fn verify(puzzle: &Puzzle) {
    let size: usize = puzzle.size();

    // Verify that the solution path has the expected length and end points
    if puzzle.solution_path.len() != 2 * size - 1 {
        eprintln!(
            "Wrong length: {} instead of {}: {:?}",
            puzzle.solution_path.len(),
            2 * size - 1,
            puzzle.solution_path.get()
        );
        panic!("Bug: wrong length for the generated solution path");
    }
    if puzzle.solution_path.get_first() != Some(Coordinate::new(0, 0))
        || puzzle.solution_path.get_last() != Some(Coordinate::new(size - 1, size - 1))
    {
        eprintln!("Wrong end points: {:?}", puzzle.solution_path.get());
        panic!("Bug: the generated solution path does not join the corners");
    }

    // Verify that each step goes one cell right or one cell down
    for pair in puzzle.solution_path.get().windows(2) {
        let down: bool = pair[1].row == pair[0].row + 1 && pair[1].col == pair[0].col;
        let right: bool = pair[1].col == pair[0].col + 1 && pair[1].row == pair[0].row;
        if down == right {
            eprintln!("Wrong step from {:?} to {:?}", pair[0], pair[1]);
            panic!("Bug: the generated solution path is not a staircase");
        }
    }

    // Verify that the solution path reaches the target
    let value: Option<i64> = evaluator::evaluate(&puzzle.solution_path, &puzzle.grid);
    if value != Some(puzzle.target) {
        eprintln!(
            "The solution path evaluates to {:?} instead of {}",
            value, puzzle.target
        );
        panic!("Bug: the solution path does not reach the target");
    }
}

/// Print the puzzle as a plain text grid.
fn print_text(puzzle: &Puzzle, solution: bool) {
    println!("Target: {}", puzzle.target);
    for row in puzzle.grid.rows() {
        let line: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        println!("{}", line.join(" "));
    }
    if solution {
        let coordinates: Vec<String> = puzzle
            .solution_path
            .get()
            .iter()
            .map(|c| format!("({},{})", c.row, c.col))
            .collect();
        println!(
            "Solution: {}  {} = {}",
            coordinates.join(" "),
            solution_expression(puzzle),
            puzzle.target
        );
    }
    println!();
}

/// Print the puzzle as a JSON document.
fn print_json(puzzle: &Puzzle, solution: bool) -> Result<(), serde_json::Error> {
    let report: PuzzleReport = PuzzleReport {
        generated: chrono::Local::now().to_rfc3339(),
        size: puzzle.size(),
        target: puzzle.target,
        grid: &puzzle.grid,
        solution_path: solution.then_some(&puzzle.solution_path),
        expression: solution.then(|| solution_expression(puzzle)),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Return the expression formed by the cells along the solution path.
fn solution_expression(puzzle: &Puzzle) -> String {
    puzzle
        .solution_path
        .get()
        .iter()
        .filter_map(|c| puzzle.grid.get(*c))
        .map(|cell| cell.to_string())
        .collect()
}
