/*
puzzles.rs

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

//! Generate complete puzzles.
//!
//! A puzzle is built in three stages:
//!
//! 1. A random staircase path from the top-left to the bottom-right corner,
//!    from the [`super::random_path`] module.
//! 2. Cell values along that path, assigned while carrying a running total.
//!    Even path positions receive digits and odd positions receive operators.
//!    Each digit is adjusted so that the running total stays between 0 and
//!    about [`MAX_RUNNING_TOTAL`], and so that every division step divides
//!    the running total exactly.
//!    The final running total becomes the puzzle target.
//! 3. Back-fill of the off-path cells with random digits and operators,
//!    following the same checkerboard parity as the path cells.
//!
//! The generated grid therefore always contains at least one path whose
//! left-to-right evaluation reaches the target. The back-filled cells are
//! distractors and are never guaranteed to form another solution.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::cell::{Cell, Op};
use super::coordinate::Coordinate;
use super::grid::Grid;
use super::path::Path;
use super::random_path::RandomPath;

/// Smallest supported grid size.
pub const MIN_SIZE: usize = 2;

/// Upper bound for the running total carried along the solution path.
/// Additions may overshoot it by a few units when the total is already at the
/// bound, because every number cell holds at least 1.
const MAX_RUNNING_TOTAL: i64 = 100;

/// Number of times a multiplication operand is redrawn before giving up and
/// using 1. Without the cap, a running total above [`MAX_RUNNING_TOTAL`]
/// would make the redraw loop spin forever.
const MAX_MUL_ATTEMPTS: usize = 16;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// The requested grid size is below [`MIN_SIZE`].
    SizeTooSmall(usize),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::SizeTooSmall(size) => {
                write!(f, "Grid size {size} is too small (minimum {MIN_SIZE})")
            }
        }
    }
}

/// A complete puzzle: the grid, the target value, and the solution path the
/// target was computed from.
///
/// A [`Puzzle`] object is immutable once generated. Evaluating the solution
/// path against the grid always yields exactly the target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    /// Cell values.
    pub grid: Grid,

    /// Value that a winning path must evaluate to.
    pub target: i64,

    /// The generator-chosen path whose evaluation defines the target.
    pub solution_path: Path,
}

impl Puzzle {
    /// Generate a random puzzle for a grid of the given size.
    ///
    /// Two calls with the same size almost always produce different puzzles;
    /// use [`Puzzle::generate_with_rng`] with a seeded generator for
    /// reproducible output.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::SizeTooSmall`] if `size` is below
    /// [`MIN_SIZE`]. Generation itself never fails.
    pub fn generate(size: usize) -> Result<Self, PuzzleError> {
        Self::generate_with_rng(size, &mut rand::rng())
    }

    /// Generate a random puzzle using the provided random number generator.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::SizeTooSmall`] if `size` is below
    /// [`MIN_SIZE`].
    pub fn generate_with_rng<R: Rng + ?Sized>(
        size: usize,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        if size < MIN_SIZE {
            return Err(PuzzleError::SizeTooSmall(size));
        }

        let solution_path: Path = RandomPath::new(size).generate(rng);
        let (values, target) = assign_values(&solution_path, rng);

        let grid: Grid = Grid::filled(size, |coordinate| match values.get(&coordinate) {
            Some(cell) => *cell,
            None => {
                // Off-path cell: same checkerboard parity as the path cells
                if (coordinate.row + coordinate.col) % 2 == 0 {
                    Cell::Number(rng.random_range(1..=9))
                } else {
                    Cell::Operator(random_operator(rng, true))
                }
            }
        });

        debug!("Generated a {size}x{size} puzzle with target {target}");
        Ok(Self {
            grid,
            target,
            solution_path,
        })
    }

    /// Return the number of rows and columns of the puzzle grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

/// Assign cell values along the solution path and return them with the final
/// running total, which becomes the puzzle target.
///
/// The running total stays at or above 0, every digit cell holds a value
/// between 1 and 9, and every division operand divides the running total
/// exactly.
fn assign_values<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> (HashMap<Coordinate, Cell>, i64) {
    let coordinates: &[Coordinate] = path.get();
    let mut values: HashMap<Coordinate, Cell> = HashMap::with_capacity(coordinates.len());

    let seed: i64 = rng.random_range(1..=9);
    values.insert(coordinates[0], Cell::Number(seed as u8));
    let mut current: i64 = seed;

    // Overwritten at the first operator position, before its first use
    let mut pending: Op = Op::Add;

    for (i, coordinate) in coordinates.iter().enumerate().skip(1) {
        if i % 2 == 1 {
            // Operator position. The running total does not change here: it
            // only changes at the next number position, using this operator.
            pending = random_operator(rng, current > 0);
            values.insert(*coordinate, Cell::Operator(pending));
            continue;
        }

        // Number position: draw a candidate digit, then adjust it so the
        // running total stays within bounds.
        let mut num: i64 = rng.random_range(1..=9);
        match pending {
            Op::Add => {
                if current + num > MAX_RUNNING_TOTAL {
                    num = (MAX_RUNNING_TOTAL - current).max(1);
                }
                current += num;
            }
            Op::Sub => {
                if current - num < 0 {
                    num = current.min(9);
                }
                current -= num;
            }
            Op::Mul => {
                let mut attempts: usize = 0;
                while current * num > MAX_RUNNING_TOTAL && attempts < MAX_MUL_ATTEMPTS {
                    num = rng.random_range(1..=9);
                    attempts += 1;
                }
                if current * num > MAX_RUNNING_TOTAL {
                    num = 1;
                }
                current *= num;
            }
            Op::Div => {
                // Drawing the operand from the divisors of the running total
                // guarantees that the division is exact. 1 always qualifies.
                let divisors: Vec<i64> = (1..=9).filter(|d| current % d == 0).collect();
                num = divisors.choose(rng).copied().unwrap_or(1);
                current /= num;
            }
        }
        debug!("Position {i}: {} {num} -> {current}", pending.symbol());
        values.insert(*coordinate, Cell::Number(num as u8));
    }

    (values, current)
}

/// Draw a random operator.
///
/// Subtraction is not eligible while the running total is zero: its operand
/// would have to be zero, and digit cells hold 1 to 9.
fn random_operator<R: Rng + ?Sized>(rng: &mut R, allow_sub: bool) -> Op {
    loop {
        let op: Op = Op::from_repr(rng.random_range(0..4)).expect("Operator index out of range");
        if op != Op::Sub || allow_sub {
            return op;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(Puzzle::generate(0), Err(PuzzleError::SizeTooSmall(0)));
        assert_eq!(Puzzle::generate(1), Err(PuzzleError::SizeTooSmall(1)));
    }

    #[test]
    fn solution_path_reaches_the_target() {
        for size in 2..=10 {
            for seed in 0..10 {
                let mut rng: StdRng = StdRng::seed_from_u64(seed);
                let puzzle: Puzzle =
                    Puzzle::generate_with_rng(size, &mut rng).expect("Generation failed");

                assert_eq!(puzzle.solution_path.len(), 2 * size - 1);
                assert_eq!(
                    puzzle.solution_path.get_first(),
                    Some(Coordinate::new(0, 0))
                );
                assert_eq!(
                    puzzle.solution_path.get_last(),
                    Some(Coordinate::new(size - 1, size - 1))
                );
                assert_eq!(
                    evaluator::evaluate(&puzzle.solution_path, &puzzle.grid),
                    Some(puzzle.target)
                );
            }
        }
    }

    #[test]
    fn every_cell_is_populated_and_in_range() {
        for seed in 0..10 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let puzzle: Puzzle = Puzzle::generate_with_rng(7, &mut rng).expect("Generation failed");

            for row in 0..puzzle.size() {
                for col in 0..puzzle.size() {
                    let cell: Cell = puzzle
                        .grid
                        .get(Coordinate::new(row, col))
                        .expect("Missing cell");
                    match cell {
                        Cell::Number(n) => {
                            assert!((1..=9).contains(&n));
                            assert_eq!((row + col) % 2, 0);
                        }
                        Cell::Operator(_) => assert_eq!((row + col) % 2, 1),
                    }
                }
            }
        }
    }

    #[test]
    fn division_operands_divide_the_running_total() {
        for seed in 0..50 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let puzzle: Puzzle = Puzzle::generate_with_rng(8, &mut rng).expect("Generation failed");

            // Replay the solution path and check each division step
            let coordinates = puzzle.solution_path.get();
            let mut current: i64 = match puzzle.grid.get(coordinates[0]) {
                Some(Cell::Number(n)) => i64::from(n),
                _ => panic!("Solution path must start on a number cell"),
            };
            for pair in coordinates[1..].chunks(2) {
                let op: Op = match puzzle.grid.get(pair[0]) {
                    Some(Cell::Operator(op)) => op,
                    _ => panic!("Odd positions must hold operators"),
                };
                let operand: i64 = match puzzle.grid.get(pair[1]) {
                    Some(Cell::Number(n)) => i64::from(n),
                    _ => panic!("Even positions must hold numbers"),
                };
                if op == Op::Div {
                    assert_eq!(current % operand, 0);
                }
                assert!(current >= 0);
                current = op.apply(current, operand).expect("Invalid solution step");
            }
            assert_eq!(current, puzzle.target);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut rng1: StdRng = StdRng::seed_from_u64(99);
        let mut rng2: StdRng = StdRng::seed_from_u64(99);
        let p1: Puzzle = Puzzle::generate_with_rng(5, &mut rng1).expect("Generation failed");
        let p2: Puzzle = Puzzle::generate_with_rng(5, &mut rng2).expect("Generation failed");
        assert_eq!(p1, p2);
    }
}
