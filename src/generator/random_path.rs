/*
random_path.rs

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

//! Generate a random solution path.
//!
//! The solution path is a monotone staircase from the top-left to the
//! bottom-right corner: every step goes one cell right or one cell down,
//! chosen at random while both directions remain available. A staircase on an
//! N×N grid always has exactly 2N-1 coordinates, so the construction never
//! backtracks and never fails.
//!
//! Because each step increases row+col by one, the path position parity
//! matches the (row+col) parity of the cell: even positions are number cells
//! and odd positions are operator cells, which is the alternation the
//! evaluator expects.

use log::debug;
use rand::Rng;

use super::coordinate::Coordinate;
use super::path::Path;

/// Builder for random solution paths on a square grid.
pub struct RandomPath {
    /// Number of rows and columns of the grid.
    pub size: usize,
}

impl RandomPath {
    /// Create the object for a grid of the given size.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Generate and return a random staircase path.
    ///
    /// # Panics
    ///
    /// The method panics if the grid size is 0.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Path {
        let last: usize = self.size - 1;
        let mut path: Path = Path::new(2 * self.size - 1);
        let mut row: usize = 0;
        let mut col: usize = 0;

        while row < last || col < last {
            path.push(Coordinate::new(row, col));
            if row == last {
                col += 1;
            } else if col == last {
                row += 1;
            } else if rng.random_bool(0.5) {
                row += 1;
            } else {
                col += 1;
            }
        }
        path.push(Coordinate::new(row, col));

        debug!(
            "Generated a path of {} coordinates on a {}x{} grid",
            path.len(),
            self.size,
            self.size
        );
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn staircase_shape() {
        for size in 2..=10 {
            for seed in 0..20 {
                let mut rng: StdRng = StdRng::seed_from_u64(seed);
                let path: Path = RandomPath::new(size).generate(&mut rng);

                assert_eq!(path.len(), 2 * size - 1);
                assert_eq!(path.get_first(), Some(Coordinate::new(0, 0)));
                assert_eq!(path.get_last(), Some(Coordinate::new(size - 1, size - 1)));

                // Each step increases the row or the column by one, never both
                for pair in path.get().windows(2) {
                    let down: bool = pair[1].row == pair[0].row + 1 && pair[1].col == pair[0].col;
                    let right: bool = pair[1].col == pair[0].col + 1 && pair[1].row == pair[0].row;
                    assert!(down != right);
                }
            }
        }
    }

    #[test]
    fn position_parity_matches_cell_parity() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let path: Path = RandomPath::new(6).generate(&mut rng);
        for (i, coordinate) in path.get().iter().enumerate() {
            assert_eq!(i % 2, (coordinate.row + coordinate.col) % 2);
        }
    }
}
