/*
coordinate.rs

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

//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid: 0-indexed row and column.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Create a [`Coordinate`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Top-left corner of the grid, where every player path must start.
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Whether the other coordinate shares an edge with this one.
    ///
    /// Two cells are adjacent when they differ by exactly one row or exactly
    /// one column, never both (no diagonals).
    pub fn is_adjacent(&self, other: Coordinate) -> bool {
        let row_diff: usize = self.row.abs_diff(other.row);
        let col_diff: usize = self.col.abs_diff(other.col);
        (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency() {
        let c: Coordinate = Coordinate::new(2, 2);
        assert!(c.is_adjacent(Coordinate::new(1, 2)));
        assert!(c.is_adjacent(Coordinate::new(3, 2)));
        assert!(c.is_adjacent(Coordinate::new(2, 1)));
        assert!(c.is_adjacent(Coordinate::new(2, 3)));
        // Diagonal
        assert!(!c.is_adjacent(Coordinate::new(1, 1)));
        // Same cell
        assert!(!c.is_adjacent(Coordinate::new(2, 2)));
        // Two cells away
        assert!(!c.is_adjacent(Coordinate::new(0, 2)));
    }

    #[test]
    fn origin_is_top_left() {
        assert_eq!(Coordinate::origin(), Coordinate::new(0, 0));
    }
}
