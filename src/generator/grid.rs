/*
grid.rs

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

//! Square table of puzzle cells.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::coordinate::Coordinate;

/// N×N table of [`Cell`] values.
///
/// Every row has exactly N entries, with N at least 2.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cell values, row by row.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid by calling the provided function for every coordinate,
    /// row by row.
    pub fn filled<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(Coordinate) -> Cell,
    {
        let mut cells: Vec<Vec<Cell>> = Vec::with_capacity(size);
        for row in 0..size {
            let mut row_cells: Vec<Cell> = Vec::with_capacity(size);
            for col in 0..size {
                row_cells.push(f(Coordinate::new(row, col)));
            }
            cells.push(row_cells);
        }
        Self { size, cells }
    }

    /// Build a grid from complete rows of cells.
    ///
    /// # Errors
    ///
    /// The method returns an error message if there are fewer than two rows
    /// or if any row does not have exactly as many cells as there are rows.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self, String> {
        let size: usize = cells.len();
        if size < 2 {
            return Err(format!("A grid needs at least 2 rows, got {size}"));
        }
        for (row, row_cells) in cells.iter().enumerate() {
            if row_cells.len() != size {
                return Err(format!(
                    "Row {row} has {} cells instead of {size}",
                    row_cells.len()
                ));
            }
        }
        Ok(Self { size, cells })
    }

    /// Return the number of rows and columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the cell at the given coordinate, or None if the coordinate is
    /// outside the grid.
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        self.cells
            .get(coordinate.row)
            .and_then(|row| row.get(coordinate.col))
            .copied()
    }

    /// Return the grid rows in order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cell::Op;

    #[test]
    fn filled_builds_every_cell() {
        let grid: Grid = Grid::filled(3, |c| {
            if (c.row + c.col) % 2 == 0 {
                Cell::Number(5)
            } else {
                Cell::Operator(Op::Add)
            }
        });
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.get(Coordinate::new(0, 0)), Some(Cell::Number(5)));
        assert_eq!(
            grid.get(Coordinate::new(1, 2)),
            Some(Cell::Operator(Op::Add))
        );
    }

    #[test]
    fn get_outside_the_grid() {
        let grid: Grid = Grid::filled(2, |_| Cell::Number(1));
        assert_eq!(grid.get(Coordinate::new(2, 0)), None);
        assert_eq!(grid.get(Coordinate::new(0, 2)), None);
    }

    #[test]
    fn from_rows_rejects_ragged_tables() {
        let rows: Vec<Vec<Cell>> = vec![
            vec![Cell::Number(1), Cell::Operator(Op::Add)],
            vec![Cell::Number(2)],
        ];
        assert!(Grid::from_rows(rows).is_err());
        assert!(Grid::from_rows(vec![vec![Cell::Number(1)]]).is_err());
    }
}
