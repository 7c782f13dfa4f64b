/*
evaluator.rs

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

//! Evaluate a path against the puzzle grid.
//!
//! The cells along the path form a token stream that must match the grammar
//! `number (operator number)*`. The stream is evaluated strictly left to
//! right, with no operator precedence: `2 + 3 * 4` is `(2 + 3) * 4 = 20`.
//! Division rounds toward negative infinity, matching the other operators'
//! integer arithmetic.
//!
//! The function is pure: it keeps no state between invocations and is meant
//! to be called on every path mutation to drive live feedback.

use crate::generator::cell::Cell;
use crate::generator::grid::Grid;
use crate::generator::path::Path;

/// Evaluate the cells along the path, left to right.
///
/// Return None when the path has no defined value: the path is empty, a
/// coordinate falls outside the grid, the cells do not alternate between
/// numbers and operators, the path ends on an operator, a division by zero
/// occurs, or the running value overflows. The caller is expected to keep the
/// path 4-adjacent and free of revisits; the evaluator does not check that.
pub fn evaluate(path: &Path, grid: &Grid) -> Option<i64> {
    let coordinates = path.get();
    let first = coordinates.first()?;

    let mut result: i64 = match grid.get(*first)? {
        Cell::Number(n) => i64::from(n),
        Cell::Operator(_) => return None,
    };

    for pair in coordinates[1..].chunks(2) {
        let op = match grid.get(pair[0])? {
            Cell::Operator(op) => op,
            Cell::Number(_) => return None,
        };
        // A lone operator at the end of the path has nothing to apply to
        let operand: i64 = match grid.get(*pair.get(1)?)? {
            Cell::Number(n) => i64::from(n),
            Cell::Operator(_) => return None,
        };
        result = op.apply(result, operand)?;
    }
    Some(result)
}
