/*
generator.rs

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

//! Generate random puzzles.
//!
//! A [`puzzles::Puzzle`] object holds the grid, the target value, and the
//! solution path. You create one with [`puzzles::Puzzle::generate`], giving
//! the grid size, on every new game or size change.
//!
//! The puzzle is built from a random staircase path (see the
//! [`random_path::RandomPath`] object), along which digit and operator cells
//! are assigned so that the left-to-right evaluation of the path stays within
//! human-tractable bounds. The final value of that walk is the puzzle target.
//! All the remaining cells are then filled with random distractor values.
//!
//! The building blocks live in their own modules: [`cell::Cell`] for the
//! tagged digit/operator values, [`coordinate::Coordinate`] for grid
//! positions, [`grid::Grid`] for the cell table, and [`path::Path`] for
//! ordered coordinate sequences.

pub mod cell;
pub mod coordinate;
pub mod grid;
pub mod path;
pub mod puzzles;
pub mod random_path;
