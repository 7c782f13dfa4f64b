/*
lib.rs

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

//! Generate and verify arithmetic path puzzles on a square grid.
//!
//! A puzzle is an N×N grid of digit and operator cells. The player connects
//! adjacent cells from the top-left to the bottom-right corner, alternating
//! between digits and operators, so that the expression formed along the
//! path, evaluated left to right with no operator precedence, equals the
//! puzzle target.
//!
//! The crate exposes two core operations to the rendering and input layer:
//!
//! * [`generator::puzzles::Puzzle::generate`] builds a puzzle for a given
//!   grid size. The puzzle always contains at least one valid path, the
//!   solution path, whose evaluation defines the target. Call it on every
//!   new game or size change.
//! * [`evaluator::evaluate`] computes the value of any path against the
//!   grid. Call it on every path mutation to drive live feedback and win
//!   detection.
//!
//! On top of these, [`game::Game`] tracks a game in progress (the player
//! path, the win status, and timing), [`player_path::PlayerPath`] enforces
//! the path drawing rules (start at the top-left corner, move between
//! adjacent cells, never revisit a cell), and [`highscores::HighScores`]
//! keeps solve times and play counters.

pub mod evaluator;
pub mod game;
pub mod generator;
pub mod highscores;
pub mod player_path;
