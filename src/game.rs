/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object ties an immutable [`Puzzle`] to the mutable
//! [`PlayerPath`] being drawn on it. The input layer forwards each selected
//! cell to [`Game::extend_path`] and reads back the live expression and its
//! value for display; [`Game::is_solved`] decides the win.

use log::debug;
use std::time::{Duration, Instant};

use crate::evaluator;
use crate::generator::coordinate::Coordinate;
use crate::generator::puzzles::{Puzzle, PuzzleError};
use crate::player_path::PlayerPath;

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Puzzle being played.
    puzzle: Puzzle,

    /// Path drawn by the player so far.
    pub player_path: PlayerPath,

    /// Whether the player asked to see the solution. In this case the game
    /// time is not added to the score board.
    pub user_has_cheated: bool,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Whether the game has started (the player placed at least one cell).
    pub started: bool,

    /// Whether the puzzle is solved.
    solved: bool,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,
}

impl Game {
    /// Create a [`Game`] object with a freshly generated puzzle of the given
    /// size.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::SizeTooSmall`] if `size` is below
    /// [`crate::generator::puzzles::MIN_SIZE`].
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        Ok(Self::from_puzzle(Puzzle::generate(size)?))
    }

    /// Create a [`Game`] object for an existing puzzle.
    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        let size: usize = puzzle.size();
        Self {
            puzzle,
            player_path: PlayerPath::new(size),
            user_has_cheated: false,
            paused: false,
            started: false,
            solved: false,
            start_time: Instant::now(),
            pause_duration: None,
        }
    }

    /// Return the puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Replace the puzzle with a freshly generated one of the given size and
    /// reset the game status.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::SizeTooSmall`] if `size` is below
    /// [`crate::generator::puzzles::MIN_SIZE`].
    pub fn new_puzzle(&mut self, size: usize) -> Result<(), PuzzleError> {
        self.puzzle = Puzzle::generate(size)?;
        self.restart();
        Ok(())
    }

    /// Restart the game status (player path), but keep the puzzle.
    pub fn restart(&mut self) {
        self.player_path = PlayerPath::new(self.puzzle.size());
        self.user_has_cheated = false;
        self.paused = false;
        self.started = false;
        self.solved = false;
        self.pause_duration = None;
    }

    /// Try to extend the player path with the given coordinate and return
    /// whether the path changed.
    ///
    /// The first accepted cell starts the game clock.
    pub fn extend_path(&mut self, coordinate: Coordinate) -> bool {
        if self.solved || self.paused {
            return false;
        }
        if !self.player_path.push(coordinate) {
            return false;
        }
        if !self.started {
            self.started = true;
            self.start_time = Instant::now();
        }
        true
    }

    /// Undo the last step of the player path.
    pub fn undo_path(&mut self) {
        if !self.solved && !self.paused {
            self.player_path.undo();
        }
    }

    /// Redo the last undone step of the player path.
    pub fn redo_path(&mut self) {
        if !self.solved && !self.paused {
            self.player_path.redo();
        }
    }

    /// Remove all the steps of the player path.
    pub fn clear_path(&mut self) {
        if !self.solved {
            self.player_path.clear();
        }
    }

    /// Replace the player path with the solution path.
    ///
    /// The game is flagged so that its time never reaches the score board.
    pub fn reveal_solution(&mut self) {
        self.user_has_cheated = true;
        self.player_path.clear();
        // The solution path is a staircase, so replaying it step by step
        // always passes the push rules.
        let solution: Vec<Coordinate> = self.puzzle.solution_path.get().to_vec();
        for coordinate in solution {
            if !self.player_path.push(coordinate) {
                debug!("Solution step {coordinate:?} was rejected");
            }
        }
    }

    /// Return the expression formed by the cells along the player path.
    pub fn expression(&self) -> String {
        self.player_path
            .path()
            .get()
            .iter()
            .filter_map(|c| self.puzzle.grid.get(*c))
            .map(|cell| cell.to_string())
            .collect()
    }

    /// Return the value of the player path, or None if the path has no
    /// defined value yet.
    pub fn evaluation(&self) -> Option<i64> {
        evaluator::evaluate(self.player_path.path(), &self.puzzle.grid)
    }

    /// Whether the puzzle is successfully solved.
    ///
    /// The path wins when it is not empty, ends on the bottom-right corner,
    /// and evaluates to the puzzle target.
    pub fn is_solved(&mut self) -> bool {
        // A previous call already established that the puzzle was solved
        if self.solved {
            return true;
        }

        let Some(last) = self.player_path.get_last() else {
            return false;
        };
        let corner: usize = self.puzzle.size() - 1;
        if last != Coordinate::new(corner, corner) {
            return false;
        }
        match self.evaluation() {
            Some(value) if value == self.puzzle.target => {
                self.solved = true;
                true
            }
            _ => false,
        }
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        // Store the played time so far, so that the pause time can be
        // deduced when the player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration.
    pub fn get_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Return the game duration in hours, minutes, and seconds
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.start_time.elapsed().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }
}
