/*
player_path.rs

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

//! Manage the path that the player draws.
//!
//! The module manages the candidate path and its undo and redo lists.
//! Pushing a coordinate enforces the rules that the evaluator relies on:
//! the path starts at the top-left corner, each step moves to a cell that
//! shares an edge with the previous one, and no cell is visited twice.
//! A rejected push leaves the path unchanged.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::generator::coordinate::Coordinate;
use crate::generator::path::Path;

/// Candidate path being drawn by the player.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerPath {
    /// Number of rows and columns of the grid the path lives in.
    grid_size: usize,

    /// The path itself.
    path: Path,

    /// Coordinates removed by undo operations, most recent last.
    redo_op: Vec<Coordinate>,
}

impl PlayerPath {
    /// Create an empty [`PlayerPath`] object for a grid of the given size.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            path: Path::new((2 * grid_size).saturating_sub(1)),
            redo_op: Vec::new(),
        }
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.path.clear();
        self.redo_op.clear();
    }

    /// Try to add a coordinate to the path and return whether it was added.
    ///
    /// The coordinate is rejected when it falls outside the grid, when it is
    /// already in the path, when the path is empty and the coordinate is not
    /// the top-left corner, or when it does not share an edge with the last
    /// coordinate of the path.
    ///
    /// A successful push clears the redo list.
    pub fn push(&mut self, coordinate: Coordinate) -> bool {
        if coordinate.row >= self.grid_size || coordinate.col >= self.grid_size {
            debug!("Rejected {coordinate:?}: outside the grid");
            return false;
        }
        if self.path.contains(coordinate) {
            debug!("Rejected {coordinate:?}: already in the path");
            return false;
        }
        match self.path.get_last() {
            Some(last) => {
                if !last.is_adjacent(coordinate) {
                    debug!("Rejected {coordinate:?}: not adjacent to {last:?}");
                    return false;
                }
            }
            None => {
                if coordinate != Coordinate::origin() {
                    debug!("Rejected {coordinate:?}: a path must start at the top-left corner");
                    return false;
                }
            }
        }
        self.path.push(coordinate);
        self.redo_op.clear();
        true
    }

    /// Undo the last step and return the removed coordinate.
    pub fn undo(&mut self) -> Option<Coordinate> {
        let coordinate: Option<Coordinate> = self.path.pop();
        if let Some(c) = coordinate {
            self.redo_op.push(c);
        }
        coordinate
    }

    /// Redo the last undone step and return the restored coordinate.
    pub fn redo(&mut self) -> Option<Coordinate> {
        // The redo list only holds coordinates popped from the current path,
        // so they can be restored without re-checking the push rules.
        let coordinate: Option<Coordinate> = self.redo_op.pop();
        if let Some(c) = coordinate {
            self.path.push(c);
        }
        coordinate
    }

    /// Return the number of coordinates in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Return the last coordinate in the path.
    pub fn get_last(&self) -> Option<Coordinate> {
        self.path.get_last()
    }

    /// Return the underlying path, for evaluation.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the length of the redo list.
    pub fn redo_len(&self) -> usize {
        self.redo_op.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn must_start_at_the_origin() {
        let mut player_path: PlayerPath = PlayerPath::new(3);
        assert!(!player_path.push(Coordinate::new(1, 1)));
        assert!(player_path.push(Coordinate::origin()));
        assert_eq!(player_path.len(), 1);
    }

    #[test]
    fn rejects_non_adjacent_steps() {
        let mut player_path: PlayerPath = PlayerPath::new(3);
        assert!(player_path.push(Coordinate::origin()));
        // Diagonal
        assert!(!player_path.push(Coordinate::new(1, 1)));
        // Jump
        assert!(!player_path.push(Coordinate::new(0, 2)));
        assert!(player_path.push(Coordinate::new(0, 1)));
    }

    #[test]
    fn rejects_revisits() {
        let mut player_path: PlayerPath = PlayerPath::new(3);
        assert!(player_path.push(Coordinate::origin()));
        assert!(player_path.push(Coordinate::new(0, 1)));
        assert!(!player_path.push(Coordinate::origin()));
        assert_eq!(player_path.len(), 2);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut player_path: PlayerPath = PlayerPath::new(2);
        assert!(player_path.push(Coordinate::origin()));
        assert!(player_path.push(Coordinate::new(0, 1)));
        assert!(!player_path.push(Coordinate::new(0, 2)));
    }

    #[test]
    fn undo_and_redo() {
        let mut player_path: PlayerPath = PlayerPath::new(3);
        player_path.push(Coordinate::origin());
        player_path.push(Coordinate::new(0, 1));
        player_path.push(Coordinate::new(1, 1));

        assert_eq!(player_path.undo(), Some(Coordinate::new(1, 1)));
        assert_eq!(player_path.len(), 2);
        assert_eq!(player_path.redo_len(), 1);

        assert_eq!(player_path.redo(), Some(Coordinate::new(1, 1)));
        assert_eq!(player_path.len(), 3);
        assert_eq!(player_path.redo_len(), 0);
        assert_eq!(player_path.redo(), None);
    }

    #[test]
    fn push_clears_the_redo_list() {
        let mut player_path: PlayerPath = PlayerPath::new(3);
        player_path.push(Coordinate::origin());
        player_path.push(Coordinate::new(0, 1));
        player_path.undo();
        assert_eq!(player_path.redo_len(), 1);

        assert!(player_path.push(Coordinate::new(1, 0)));
        assert_eq!(player_path.redo_len(), 0);
        assert_eq!(player_path.redo(), None);
    }

    #[test]
    fn undo_to_empty_then_restart() {
        let mut player_path: PlayerPath = PlayerPath::new(3);
        player_path.push(Coordinate::origin());
        assert_eq!(player_path.undo(), Some(Coordinate::origin()));
        assert_eq!(player_path.undo(), None);
        // The path starts over from the origin only
        assert!(!player_path.push(Coordinate::new(0, 1)));
        assert!(player_path.push(Coordinate::origin()));
    }
}
