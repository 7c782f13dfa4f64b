/*
path.rs

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

//! Path through the puzzle grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::coordinate::Coordinate;

/// Ordered sequence of grid coordinates.
///
/// The same type backs the generated solution path and the path that the
/// player draws.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of coordinates.
    path: Vec<Coordinate>,

    /// Stores the visited status of the coordinates.
    /// Instead of looking for the coordinate in the [`Path::path`] vector,
    /// this [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Coordinate>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object with room for the given number of coordinates.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Create a [`Path`] object from (row, column) pairs.
    pub fn from_vec(coordinates: &[(usize, usize)]) -> Self {
        let mut path: Path = Path::new(coordinates.len());
        for (row, col) in coordinates {
            path.push(Coordinate::new(*row, *col));
        }
        path
    }

    /// Remove all the coordinates from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a coordinate to the path.
    pub fn push(&mut self, coordinate: Coordinate) {
        self.path.push(coordinate);
        self.visited.insert(coordinate);
    }

    /// Remove the last coordinate from the path and return it.
    pub fn pop(&mut self) -> Option<Coordinate> {
        let coordinate: Option<Coordinate> = self.path.pop();
        if let Some(c) = coordinate {
            self.visited.remove(&c);
        }
        coordinate
    }

    /// Get the number of coordinates in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the coordinate is in the path or not.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.visited.contains(&coordinate)
    }

    /// Return the path coordinates in order.
    pub fn get(&self) -> &[Coordinate] {
        &self.path
    }

    /// Return the first coordinate in the path.
    pub fn get_first(&self) -> Option<Coordinate> {
        self.path.first().copied()
    }

    /// Return the last coordinate in the path.
    pub fn get_last(&self) -> Option<Coordinate> {
        self.path.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_and_membership() {
        let mut path: Path = Path::new(4);
        assert!(path.is_empty());
        assert_eq!(path.get_first(), None);

        path.push(Coordinate::new(0, 0));
        path.push(Coordinate::new(0, 1));
        assert_eq!(path.len(), 2);
        assert!(path.contains(Coordinate::new(0, 1)));
        assert_eq!(path.get_last(), Some(Coordinate::new(0, 1)));

        assert_eq!(path.pop(), Some(Coordinate::new(0, 1)));
        assert!(!path.contains(Coordinate::new(0, 1)));
        assert_eq!(path.get_last(), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn from_vec_tracks_membership() {
        let path: Path = Path::from_vec(&[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(path.len(), 3);
        assert!(path.contains(Coordinate::new(1, 0)));
        assert!(!path.contains(Coordinate::new(0, 1)));
        assert_eq!(path.get_first(), Some(Coordinate::new(0, 0)));
        assert_eq!(path.get_last(), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut path: Path = Path::from_vec(&[(0, 0), (0, 1)]);
        path.clear();
        assert!(path.is_empty());
        assert!(!path.contains(Coordinate::new(0, 0)));
    }
}
