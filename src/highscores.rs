/*
highscores.rs

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

//! Manage high scores and play counters.
//!
//! The main object, [`HighScores`], maintains a list of top solve times for
//! each grid size, along with the number of games played and won. The object
//! lives in memory for the duration of the process; writing it to storage is
//! the caller's business, if it wants to at all.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Score {
    /// How long did it take for solving the puzzle.
    pub time: Duration,

    /// Completion timestamp, which is used to display the date and time in
    /// the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for one grid size.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct SizeScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`]
    /// constant.
    top: Vec<Score>,
}

impl SizeScoreBoard {
    /// Create a [`SizeScoreBoard`] object.
    fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board,
    /// or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn add_score(&mut self, time: Duration) -> Option<usize> {
        let mut new_score_position: Option<usize> = None;
        let mut tmp_top: Vec<Score> = Vec::with_capacity(BOARD_SIZE);
        let mut i: usize = 0;

        for score in &self.top {
            // Insert the new score to the temporary board
            if time < score.time && new_score_position.is_none() {
                new_score_position = Some(i + 1);
                tmp_top.push(Score {
                    time,
                    when: SystemTime::now(),
                });
                i += 1;
            }
            // Do not add more scores than the board size
            if i >= BOARD_SIZE {
                break;
            }
            tmp_top.push(*score);
            i += 1;
        }
        // If the board is not full and the new score has not been added yet,
        // then add the new score at the end of the board
        if i < BOARD_SIZE && new_score_position.is_none() {
            new_score_position = Some(i + 1);
            tmp_top.push(Score {
                time,
                when: SystemTime::now(),
            });
        }
        self.top = tmp_top;
        new_score_position
    }
}

/// Scoreboards for every grid size, and the overall play counters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HighScores {
    /// Map of the [`SizeScoreBoard`] scoreboards indexed by the grid size.
    board: HashMap<usize, SizeScoreBoard>,

    /// Number of games started.
    games_played: usize,

    /// Number of games won.
    games_won: usize,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
            games_played: 0,
            games_won: 0,
        }
    }

    /// Count a new game.
    pub fn record_played(&mut self) {
        self.games_played += 1;
    }

    /// Count a win and add its time to the scoreboard of the given grid
    /// size. Return the position in the scoreboard, or None if the time does
    /// not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn record_win(&mut self, size: usize, time: Duration) -> Option<usize> {
        self.games_won += 1;
        let scoreboard: &mut SizeScoreBoard =
            self.board.entry(size).or_insert_with(SizeScoreBoard::new);

        scoreboard.add_score(time)
    }

    /// Return the list of [`Score`] for the given grid size.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, size: usize) -> Option<&[Score]> {
        match self.board.get(&size) {
            Some(b) => Some(&b.top),
            None => None,
        }
    }

    /// Return the best solve time for the given grid size.
    pub fn best_time(&self, size: usize) -> Option<Duration> {
        self.board
            .get(&size)
            .and_then(|b| b.top.first())
            .map(|score| score.time)
    }

    /// Return the number of games started.
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Return the number of games won.
    pub fn games_won(&self) -> usize {
        self.games_won
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any
    /// grid size)
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_kept_sorted() {
        let mut highscores: HighScores = HighScores::new();
        assert_eq!(highscores.record_win(3, Duration::from_secs(30)), Some(1));
        assert_eq!(highscores.record_win(3, Duration::from_secs(10)), Some(1));
        assert_eq!(highscores.record_win(3, Duration::from_secs(20)), Some(2));

        let scores: &[Score] = highscores.get_score(3).expect("Missing scoreboard");
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].time, Duration::from_secs(10));
        assert_eq!(scores[1].time, Duration::from_secs(20));
        assert_eq!(scores[2].time, Duration::from_secs(30));
        assert_eq!(highscores.best_time(3), Some(Duration::from_secs(10)));
    }

    #[test]
    fn board_is_capped() {
        let mut highscores: HighScores = HighScores::new();
        for s in 1..=15 {
            highscores.record_win(5, Duration::from_secs(s));
        }
        let scores: &[Score] = highscores.get_score(5).expect("Missing scoreboard");
        assert_eq!(scores.len(), 10);
        // A slow time no longer makes it to the board
        assert_eq!(highscores.record_win(5, Duration::from_secs(60)), None);
        assert_eq!(highscores.get_score(5).expect("Missing scoreboard").len(), 10);
    }

    #[test]
    fn boards_are_per_size() {
        let mut highscores: HighScores = HighScores::new();
        highscores.record_win(3, Duration::from_secs(10));
        assert!(highscores.get_score(4).is_none());
        assert_eq!(highscores.best_time(4), None);
    }

    #[test]
    fn counters() {
        let mut highscores: HighScores = HighScores::new();
        assert!(highscores.is_empty());
        highscores.record_played();
        highscores.record_played();
        highscores.record_win(3, Duration::from_secs(10));
        assert_eq!(highscores.games_played(), 2);
        assert_eq!(highscores.games_won(), 1);
        assert!(!highscores.is_empty());
    }
}
