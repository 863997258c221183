/*
highscores.rs

Copyright 2017 Hip Hip Array

This file is part of Amazing Maze.

Amazing Maze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Amazing Maze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Amazing Maze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the high scores.
//!
//! The main object, [`HighScores`], maintains the list of the best scores, sorted by descending
//! score.
//! The object can be serialized, but saving it to disk is left to the caller.

use serde::{Deserialize, Serialize};

/// Number of entries in the scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Longest name kept in the scoreboard. Longer names are truncated.
const MAX_NAME_LENGTH: usize = 50;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Name of the player.
    pub name: String,

    pub score: u64,
}

impl Score {
    /// Create a [`Score`] object and truncate the name when it is too long.
    pub fn new(name: &str, score: u64) -> Self {
        let name: String = if name.chars().count() > MAX_NAME_LENGTH {
            let mut truncated: String = name.chars().take(MAX_NAME_LENGTH).collect();
            truncated.push_str("...");
            truncated
        } else {
            name.to_string()
        };
        Self { name, score }
    }
}

/// Sorted list of the top scores.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    /// A new score goes after the existing entries with the same score.
    pub fn add_score(&mut self, name: &str, score: u64) -> Option<usize> {
        let position: usize = self.top.iter().take_while(|s| s.score >= score).count();
        if position >= BOARD_SIZE {
            return None;
        }
        self.top.insert(position, Score::new(name, score));
        self.top.truncate(BOARD_SIZE);
        Some(position + 1)
    }

    /// Return the list of [`Score`], top score first.
    pub fn get_scores(&self) -> &[Score] {
        &self.top
    }

    /// Return whether the given score would make it to the board.
    pub fn is_high_score(&self, score: u64) -> bool {
        self.top.len() < BOARD_SIZE || self.top.iter().any(|s| s.score < score)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }
}
