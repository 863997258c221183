/*
progress.rs

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

//! Track the progress of a playthrough.
//!
//! The [`Progress`] object is the only game state that needs saving.
//! The level itself is not saved: it is regenerated from the level number (see
//! [`crate::level::Level::generate`]).

use log::debug;
use serde::{Deserialize, Serialize};

/// Number of lives at the start of a playthrough.
pub const START_LIVES: u32 = 3;

/// Progress of the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Level being played, starting at 1.
    level: u32,

    score: u64,

    /// Score when the current level started. The score goes back to that value when the player
    /// restarts the level.
    start_score: u64,

    lives: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a [`Progress`] object for a new playthrough.
    pub fn new() -> Self {
        Self {
            level: 1,
            score: 0,
            start_score: 0,
            lives: START_LIVES,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn start_score(&self) -> u64 {
        self.start_score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Move to the next level and keep the score earned so far.
    pub fn next_level(&mut self) {
        self.level += 1;
        self.start_score = self.score;
        debug!("Level {} (score {})", self.level, self.score);
    }

    /// Drop the points earned in the current level.
    pub fn restart_level(&mut self) {
        self.score = self.start_score;
    }

    /// Remove a life and return whether the game is over.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        debug!("Life lost: {} remaining", self.lives);
        self.lives == 0
    }
}
