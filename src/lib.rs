/*
lib.rs

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

//! Procedural level generator for Amazing Maze.
//!
//! Each level is a grid crossed by vertical barriers.
//! Every barrier holds a logic gate whose inputs are known, and the player must work out the
//! output of the gate to know whether the wires above and below the barrier are electrified.
//!
//! The [`level::Level`] object is the entry point: it generates the map for a level number,
//! and gives the gameplay loop the operations it needs (toggling a gate, collecting an item, and
//! the collision boxes).
//!
//! ```
//! use amazing_maze::config::GameConfig;
//! use amazing_maze::generator::tile_ids::ElectricalState;
//! use amazing_maze::level::Level;
//!
//! let mut level = Level::generate(1, &GameConfig::default()).unwrap();
//! let gate = level.gate_locations()[0];
//! level.toggle_gate(gate.col as i64, gate.row as i64, ElectricalState::On);
//! assert!(!level.hazard_boxes().is_empty());
//! ```

pub mod collision;
pub mod config;
pub mod generator;
pub mod highscores;
pub mod level;
pub mod progress;
