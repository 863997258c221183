/*
generator.rs

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

//! Generate random maps.
//!
//! A map is a [`grid::Grid`] made of several layers: the background, the barriers, the wires,
//! the logic gates, and the collectible items.
//!
//! You create a map by creating a [`map_factory::MapFactory`] object from a seed and a
//! [`crate::config::GeneratorConfig`], and by using its [`map_factory::MapFactory::generate`]
//! method.
//! The factory returns a [`map_factory::GeneratedMap`] object with the grid, the position of the
//! barriers, and the [`circuit::Circuit`] attached to each barrier.
//!
//! Every cell can be converted to an integer tile ID (see [`tile_ids`]) that the renderer uses to
//! look up the image of the tile.

pub mod circuit;
pub mod grid;
pub mod map_factory;
pub mod tile_ids;
