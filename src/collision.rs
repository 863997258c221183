/*
collision.rs

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

//! Bounding boxes for collision detection.
//!
//! The boxes are in tile units, with the origin at the bottom left corner of the map.
//! They are computed from the grid on every call, so they always reflect the last wire toggle
//! and the last collected item.

use serde::Serialize;

use crate::generator::grid::{Cell, Grid, ItemCategory, Layer};

/// Width of a wire, in tiles. Wires are centered in their tile.
pub const WIRE_WIDTH: f32 = 0.25;

/// Axis-aligned rectangle.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Return the box covering the whole tile.
    pub fn tile(col: usize, row: usize) -> Self {
        Self::new(col as f32, row as f32, 1.0, 1.0)
    }

    /// Return the box of a wire in the given tile.
    pub fn wire(col: usize, row: usize) -> Self {
        Self::new(
            col as f32 + (1.0 - WIRE_WIDTH) / 2.0,
            row as f32,
            WIRE_WIDTH,
            1.0,
        )
    }

    /// Whether the two rectangles overlap. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// One box per barrier.
pub fn obstacle_boxes(grid: &Grid) -> Vec<Rect> {
    grid.cells(Layer::Object)
        .filter(|(_, _, cell)| *cell == Cell::Barrier)
        .map(|(c, r, _)| Rect::tile(c, r))
        .collect()
}

/// One box per electrified wire.
pub fn hazard_boxes(grid: &Grid) -> Vec<Rect> {
    grid.cells(Layer::Wire)
        .filter(|(_, _, cell)| cell.is_hazard())
        .map(|(c, r, _)| Rect::wire(c, r))
        .collect()
}

/// One box per remaining item of the given category.
pub fn item_boxes(grid: &Grid, category: ItemCategory) -> Vec<Rect> {
    grid.cells(Layer::Item)
        .filter(|(_, _, cell)| matches!(cell, Cell::Item(kind) if kind.category() == category))
        .map(|(c, r, _)| Rect::tile(c, r))
        .collect()
}
