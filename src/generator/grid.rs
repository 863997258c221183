/*
grid.rs

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

//! Layered tile grid.
//!
//! A map is a stack of [`Layer`]s of the same size.
//! Columns grow to the right and rows grow upward: row 0 is the bottom of the map.
//!
//! Accessors take signed coordinates and treat anything outside of the map as an empty cell, so
//! that code scanning the neighbors of a cell can probe past the edges.

use serde::Serialize;
use strum_macros::{Display, FromRepr};

use super::circuit::LogicGate;
use super::tile_ids::{self, ElectricalState, TileId};

/// Column and row of a cell.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Whether the position matches the given signed coordinates.
    pub fn is_at(&self, col: i64, row: i64) -> bool {
        self.col as i64 == col && self.row as i64 == row
    }
}

/// Layers of the map, from bottom to top.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum Layer {
    Background,
    Object,
    Wire,
    Gate,
    Item,
}

impl Layer {
    /// All the layers, from bottom to top.
    pub const ALL: [Layer; 5] = [
        Layer::Background,
        Layer::Object,
        Layer::Wire,
        Layer::Gate,
        Layer::Item,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Wire shapes.
///
/// The generator only lays vertical wires.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Orientation {
    /// Return the tile ID properties of the orientation.
    pub fn id(self) -> TileId {
        match self {
            Orientation::Vertical => tile_ids::VERTICAL,
            Orientation::Horizontal => tile_ids::HORIZONTAL,
            Orientation::UpLeft => tile_ids::compute_id(&[tile_ids::TURN, tile_ids::UP_LEFT]),
            Orientation::UpRight => tile_ids::compute_id(&[tile_ids::TURN, tile_ids::UP_RIGHT]),
            Orientation::DownLeft => tile_ids::compute_id(&[tile_ids::TURN, tile_ids::DOWN_LEFT]),
            Orientation::DownRight => {
                tile_ids::compute_id(&[tile_ids::TURN, tile_ids::DOWN_RIGHT])
            }
        }
    }
}

/// Direction a gate is drawn toward.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Facing {
    Up,
    Down,
}

impl Facing {
    pub fn id(self) -> TileId {
        match self {
            Facing::Up => tile_ids::UP_GATE,
            Facing::Down => tile_ids::DOWN_GATE,
        }
    }
}

/// Fish colours.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display, FromRepr)]
#[repr(u8)]
pub enum FishColour {
    Blue,
    Purple,
    Green,
    Red,
    Orange,
}

impl FishColour {
    /// Number of colours.
    pub const COUNT: usize = 5;
}

/// Collectible items.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Fish(FishColour),
    Cheese,
}

/// Item families, ignoring the fish colour.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum ItemCategory {
    Fish,
    Cheese,
}

impl ItemKind {
    /// Return the family of the item.
    pub fn category(self) -> ItemCategory {
        match self {
            ItemKind::Fish(_) => ItemCategory::Fish,
            ItemKind::Cheese => ItemCategory::Cheese,
        }
    }

    pub fn id(self) -> TileId {
        match self {
            ItemKind::Fish(colour) => {
                tile_ids::compute_id(&[tile_ids::ITEM_RANGE, tile_ids::FISH, colour as TileId + 1])
            }
            ItemKind::Cheese => tile_ids::compute_id(&[tile_ids::ITEM_RANGE, tile_ids::CHEESE]),
        }
    }
}

/// Content of a cell in one layer.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Background,
    Barrier,
    Wire {
        orientation: Orientation,
        state: ElectricalState,
    },
    Gate {
        /// Index of the circuit in the level's circuit list.
        circuit: usize,
        gate: LogicGate,
        facing: Facing,
    },
    Item(ItemKind),
}

impl Cell {
    /// Return the ID of the tile that represents the cell.
    ///
    /// Empty cells have no tile.
    pub fn tile_id(&self) -> Option<TileId> {
        match *self {
            Cell::Empty => None,
            Cell::Background => Some(tile_ids::BACKGROUND),
            Cell::Barrier => Some(tile_ids::BARRIER),
            Cell::Wire { orientation, state } => Some(tile_ids::compute_id(&[
                tile_ids::WIRE_RANGE,
                orientation.id(),
                state.id(),
            ])),
            // The gate tiles do not reveal the state of the circuit
            Cell::Gate { gate, facing, .. } => Some(tile_ids::compute_id(&[
                tile_ids::GATE_RANGE,
                gate.id(),
                facing.id(),
                tile_ids::UNKNOWN,
            ])),
            Cell::Item(kind) => Some(kind.id()),
        }
    }

    pub fn is_wire(&self) -> bool {
        matches!(self, Cell::Wire { .. })
    }

    /// Whether the cell is an electrified wire.
    pub fn is_hazard(&self) -> bool {
        matches!(self, Cell::Wire { state, .. } if state.is_hazard())
    }
}

/// Layered grid of cells.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,

    /// One row-major array per layer, indexed by [`Layer`].
    layers: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid where every layer is empty.
    ///
    /// A grid whose number of cells does not fit in a `usize` is created with no cells.
    pub fn new(width: usize, height: usize) -> Self {
        let (width, height) = match width.checked_mul(height) {
            Some(_) => (width, height),
            None => (0, 0),
        };
        Self {
            width,
            height,
            layers: vec![vec![Cell::Empty; width * height]; Layer::ALL.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the coordinates are inside of the grid.
    pub fn contains(&self, col: i64, row: i64) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    fn offset(&self, col: i64, row: i64) -> Option<usize> {
        if self.contains(col, row) {
            Some(row as usize * self.width + col as usize)
        } else {
            None
        }
    }

    /// Return the cell at the given coordinates, or [`None`] if the cell is empty or out of
    /// bounds.
    pub fn get(&self, layer: Layer, col: i64, row: i64) -> Option<Cell> {
        let offset: usize = self.offset(col, row)?;
        match self.layers[layer.index()][offset] {
            Cell::Empty => None,
            cell => Some(cell),
        }
    }

    /// Overwrite the cell at the given coordinates.
    ///
    /// Coordinates out of bounds are ignored.
    pub fn set(&mut self, layer: Layer, col: i64, row: i64, cell: Cell) {
        if let Some(offset) = self.offset(col, row) {
            self.layers[layer.index()][offset] = cell;
        }
    }

    /// Empty the cell at the given coordinates and return its previous content.
    pub fn take(&mut self, layer: Layer, col: i64, row: i64) -> Option<Cell> {
        let offset: usize = self.offset(col, row)?;
        match std::mem::take(&mut self.layers[layer.index()][offset]) {
            Cell::Empty => None,
            cell => Some(cell),
        }
    }

    /// Return the tile ID of the cell at the given coordinates.
    pub fn tile_id(&self, layer: Layer, col: i64, row: i64) -> Option<TileId> {
        self.get(layer, col, row).and_then(|cell| cell.tile_id())
    }

    /// Return the occupied cells of the layer with their column and row, bottom row first.
    pub fn cells(&self, layer: Layer) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width: usize = self.width;
        self.layers[layer.index()]
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell != Cell::Empty)
            .map(move |(offset, cell)| (offset % width, offset / width, *cell))
    }
}
