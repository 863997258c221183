/*
level.rs

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

//! Manage the level being played.
//!
//! A [`Level`] owns the generated map for the duration of one level.
//! The gameplay loop only gets a shared reference to the grid, and changes the level through two
//! operations:
//!
//! * toggling a gate, which sets the electrical state of all the wires attached to the barrier
//!   (see [`Level::toggle_gate`]),
//! * collecting an item (see [`Level::remove_item_at`]).
//!
//! A level is never saved. It is regenerated from its number, which is also the seed.

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::collision::{self, Rect};
use crate::config::{ConfigError, GameConfig};
use crate::generator::circuit::{Circuit, LogicGate};
use crate::generator::grid::{Cell, Grid, ItemCategory, ItemKind, Layer, Position};
use crate::generator::map_factory::{GeneratedMap, MapFactory};
use crate::generator::tile_ids::{ElectricalState, TileId};

/// What the player runs into when entering a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Contact {
    Clear,
    Obstacle,
    Hazard,
    Item(ItemKind),
}

/// Level in progress.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Level {
    /// Level number, starting at 1.
    number: u32,

    grid: Grid,

    /// Position of the barriers, from left to right.
    gate_locations: Vec<Position>,

    /// Circuit of each barrier.
    circuits: Vec<Circuit>,

    /// Electrical state that the player last set for each barrier.
    gate_states: Vec<ElectricalState>,
}

impl Level {
    /// Generate the given level.
    pub fn generate(number: u32, config: &GameConfig) -> Result<Self, ConfigError> {
        let mut factory: MapFactory =
            MapFactory::new(number as u64, &config.generator_config(number))?;
        Ok(Self::from_map(number, factory.generate()))
    }

    /// Create a [`Level`] object from a generated map.
    pub fn from_map(number: u32, map: GeneratedMap) -> Self {
        let gate_states: Vec<ElectricalState> =
            vec![ElectricalState::Unknown; map.gate_locations.len()];
        Self {
            number,
            grid: map.grid,
            gate_locations: map.gate_locations,
            circuits: map.circuits,
            gate_states,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn gate_locations(&self) -> &[Position] {
        &self.gate_locations
    }

    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    /// Return the circuit of the given barrier.
    pub fn circuit(&self, index: usize) -> Option<&Circuit> {
        self.circuits.get(index)
    }

    /// Return the electrical state last set for the given barrier.
    pub fn gate_state(&self, index: usize) -> Option<ElectricalState> {
        self.gate_states.get(index).copied()
    }

    /// Return the index of the barrier at the given coordinates.
    pub fn gate_at(&self, col: i64, row: i64) -> Option<usize> {
        self.gate_locations.iter().position(|p| p.is_at(col, row))
    }

    /// Set the state of the wires attached to the barrier at the given coordinates.
    ///
    /// Return `false` if there is no barrier at these coordinates.
    pub fn toggle_gate(&mut self, col: i64, row: i64, state: ElectricalState) -> bool {
        match self.gate_at(col, row) {
            Some(index) => self.set_gate_state(index, state),
            None => false,
        }
    }

    /// Set the state of the wires attached to the given barrier.
    ///
    /// The wires are updated from the barrier outward, up and down, until the first cell that is
    /// not a wire.
    pub fn set_gate_state(&mut self, index: usize, state: ElectricalState) -> bool {
        let Some(&position) = self.gate_locations.get(index) else {
            return false;
        };
        let updated: usize =
            self.update_wires(position, state, 1) + self.update_wires(position, state, -1);
        self.gate_states[index] = state;
        debug!("Gate {index} at {position:?} set to {state}: {updated} wires updated");
        true
    }

    /// Drive the wires of the given barrier with the output of its circuit.
    pub fn reveal_gate(&mut self, index: usize) -> bool {
        match self.circuits.get(index) {
            Some(circuit) => {
                let state: ElectricalState = if circuit.output() {
                    ElectricalState::On
                } else {
                    ElectricalState::Off
                };
                self.set_gate_state(index, state)
            }
            None => false,
        }
    }

    /// Update the wires in one direction (`step` is 1 for up and -1 for down) and return the
    /// number of wires updated.
    ///
    /// Only the state stored in the cell changes. The tile ID of the wire is derived from the
    /// cell, so it follows without being re-encoded here.
    fn update_wires(&mut self, position: Position, state: ElectricalState, step: i64) -> usize {
        let col: i64 = position.col as i64;
        let mut row: i64 = position.row as i64 + step;
        let mut count: usize = 0;

        while let Some(Cell::Wire { orientation, .. }) = self.grid.get(Layer::Wire, col, row) {
            self.grid
                .set(Layer::Wire, col, row, Cell::Wire { orientation, state });
            row += step;
            count += 1;
        }
        count
    }

    /// Return the positions of the wires attached to the given barrier, from bottom to top.
    pub fn wire_run(&self, index: usize) -> Vec<Position> {
        let Some(position) = self.gate_locations.get(index) else {
            return Vec::new();
        };
        let col: i64 = position.col as i64;
        let mut run: Vec<Position> = Vec::new();

        let mut row: i64 = position.row as i64 - 1;
        while self.grid.get(Layer::Wire, col, row).is_some_and(|c| c.is_wire()) {
            row -= 1;
        }
        for r in row + 1..position.row as i64 {
            run.push(Position::new(position.col, r as usize));
        }
        let mut row: i64 = position.row as i64 + 1;
        while self.grid.get(Layer::Wire, col, row).is_some_and(|c| c.is_wire()) {
            run.push(Position::new(position.col, row as usize));
            row += 1;
        }
        run
    }

    /// Remove the item at the given coordinates and return it.
    ///
    /// Return [`None`] if there is no item there.
    pub fn remove_item_at(&mut self, col: i64, row: i64) -> Option<ItemKind> {
        match self.grid.take(Layer::Item, col, row) {
            Some(Cell::Item(kind)) => {
                debug!("Item {kind:?} collected at {col},{row}");
                Some(kind)
            }
            _ => None,
        }
    }

    /// Return what the player runs into at the given coordinates.
    ///
    /// Barriers take precedence over wires, and wires over items.
    pub fn contact_at(&self, col: i64, row: i64) -> Contact {
        if let Some(Cell::Barrier) = self.grid.get(Layer::Object, col, row) {
            return Contact::Obstacle;
        }
        if self
            .grid
            .get(Layer::Wire, col, row)
            .is_some_and(|c| c.is_hazard())
        {
            return Contact::Hazard;
        }
        match self.grid.get(Layer::Item, col, row) {
            Some(Cell::Item(kind)) => Contact::Item(kind),
            _ => Contact::Clear,
        }
    }

    /// Return the tile ID of the cell at the given coordinates.
    pub fn tile_id(&self, layer: Layer, col: i64, row: i64) -> Option<TileId> {
        self.grid.tile_id(layer, col, row)
    }

    pub fn obstacle_boxes(&self) -> Vec<Rect> {
        collision::obstacle_boxes(&self.grid)
    }

    pub fn hazard_boxes(&self) -> Vec<Rect> {
        collision::hazard_boxes(&self.grid)
    }

    pub fn item_boxes(&self, category: ItemCategory) -> Vec<Rect> {
        collision::item_boxes(&self.grid, category)
    }

    /// Character that represents the top-most cell at the given coordinates.
    fn symbol(&self, col: i64, row: i64) -> char {
        if let Some(Cell::Gate { gate, .. }) = self.grid.get(Layer::Gate, col, row) {
            return match gate {
                LogicGate::And => 'A',
                LogicGate::Nand => 'N',
                LogicGate::Or => 'O',
                LogicGate::Nor => 'R',
                LogicGate::Xor => 'X',
            };
        }
        if let Some(Cell::Item(kind)) = self.grid.get(Layer::Item, col, row) {
            return match kind {
                ItemKind::Fish(_) => 'f',
                ItemKind::Cheese => 'c',
            };
        }
        if let Some(Cell::Wire { state, .. }) = self.grid.get(Layer::Wire, col, row) {
            return match state {
                ElectricalState::On => '!',
                ElectricalState::Off => ':',
                ElectricalState::Unknown => '?',
            };
        }
        if let Some(Cell::Barrier) = self.grid.get(Layer::Object, col, row) {
            return '#';
        }
        '.'
    }
}

/// Print the map with the top row first, then one line per barrier.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Level {}", self.number)?;
        for row in (0..self.grid.height() as i64).rev() {
            let line: String = (0..self.grid.width() as i64)
                .map(|col| self.symbol(col, row))
                .collect();
            writeln!(f, "  {line}")?;
        }
        for (i, (position, circuit)) in self.gate_locations.iter().zip(&self.circuits).enumerate() {
            writeln!(
                f,
                "  {},{} {} {} {} -> {} ({})",
                position.col,
                position.row,
                circuit.gate(),
                u8::from(circuit.input_a()),
                u8::from(circuit.input_b()),
                u8::from(circuit.output()),
                self.gate_states[i]
            )?;
        }
        Ok(())
    }
}
