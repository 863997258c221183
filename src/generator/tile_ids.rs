/*
tile_ids.rs

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

//! Integer identifiers for the tiles.
//!
//! The renderer looks tiles up by a single integer.
//! A tile ID is the sum of the IDs of its properties, each property living in its own decimal
//! slot:
//!
//! ```text
//!   thousands   hundreds          tens               units
//!   range       gate kind / turn  electrical state   orientation / facing / colour
//! ```
//!
//! Because the electrical state always occupies the tens digit, it can be stripped and replaced
//! without rebuilding the rest of the ID (see [`strip_electrical_state`] and [`with_state`]).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Type of the tile IDs.
pub type TileId = u32;

/// The placeholder tile, used by the renderer for unknown IDs.
pub const PLACEHOLDER: TileId = 0;
/// The background tile.
pub const BACKGROUND: TileId = 1;
/// The barrier tile.
pub const BARRIER: TileId = 2;

/// The first digit in the ID of wire tiles.
pub const WIRE_RANGE: TileId = 1000;
/// The first digit in the ID of logic gate tiles.
pub const GATE_RANGE: TileId = 2000;
/// The first digit in the ID of collectible item tiles.
pub const ITEM_RANGE: TileId = 3000;

/// Vertical wire.
pub const VERTICAL: TileId = 1;
/// Horizontal wire.
pub const HORIZONTAL: TileId = 2;
/// Wire turning up and left.
pub const UP_LEFT: TileId = 3;
/// Wire turning up and right.
pub const UP_RIGHT: TileId = 4;
/// Wire turning down and left.
pub const DOWN_LEFT: TileId = 5;
/// Wire turning down and right.
pub const DOWN_RIGHT: TileId = 6;

/// Turn wires carry this property on top of their corner.
pub const TURN: TileId = 100;

/// Width of the electrical state slot.
const STATE_SLOT: TileId = 10;

/// Electrified component.
pub const ON: TileId = 10;
/// Component that is not electrified.
pub const OFF: TileId = 20;
/// Component whose state the player has not determined yet.
pub const UNKNOWN: TileId = 30;

pub const AND_GATE: TileId = 100;
pub const NAND_GATE: TileId = 200;
pub const OR_GATE: TileId = 300;
pub const NOR_GATE: TileId = 400;
pub const XOR_GATE: TileId = 500;

/// Gate facing up.
pub const UP_GATE: TileId = 1;
/// Gate facing down.
pub const DOWN_GATE: TileId = 2;

/// Fish items carry this property on top of their colour.
pub const FISH: TileId = 100;
/// Cheese item.
pub const CHEESE: TileId = 200;

/// Electrical state of wires and gates as seen by the player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum ElectricalState {
    On,
    Off,
    Unknown,
}

impl ElectricalState {
    /// Return the ID of the property.
    pub fn id(self) -> TileId {
        match self {
            ElectricalState::On => ON,
            ElectricalState::Off => OFF,
            ElectricalState::Unknown => UNKNOWN,
        }
    }

    /// Whether a wire in this state is lethal.
    pub fn is_hazard(self) -> bool {
        self == ElectricalState::On
    }
}

/// Compute and return the ID of the tile with the given properties.
pub fn compute_id(ids: &[TileId]) -> TileId {
    ids.iter().sum()
}

/// Return the ID with its electrical state removed.
pub fn strip_electrical_state(id: TileId) -> TileId {
    id - electrical_slot(id) * STATE_SLOT
}

/// Return the ID with its electrical state replaced by the given one.
pub fn with_state(id: TileId, state: ElectricalState) -> TileId {
    strip_electrical_state(id) + state.id()
}

/// Return the electrical state stored in the ID, if any.
pub fn decode_state(id: TileId) -> Option<ElectricalState> {
    match electrical_slot(id) * STATE_SLOT {
        ON => Some(ElectricalState::On),
        OFF => Some(ElectricalState::Off),
        UNKNOWN => Some(ElectricalState::Unknown),
        _ => None,
    }
}

fn electrical_slot(id: TileId) -> TileId {
    (id / STATE_SLOT) % 10
}

/// Return the set of IDs that the renderer registers an image for.
///
/// Any other ID is drawn with the placeholder.
pub fn registered_ids() -> HashSet<TileId> {
    let mut ids: HashSet<TileId> = HashSet::new();

    ids.insert(PLACEHOLDER);
    ids.insert(BACKGROUND);
    ids.insert(BARRIER);

    for state in [ON, OFF, UNKNOWN] {
        ids.insert(compute_id(&[WIRE_RANGE, VERTICAL, state]));
    }

    for gate in [AND_GATE, NAND_GATE, OR_GATE, NOR_GATE, XOR_GATE] {
        for facing in [UP_GATE, DOWN_GATE] {
            ids.insert(compute_id(&[GATE_RANGE, gate, facing, UNKNOWN]));
        }
    }

    for corner in [UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT] {
        for state in [ON, OFF] {
            ids.insert(compute_id(&[WIRE_RANGE, TURN, state, corner]));
        }
    }

    for colour in 1..=5 {
        ids.insert(compute_id(&[ITEM_RANGE, FISH, colour]));
    }
    ids.insert(compute_id(&[ITEM_RANGE, CHEESE]));

    ids
}
