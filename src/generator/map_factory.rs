/*
map_factory.rs

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

//! Procedural generation of the maps.
//!
//! A map is a field with barriers at regular intervals.
//! Each barrier sits at a random row of its column and is extended upward and downward by a
//! vertical run of wires, up to the top and bottom margins.
//! The player crosses a column either through the margins or through the wire run, which is only
//! safe if the circuit attached to the barrier is off.
//! Fish and cheese are scattered in the remaining columns.
//!
//! The generation only depends on the seed and the configuration: the same inputs always produce
//! the same map.

use log::{Level, debug, log_enabled};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::circuit::Circuit;
use super::grid::{Cell, Facing, FishColour, Grid, ItemKind, Layer, Orientation, Position};
use super::tile_ids::ElectricalState;
use crate::config::{ConfigError, GeneratorConfig};

/// Result of the generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMap {
    /// The layered grid.
    pub grid: Grid,

    /// Position of the barriers, from left to right.
    pub gate_locations: Vec<Position>,

    /// Circuit of each barrier, in the same order as [`GeneratedMap::gate_locations`].
    pub circuits: Vec<Circuit>,
}

/// Map factory.
pub struct MapFactory {
    config: GeneratorConfig,

    /// Random number generator for the whole generation, including the circuits.
    random: StdRng,
}

impl MapFactory {
    /// Create a [`MapFactory`] object.
    ///
    /// # Errors
    ///
    /// The configuration is validated first, so that an unplayable map is never produced.
    pub fn new(seed: u64, config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("Map factory: seed = {seed}  config = {config:?}");
        Ok(Self {
            config: config.clone(),
            random: StdRng::seed_from_u64(seed),
        })
    }

    /// Generate and return a map.
    pub fn generate(&mut self) -> GeneratedMap {
        let mut grid: Grid = Grid::new(self.config.width, self.config.height);

        for c in 0..self.config.width {
            for r in 0..self.config.height {
                grid.set(Layer::Background, c as i64, r as i64, Cell::Background);
            }
        }

        let columns: Vec<usize> = self.config.barrier_columns();
        let mut gate_locations: Vec<Position> = Vec::with_capacity(columns.len());
        let mut circuits: Vec<Circuit> = Vec::with_capacity(columns.len());

        for column in &columns {
            let position: Position = self.place_barrier(&mut grid, *column);
            let target: bool = self.random.random_bool(0.5);
            let circuit: Circuit = Circuit::new(target, &mut self.random);

            self.place_gate(&mut grid, position, circuits.len(), &circuit);
            gate_locations.push(position);
            circuits.push(circuit);
        }

        self.scatter_items(&mut grid, &columns);

        if log_enabled!(Level::Debug) {
            debug!("Barriers = {gate_locations:?}");
            debug!(
                "Outputs = {:?}",
                circuits.iter().map(|c| c.output()).collect::<Vec<bool>>()
            );
        }

        GeneratedMap {
            grid,
            gate_locations,
            circuits,
        }
    }

    /// Place a barrier and its wire run in the given column.
    fn place_barrier(&mut self, grid: &mut Grid, column: usize) -> Position {
        let margin: usize = self.config.gate_margin;
        let height: usize = self.config.height;
        let (low, high) = self.config.barrier_rows();
        let row: usize = self.random.random_range(low..high);
        let col: i64 = column as i64;

        grid.set(Layer::Object, col, row as i64, Cell::Barrier);

        let wire: Cell = Cell::Wire {
            orientation: Orientation::Vertical,
            state: ElectricalState::Unknown,
        };
        for r in (margin..row).rev() {
            grid.set(Layer::Wire, col, r as i64, wire);
        }
        for r in row + 1..height - margin {
            grid.set(Layer::Wire, col, r as i64, wire);
        }

        debug!("Barrier at column {column}, row {row}");
        Position::new(column, row)
    }

    /// Place the gate of the given circuit on top of its barrier.
    fn place_gate(&self, grid: &mut Grid, position: Position, index: usize, circuit: &Circuit) {
        let margin: usize = self.config.gate_margin;
        let above: usize = self.config.height - margin - 1 - position.row;
        let below: usize = position.row - margin;

        // The gate points toward the longer half of the run
        let facing: Facing = if above >= below {
            Facing::Up
        } else {
            Facing::Down
        };
        grid.set(
            Layer::Gate,
            position.col as i64,
            position.row as i64,
            Cell::Gate {
                circuit: index,
                gate: circuit.gate(),
                facing,
            },
        );
    }

    /// Scatter fish and cheese in the free columns.
    ///
    /// The first column is where the player starts, so it stays clear.
    fn scatter_items(&mut self, grid: &mut Grid, barrier_columns: &[usize]) {
        let mut free: Vec<Position> = Vec::with_capacity(self.config.width * self.config.height);
        for c in 1..self.config.width {
            if barrier_columns.contains(&c) {
                continue;
            }
            for r in 0..self.config.height {
                free.push(Position::new(c, r));
            }
        }

        let wanted: usize = self.config.fish_count.saturating_add(self.config.cheese_count);
        if wanted > free.len() {
            debug!(
                "Only {} free cells for {wanted} items, some items are dropped",
                free.len()
            );
        }

        free.shuffle(&mut self.random);
        let mut spots = free.into_iter();

        for _ in 0..self.config.fish_count {
            let Some(position) = spots.next() else {
                return;
            };
            let colour: FishColour =
                FishColour::from_repr(self.random.random_range(0..FishColour::COUNT) as u8)
                    .unwrap_or(FishColour::Blue);
            grid.set(
                Layer::Item,
                position.col as i64,
                position.row as i64,
                Cell::Item(ItemKind::Fish(colour)),
            );
        }
        for _ in 0..self.config.cheese_count {
            let Some(position) = spots.next() else {
                return;
            };
            grid.set(
                Layer::Item,
                position.col as i64,
                position.row as i64,
                Cell::Item(ItemKind::Cheese),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::ItemCategory;
    use crate::generator::tile_ids;
    use std::collections::HashSet;

    fn generate(seed: u64, config: &GeneratorConfig) -> GeneratedMap {
        MapFactory::new(seed, config).unwrap().generate()
    }

    #[test]
    fn test_same_seed_same_map() {
        let config: GeneratorConfig = GeneratorConfig::default();
        for seed in [0, 1, 2, 99, 123456789] {
            assert_eq!(generate(seed, &config), generate(seed, &config));
        }
    }

    #[test]
    fn test_seeds_differ() {
        let config: GeneratorConfig = GeneratorConfig::default();
        let maps: Vec<GeneratedMap> = (0..10).map(|seed| generate(seed, &config)).collect();
        assert!(maps.iter().any(|m| *m != maps[0]));
    }

    #[test]
    fn test_gate_count_and_columns() {
        let config: GeneratorConfig = GeneratorConfig {
            width: 26,
            wire_distance: 5,
            start_distance: 3,
            ..GeneratorConfig::default()
        };
        let map: GeneratedMap = generate(1, &config);

        assert_eq!(map.gate_locations.len(), 5);
        assert_eq!(map.circuits.len(), 5);
        let columns: HashSet<usize> = map.gate_locations.iter().map(|p| p.col).collect();
        assert_eq!(columns.len(), 5);
        assert_eq!(
            map.gate_locations.iter().map(|p| p.col).collect::<Vec<usize>>(),
            vec![3, 8, 13, 18, 23]
        );
    }

    #[test]
    fn test_wire_run_bounds() {
        // Default shape, then odd heights with other margins
        for (height, gate_margin) in [(18, 3), (15, 2), (11, 1), (13, 4)] {
            let config: GeneratorConfig = GeneratorConfig {
                height,
                gate_margin,
                ..GeneratorConfig::default()
            };
            let (h, m) = (height, gate_margin);

            for seed in 0..50 {
                let map: GeneratedMap = generate(seed, &config);
                for position in &map.gate_locations {
                    let (c, r) = (position.col as i64, position.row);
                    assert!(r > m && r < h - m - 1, "height {h} margin {m} row {r}");
                    assert_eq!(map.grid.get(Layer::Object, c, r as i64), Some(Cell::Barrier));
                    assert_eq!(map.grid.get(Layer::Wire, c, r as i64), None);

                    for row in 0..h {
                        let has_wire: bool = map.grid.get(Layer::Wire, c, row as i64).is_some();
                        let expected: bool = (row >= m && row < r) || (row > r && row < h - m);
                        assert_eq!(
                            has_wire, expected,
                            "height {h} margin {m} seed {seed} column {c} row {row}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_wires_start_unknown_and_only_in_barrier_columns() {
        let config: GeneratorConfig = GeneratorConfig::default();
        let map: GeneratedMap = generate(5, &config);
        let columns: Vec<usize> = config.barrier_columns();

        for (c, _, cell) in map.grid.cells(Layer::Wire) {
            assert!(columns.contains(&c));
            assert_eq!(
                cell,
                Cell::Wire {
                    orientation: Orientation::Vertical,
                    state: ElectricalState::Unknown
                }
            );
        }
        assert_eq!(map.grid.cells(Layer::Object).count(), columns.len());
    }

    #[test]
    fn test_gates_match_circuits() {
        let map: GeneratedMap = generate(8, &GeneratorConfig::default());

        for (i, position) in map.gate_locations.iter().enumerate() {
            match map.grid.get(Layer::Gate, position.col as i64, position.row as i64) {
                Some(Cell::Gate { circuit, gate, .. }) => {
                    assert_eq!(circuit, i);
                    assert_eq!(gate, map.circuits[i].gate());
                }
                other => panic!("no gate at {position:?}: {other:?}"),
            }
            let c: &Circuit = &map.circuits[i];
            assert_eq!(c.gate().evaluate(c.input_a(), c.input_b()), c.output());
        }
    }

    #[test]
    fn test_background_is_full() {
        let config: GeneratorConfig = GeneratorConfig::default();
        let map: GeneratedMap = generate(3, &config);
        assert_eq!(
            map.grid.cells(Layer::Background).count(),
            config.width * config.height
        );
    }

    #[test]
    fn test_items() {
        let config: GeneratorConfig = GeneratorConfig {
            fish_count: 7,
            cheese_count: 2,
            ..GeneratorConfig::default()
        };
        let columns: Vec<usize> = config.barrier_columns();

        for seed in 0..20 {
            let map: GeneratedMap = generate(seed, &config);
            let items: Vec<(usize, usize, Cell)> = map.grid.cells(Layer::Item).collect();
            assert_eq!(items.len(), 9);

            let mut fish: usize = 0;
            for (c, r, cell) in items {
                assert!(c != 0 && !columns.contains(&c), "item at {c},{r}");
                assert_eq!(map.grid.get(Layer::Wire, c as i64, r as i64), None);
                assert_eq!(map.grid.get(Layer::Object, c as i64, r as i64), None);
                let Cell::Item(kind) = cell else {
                    panic!("not an item: {cell:?}");
                };
                if kind.category() == ItemCategory::Fish {
                    fish += 1;
                }
            }
            assert_eq!(fish, 7);
        }
    }

    #[test]
    fn test_items_are_capped_by_free_cells() {
        // Columns 0..6 with a barrier in column 3: 4 free columns of 9 rows
        let config: GeneratorConfig = GeneratorConfig {
            width: 6,
            height: 9,
            fish_count: 30,
            cheese_count: 30,
            ..GeneratorConfig::default()
        };
        let map: GeneratedMap = generate(4, &config);
        assert_eq!(map.grid.cells(Layer::Item).count(), 4 * 9);
    }

    #[test]
    fn test_huge_item_counts() {
        let config: GeneratorConfig = GeneratorConfig {
            fish_count: usize::MAX,
            cheese_count: usize::MAX,
            ..GeneratorConfig::default()
        };
        let map: GeneratedMap = generate(6, &config);

        // Every free cell holds a fish, so no cheese fits
        assert_eq!(map.grid.cells(Layer::Item).count(), 31 * 18 - 6 * 18);
        assert!(
            map.grid
                .cells(Layer::Item)
                .all(|(_, _, cell)| matches!(cell, Cell::Item(kind) if kind.category() == ItemCategory::Fish))
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config: GeneratorConfig = GeneratorConfig {
            wire_distance: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            MapFactory::new(1, &config).err(),
            Some(ConfigError::ZeroWireDistance)
        );

        let config: GeneratorConfig = GeneratorConfig {
            gate_margin: usize::MAX,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            MapFactory::new(1, &config),
            Err(ConfigError::TooShort { .. })
        ));
    }

    #[test]
    fn test_all_tile_ids_are_registered() {
        let registered: HashSet<tile_ids::TileId> = tile_ids::registered_ids();
        for seed in 0..20 {
            let map: GeneratedMap = generate(seed, &GeneratorConfig::default());
            for layer in Layer::ALL {
                for (c, r, cell) in map.grid.cells(layer) {
                    let id: tile_ids::TileId = cell.tile_id().unwrap();
                    assert!(registered.contains(&id), "{layer} {c},{r}: {id}");
                }
            }
        }
    }
}
