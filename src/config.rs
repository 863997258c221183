/*
config.rs

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

//! Game and generator configuration.
//!
//! [`GameConfig`] holds the map dimensions, the barrier spacing, and how the number of items
//! grows with the level.
//! It can be read from a JSON file, in which case missing fields keep their default value:
//!
//! ```json
//! {
//!     "map": { "width": 48, "height": 18 },
//!     "items": { "fish_per_level": 2 }
//! }
//! ```
//!
//! [`GameConfig::generator_config`] resolves the configuration of one level into a
//! [`GeneratorConfig`], which the map factory validates before generating anything.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Largest number of cells in a map.
pub const MAX_MAP_CELLS: usize = 1 << 20;

/// Invalid configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The distance between two barriers is zero.
    ZeroWireDistance,

    /// The map is narrower than the distance between two barriers.
    TooNarrow { width: usize, wire_distance: usize },

    /// The last barrier would be outside of the map.
    BarrierOutOfBounds { column: usize, width: usize },

    /// The map is too short to fit a barrier between the margins.
    TooShort { height: usize, gate_margin: usize },

    /// The map has more cells than [`MAX_MAP_CELLS`].
    TooLarge { width: usize, height: usize },

    /// The configuration file cannot be read.
    Io(String),

    /// The configuration file is not valid JSON.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ZeroWireDistance => write!(f, "the wire distance must be at least 1"),
            ConfigError::TooNarrow {
                width,
                wire_distance,
            } => write!(
                f,
                "the map width ({width}) must be at least the wire distance ({wire_distance})"
            ),
            ConfigError::BarrierOutOfBounds { column, width } => write!(
                f,
                "the barrier at column {column} does not fit in a map of width {width}"
            ),
            ConfigError::TooShort {
                height,
                gate_margin,
            } => write!(
                f,
                "the map height ({height}) leaves no room for a barrier with a margin of {gate_margin}"
            ),
            ConfigError::TooLarge { width, height } => write!(
                f,
                "the map ({width}x{height}) has more than {MAX_MAP_CELLS} cells"
            ),
            ConfigError::Io(msg) => write!(f, "cannot read the configuration file: {msg}"),
            ConfigError::Parse(msg) => write!(f, "cannot parse the configuration file: {msg}"),
        }
    }
}

impl Error for ConfigError {}

/// Map dimensions and barrier layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Width of the map in tiles.
    pub width: usize,

    /// Height of the map in tiles.
    pub height: usize,

    /// Number of columns between two barriers.
    pub wire_distance: usize,

    /// Column of the first barrier.
    pub start_distance: usize,

    /// Number of rows kept free of wires at the top and at the bottom of the map.
    pub gate_margin: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 16 * 2,
            height: 9 * 2,
            wire_distance: 5,
            start_distance: 3,
            gate_margin: 3,
        }
    }
}

/// Number of collectible items per level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ItemConfig {
    /// Fish on the first level.
    pub fish_base: usize,

    /// Fish added for every level after the first one.
    pub fish_per_level: usize,

    /// Cheese on the first level.
    pub cheese_base: usize,

    /// One more cheese every `levels_per_cheese` levels. Zero disables the extra cheese.
    pub levels_per_cheese: usize,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            fish_base: 3,
            fish_per_level: 1,
            cheese_base: 1,
            levels_per_cheese: 3,
        }
    }
}

/// Game configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub map: MapConfig,
    pub items: ItemConfig,
}

impl GameConfig {
    /// Read the configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Configuration file: {path:?}");
        let file: File = match File::open(path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => {
                    return Err(ConfigError::Io(format!("{}: file not found", path.display())));
                }
                _ => return Err(ConfigError::Io(format!("{}: {error}", path.display()))),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Read the configuration from JSON data.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, ConfigError> {
        serde_json::from_reader(reader).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Return the generator configuration for the given level (the first level is 1).
    pub fn generator_config(&self, level: u32) -> GeneratorConfig {
        let past_levels: usize = level.saturating_sub(1) as usize;
        let extra_cheese: usize = match self.items.levels_per_cheese {
            0 => 0,
            n => past_levels / n,
        };

        GeneratorConfig {
            width: self.map.width,
            height: self.map.height,
            wire_distance: self.map.wire_distance,
            start_distance: self.map.start_distance,
            gate_margin: self.map.gate_margin,
            fish_count: self
                .items
                .fish_base
                .saturating_add(self.items.fish_per_level.saturating_mul(past_levels)),
            cheese_count: self.items.cheese_base.saturating_add(extra_cheese),
        }
    }
}

/// Everything the map factory needs to generate one level.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub wire_distance: usize,
    pub start_distance: usize,
    pub gate_margin: usize,
    pub fish_count: usize,
    pub cheese_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GameConfig::default().generator_config(1)
    }
}

impl GeneratorConfig {
    /// Number of barriers in the map.
    ///
    /// Call [`GeneratorConfig::validate`] first; a zero wire distance gives zero barriers.
    pub fn barrier_count(&self) -> usize {
        self.width.checked_div(self.wire_distance).unwrap_or(0)
    }

    /// Return the column of the last barrier, or [`None`] if there is no barrier or if the
    /// column does not fit in a `usize`.
    pub fn last_barrier_column(&self) -> Option<usize> {
        self.barrier_count()
            .checked_sub(1)?
            .checked_mul(self.wire_distance)?
            .checked_add(self.start_distance)
    }

    /// Return the columns of the barriers, from left to right.
    ///
    /// Call [`GeneratorConfig::validate`] first; columns past `usize::MAX` are clamped.
    pub fn barrier_columns(&self) -> Vec<usize> {
        (0..self.barrier_count())
            .map(|i| {
                self.start_distance
                    .saturating_add(i.saturating_mul(self.wire_distance))
            })
            .collect()
    }

    /// Return the first and the last row (exclusive) where a barrier can be placed.
    ///
    /// A barrier always keeps at least one wire above and below it.
    pub fn barrier_rows(&self) -> (usize, usize) {
        let low: usize = self.gate_margin.saturating_add(1);
        (low, self.height.saturating_sub(low))
    }

    /// Verify that the configuration produces a playable map.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wire_distance == 0 {
            return Err(ConfigError::ZeroWireDistance);
        }
        if self.barrier_count() == 0 {
            return Err(ConfigError::TooNarrow {
                width: self.width,
                wire_distance: self.wire_distance,
            });
        }
        match self.last_barrier_column() {
            Some(column) if column < self.width => (),
            column => {
                return Err(ConfigError::BarrierOutOfBounds {
                    column: column.unwrap_or(usize::MAX),
                    width: self.width,
                });
            }
        }
        let (low, high) = self.barrier_rows();
        if high <= low {
            return Err(ConfigError::TooShort {
                height: self.height,
                gate_margin: self.gate_margin,
            });
        }
        if self
            .width
            .checked_mul(self.height)
            .is_none_or(|cells| cells > MAX_MAP_CELLS)
        {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config: GeneratorConfig = GeneratorConfig::default();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 18);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.barrier_columns(), vec![3, 8, 13, 18, 23, 28]);
    }

    #[test]
    fn test_barrier_columns_truncate() {
        let config: GeneratorConfig = GeneratorConfig {
            width: 26,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.barrier_count(), 5);
        assert_eq!(config.barrier_columns(), vec![3, 8, 13, 18, 23]);
    }

    #[test]
    fn test_invalid_configurations() {
        let base: GeneratorConfig = GeneratorConfig::default();

        let config = GeneratorConfig {
            wire_distance: 0,
            ..base.clone()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWireDistance));

        let config = GeneratorConfig {
            width: 4,
            ..base.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooNarrow {
                width: 4,
                wire_distance: 5
            })
        );

        let config = GeneratorConfig {
            width: 6,
            start_distance: 6,
            ..base.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BarrierOutOfBounds {
                column: 6,
                width: 6
            })
        );

        // Margin 3 needs rows 4..height-4 to be non-empty
        let config = GeneratorConfig {
            height: 8,
            ..base.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooShort {
                height: 8,
                gate_margin: 3
            })
        );
        let config = GeneratorConfig { height: 9, ..base };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_huge_values_are_rejected() {
        let base: GeneratorConfig = GeneratorConfig::default();

        let config = GeneratorConfig {
            width: 10,
            wire_distance: 5,
            start_distance: usize::MAX,
            ..base.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BarrierOutOfBounds {
                column: usize::MAX,
                width: 10
            })
        );

        let config = GeneratorConfig {
            gate_margin: usize::MAX,
            ..base.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooShort {
                height: 18,
                gate_margin: usize::MAX
            })
        );

        let config = GeneratorConfig {
            width: usize::MAX,
            height: usize::MAX,
            wire_distance: usize::MAX / 2,
            ..base.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge {
                width: usize::MAX,
                height: usize::MAX
            })
        );

        let config = GeneratorConfig {
            width: 2048,
            height: 1024,
            ..base
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge {
                width: 2048,
                height: 1024
            })
        );
    }

    #[test]
    fn test_huge_item_counts_saturate() {
        let data: &[u8] = br#"{ "items": { "fish_base": 18446744073709551615, "fish_per_level": 18446744073709551615, "cheese_base": 18446744073709551615, "levels_per_cheese": 1 } }"#;
        let game: GameConfig = GameConfig::from_reader(data).unwrap();
        let config: GeneratorConfig = game.generator_config(u32::MAX);

        assert_eq!(config.fish_count, usize::MAX);
        assert_eq!(config.cheese_count, usize::MAX);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_items_grow_with_level() {
        let game: GameConfig = GameConfig::default();

        let first: GeneratorConfig = game.generator_config(1);
        assert_eq!(first.fish_count, 3);
        assert_eq!(first.cheese_count, 1);

        let fourth: GeneratorConfig = game.generator_config(4);
        assert_eq!(fourth.fish_count, 6);
        assert_eq!(fourth.cheese_count, 2);

        // Level 0 is treated as the first level
        assert_eq!(game.generator_config(0), first);
    }

    #[test]
    fn test_no_extra_cheese() {
        let mut game: GameConfig = GameConfig::default();
        game.items.levels_per_cheese = 0;
        assert_eq!(game.generator_config(30).cheese_count, 1);
    }

    #[test]
    fn test_partial_json() {
        let data: &[u8] = br#"{ "map": { "width": 48 }, "items": { "fish_per_level": 2 } }"#;
        let game: GameConfig = GameConfig::from_reader(data).unwrap();

        assert_eq!(game.map.width, 48);
        assert_eq!(game.map.height, 18);
        assert_eq!(game.map.wire_distance, 5);
        assert_eq!(game.items.fish_per_level, 2);
        assert_eq!(game.items.fish_base, 3);
    }

    #[test]
    fn test_bad_json() {
        let data: &[u8] = b"{ \"map\": ";
        assert!(matches!(
            GameConfig::from_reader(data),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::load(Path::new("/nonexistent/amazing-maze.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
