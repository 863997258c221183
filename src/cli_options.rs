/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the level generator.
//! The command generates a level and prints it, either as ASCII art or in JSON format.
//!
//! In the ASCII art, the top row of the map comes first:
//!
//! | Character | Cell                               |
//! |-----------|------------------------------------|
//! | `.`       | background                         |
//! | `#`       | barrier                            |
//! | `A` `N` `O` `R` `X` | AND, NAND, OR, NOR, XOR gate |
//! | `?` `!` `:` | wire in the unknown, on, off state |
//! | `f` `c`   | fish, cheese                       |
//!
//! # Examples
//!
//! Generate the third level and drive every wire to the output of its circuit:
//!
//! ```text
//! $ amazing-maze --level 3 --width 26 --height 12 --reveal
//! Level 3
//!   ..........................
//!   ..........................
//!   ..........................
//!   ...!....:....!....:....!..
//!   ...X....:....!....:..f.!..
//!   ...!..f.:....A....:....!..
//!   ...!....R....!....:....O..
//!   ...!....:....!..f.N....!..
//!   ...!....:....!....:....!..
//!   .....f....c...............
//!   ............f.............
//!   ..............f...........
//!   3,7 XOR 1 0 -> 1 (ON)
//!   8,5 NOR 1 0 -> 0 (OFF)
//!   13,6 AND 1 1 -> 1 (ON)
//!   18,4 NAND 1 1 -> 0 (OFF)
//!   23,5 OR 0 1 -> 1 (ON)
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use amazing_maze::config::{ConfigError, GameConfig};
use amazing_maze::level::Level;

const COPYRIGHT_NOTICE: &str = "
Copyright 2017 Hip Hip Array
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Generate Amazing Maze levels for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Level to generate. The level number is also the random seed
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    level: u32,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Width of the map, in tiles
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Height of the map, in tiles
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Set every wire to the output of its circuit
    #[arg(short, long, default_value_t = false)]
    reveal: bool,

    /// Print the level in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run(&args) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    }
}

/// Build the configuration from the options.
fn game_config(args: &Args) -> Result<GameConfig, ConfigError> {
    let mut config: GameConfig = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = args.width {
        config.map.width = width;
    }
    if let Some(height) = args.height {
        config.map.height = height;
    }
    debug!("Configuration: {config:?}");
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config: GameConfig = game_config(args)?;
    let mut level: Level = Level::generate(args.level, &config)?;

    if args.reveal {
        for i in 0..level.gate_locations().len() {
            level.reveal_gate(i);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&level)?);
    } else {
        print!("{level}");
    }
    Ok(())
}
