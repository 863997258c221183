/*
circuit.rs

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

//! Boolean circuits guarding the barriers.
//!
//! Each barrier has one two-input logic gate.
//! The player reads the gate and its inputs to find out whether the wires around the barrier are
//! electrified.

use log::debug;
use rand::Rng;
use serde::Serialize;
use strum_macros::{Display, FromRepr};

use super::tile_ids::{self, TileId};

/// Logic gates.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display, FromRepr)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogicGate {
    And,
    Nand,
    Or,
    Nor,
    Xor,
}

impl LogicGate {
    /// All the gates, in declaration order.
    pub const ALL: [LogicGate; 5] = [
        LogicGate::And,
        LogicGate::Nand,
        LogicGate::Or,
        LogicGate::Nor,
        LogicGate::Xor,
    ];

    /// Evaluate the output of the gate with the given inputs.
    pub fn evaluate(self, input_a: bool, input_b: bool) -> bool {
        match self {
            LogicGate::And => input_a && input_b,
            LogicGate::Nand => !(input_a && input_b),
            LogicGate::Or => input_a || input_b,
            LogicGate::Nor => !(input_a || input_b),
            LogicGate::Xor => input_a ^ input_b,
        }
    }

    /// Return the tile ID property of the gate.
    pub fn id(self) -> TileId {
        match self {
            LogicGate::And => tile_ids::AND_GATE,
            LogicGate::Nand => tile_ids::NAND_GATE,
            LogicGate::Or => tile_ids::OR_GATE,
            LogicGate::Nor => tile_ids::NOR_GATE,
            LogicGate::Xor => tile_ids::XOR_GATE,
        }
    }
}

/// A logic gate with two inputs chosen so that the gate evaluates to a target output.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Circuit {
    gate: LogicGate,
    input_a: bool,
    input_b: bool,
    target: bool,

    /// Number of input pairs drawn before one matched the target.
    #[serde(skip)]
    attempts: usize,
}

impl Circuit {
    /// Create a circuit with a random gate that evaluates to `target`.
    ///
    /// The gate and the inputs are drawn from the same random number generator.
    pub fn new<R: Rng + ?Sized>(target: bool, random: &mut R) -> Self {
        let gate: LogicGate = LogicGate::from_repr(random.random_range(0..LogicGate::ALL.len()) as u8)
            .unwrap_or(LogicGate::And);
        Self::with_gate(gate, target, random)
    }

    /// Create a circuit with the given gate that evaluates to `target`.
    pub fn with_gate<R: Rng + ?Sized>(gate: LogicGate, target: bool, random: &mut R) -> Self {
        let mut circuit: Circuit = Self {
            gate,
            input_a: false,
            input_b: false,
            target,
            attempts: 0,
        };
        circuit.solve_inputs(random);
        debug!(
            "Circuit {} {} {} -> {} ({} attempts)",
            circuit.gate, circuit.input_a, circuit.input_b, target, circuit.attempts
        );
        circuit
    }

    /// Draw random inputs until the gate evaluates to the target.
    ///
    /// Every gate has at least one matching input pair for both outputs, so each draw succeeds
    /// with a probability of at least 1/4.
    fn solve_inputs<R: Rng + ?Sized>(&mut self, random: &mut R) {
        loop {
            self.attempts += 1;
            self.input_a = random.random_bool(0.5);
            self.input_b = random.random_bool(0.5);
            if self.gate.evaluate(self.input_a, self.input_b) == self.target {
                break;
            }
        }
    }

    /// Return the logic gate.
    pub fn gate(&self) -> LogicGate {
        self.gate
    }

    /// Return the first input.
    pub fn input_a(&self) -> bool {
        self.input_a
    }

    /// Return the second input.
    pub fn input_b(&self) -> bool {
        self.input_b
    }

    /// Return what the circuit evaluates to.
    pub fn output(&self) -> bool {
        self.target
    }

    /// Return the number of input draws it took to solve the circuit.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_truth_tables() {
        let table: [(LogicGate, [bool; 4]); 5] = [
            (LogicGate::And, [false, false, false, true]),
            (LogicGate::Nand, [true, true, true, false]),
            (LogicGate::Or, [false, true, true, true]),
            (LogicGate::Nor, [true, false, false, false]),
            (LogicGate::Xor, [false, true, true, false]),
        ];
        for (gate, outputs) in table {
            assert_eq!(gate.evaluate(false, false), outputs[0], "{gate}");
            assert_eq!(gate.evaluate(false, true), outputs[1], "{gate}");
            assert_eq!(gate.evaluate(true, false), outputs[2], "{gate}");
            assert_eq!(gate.evaluate(true, true), outputs[3], "{gate}");
        }
    }

    #[test]
    fn test_every_gate_and_target_is_solvable() {
        let mut random: StdRng = StdRng::seed_from_u64(7);

        for gate in LogicGate::ALL {
            for target in [false, true] {
                // At least one of the four input pairs matches
                let matching: usize = [(false, false), (false, true), (true, false), (true, true)]
                    .iter()
                    .filter(|(a, b)| gate.evaluate(*a, *b) == target)
                    .count();
                assert!(matching >= 1, "{gate} -> {target}");

                for _ in 0..500 {
                    let circuit: Circuit = Circuit::with_gate(gate, target, &mut random);
                    assert_eq!(circuit.gate(), gate);
                    assert_eq!(
                        gate.evaluate(circuit.input_a(), circuit.input_b()),
                        target,
                        "{gate} -> {target}"
                    );
                    assert!(circuit.attempts() >= 1);
                    assert!(circuit.attempts() < 64, "{gate}: {}", circuit.attempts());
                }
            }
        }
    }

    #[test]
    fn test_expected_attempts_are_bounded() {
        let mut random: StdRng = StdRng::seed_from_u64(2017);
        let runs: usize = 2000;

        for gate in LogicGate::ALL {
            for target in [false, true] {
                let total: usize = (0..runs)
                    .map(|_| Circuit::with_gate(gate, target, &mut random).attempts())
                    .sum();
                // The worst case (one matching pair out of four) averages 4 draws
                let average: f64 = total as f64 / runs as f64;
                assert!(average < 5.0, "{gate} -> {target}: {average}");
            }
        }
    }

    #[test]
    fn test_new_is_deterministic() {
        let mut random1: StdRng = StdRng::seed_from_u64(42);
        let mut random2: StdRng = StdRng::seed_from_u64(42);

        for i in 0..50 {
            let target: bool = i % 2 == 0;
            let c1: Circuit = Circuit::new(target, &mut random1);
            let c2: Circuit = Circuit::new(target, &mut random2);
            assert_eq!(c1, c2);
            assert_eq!(c1.gate().evaluate(c1.input_a(), c1.input_b()), target);
        }
    }

    #[test]
    fn test_new_uses_every_gate() {
        let mut random: StdRng = StdRng::seed_from_u64(3);
        let mut seen: Vec<LogicGate> = Vec::new();

        for _ in 0..500 {
            let gate: LogicGate = Circuit::new(true, &mut random).gate();
            if !seen.contains(&gate) {
                seen.push(gate);
            }
        }
        assert_eq!(seen.len(), LogicGate::ALL.len());
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(LogicGate::Nand.to_string(), "NAND");
        assert_eq!(LogicGate::Xor.to_string(), "XOR");
        assert_eq!(LogicGate::from_repr(3), Some(LogicGate::Nor));
    }
}
