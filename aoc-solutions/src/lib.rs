//! Advent of Code 2025 puzzle solutions with automatic registration
//!
//! Each day lives in `days/dayNN/` next to its example fixtures and derives
//! `AutoRegisterSolver`, so linking this crate is enough for
//! [`aoc_solver::SolverRegistryBuilder::register_all_plugins`] to find it.

pub mod days;
pub mod utils;
