//! Advent of Code Solver Library
//!
//! The shared pieces every day builds on: the input loader, the per-day solver
//! contract and a registry that maps year/day to a parsed, solvable instance.
//!
//! # Overview
//!
//! - [`load_string`] / [`load_lines`] read a puzzle file as one trimmed string or as lines
//! - [`AocParser`] declares a day's [`InputMode`] and its shared parsing step
//! - [`PartSolver<N>`](PartSolver) computes one part from the parsed data
//! - [`Solver`] ties the parts together (usually via `#[derive(AocSolver)]`)
//! - [`SolverRegistry`] creates type-erased [`DynSolver`]s for the runner
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     AocParser, AocSolver, InputMode, ParseError, PartSolver, PuzzleInput, SolveError,
//!     SolverRegistryBuilder,
//! };
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Sums;
//!
//! impl AocParser for Sums {
//!     const INPUT_MODE: InputMode = InputMode::Lines;
//!     type SharedData<'a> = Vec<u64>;
//!
//!     fn parse(input: &PuzzleInput) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()?
//!             .iter()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(line.clone())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
//!         Ok(shared.iter().sum())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
//!         Ok(shared.iter().product())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Sums>(2025, 1)
//!     .unwrap()
//!     .build();
//!
//! let input = PuzzleInput::from_raw("1\n2\n3\n", InputMode::Lines);
//! let solver = registry.create_solver(2025, 1, &input).unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, 6);
//! assert_eq!(solver.solve(2).unwrap().answer, 6);
//! ```
//!
//! # Plugin registration
//!
//! Use `#[derive(AutoRegisterSolver)]` to submit a day to the plugin registry:
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2025, day = 1, tags = ["dial"])]
//! pub struct Day01;
//! ```

mod error;
mod input;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{InputError, ParseError, RegistrationError, SolveError, SolverError};
pub use input::{InputMode, PuzzleInput, load_lines, load_string};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, DayConfig, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
