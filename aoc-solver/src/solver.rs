//! Core solver traits

use crate::error::{ParseError, SolveError, SolverError};
use crate::input::{InputMode, PuzzleInput};

/// Trait for parsing a day's normalized input into shared data
///
/// The parsing step is shared by both parts. Parts only ever see the parsed
/// data through a shared reference, so solving one part can never change
/// what the other part observes.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, InputMode, ParseError, PuzzleInput};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     const INPUT_MODE: InputMode = InputMode::Lines;
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &PuzzleInput) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()?
///             .iter()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// Normalization this day expects from the input loader
    const INPUT_MODE: InputMode;

    /// The parsed form of the input.
    ///
    /// Owned structures or borrows from the [`PuzzleInput`] both work.
    type SharedData<'a>;

    /// Parse the normalized input into the shared data structure.
    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving one part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...).
pub trait PartSolver<const N: u8>: AocParser {
    /// Compute the answer for this part from the shared data.
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError>;
}

/// Core trait that every registered day implements.
///
/// Usually generated by `#[derive(AocSolver)]`, which dispatches
/// `solve_part(shared, n)` to `<Self as PartSolver<n>>::solve(shared)`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, InputMode, ParseError, PuzzleInput, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     const INPUT_MODE: InputMode = InputMode::Text;
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &PuzzleInput) -> Result<Self::SharedData<'_>, ParseError> {
///         input.text()?
///             .split(',')
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &Self::SharedData<'_>, part: u8) -> Result<u64, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum()),
///             2 => Ok(shared.iter().product()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(u64)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &Self::SharedData<'_>, part: u8) -> Result<u64, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &Self::SharedData<'_>,
        part: u8,
    ) -> Result<u64, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }

    /// Parse `input` and solve `part` in one step
    fn solve_input(input: &PuzzleInput, part: u8) -> Result<u64, SolverError> {
        let shared = Self::parse(input)?;
        Ok(Self::solve_part_checked_range(&shared, part)?)
    }

    fn solve_part_one(input: &PuzzleInput) -> Result<u64, SolverError> {
        Self::solve_input(input, 1)
    }

    fn solve_part_two(input: &PuzzleInput) -> Result<u64, SolverError> {
        Self::solve_input(input, 2)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
