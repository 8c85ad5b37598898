//! Day XX

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = XX, tags = [])]
pub struct DayXX;

impl AocParser for DayXX {
    const INPUT_MODE: InputMode = InputMode::Lines;
    type SharedData<'a> = &'a [String];

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        input.lines()
    }
}

impl PartSolver<1> for DayXX {
    fn solve(_shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Err(SolveError::PartNotImplemented(1))
    }
}

impl PartSolver<2> for DayXX {
    fn solve(_shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Err(SolveError::PartNotImplemented(2))
    }
}
