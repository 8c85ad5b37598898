//! Day 4: Printing Department
//!
//! `@` marks a paper roll, `.` an empty floor tile. A roll is accessible when
//! fewer than four of its eight neighbours hold rolls.

use crate::utils::Grid;
use anyhow::bail;
use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};

const MAX_CROWD: usize = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid", "simulation"])]
pub struct Day04;

impl AocParser for Day04 {
    const INPUT_MODE: InputMode = InputMode::Text;
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input.text()?.lines().map(str::trim), |c| match c {
            '@' => Ok(true),
            '.' => Ok(false),
            other => bail!("unexpected cell {other:?}"),
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Day04 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(accessible(shared).len() as u64)
    }
}

impl PartSolver<2> for Day04 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        let mut grid = shared.clone();
        let mut removed = 0;
        loop {
            // every accessible roll of a round goes at once
            let round = accessible(&grid);
            if round.is_empty() {
                return Ok(removed);
            }
            removed += round.len() as u64;
            for (row, col) in round {
                grid.set(row, col, false);
            }
        }
    }
}

fn accessible(grid: &Grid<bool>) -> Vec<(usize, usize)> {
    grid.positions()
        .filter(|&(_, &active)| active)
        .map(|(pos, _)| pos)
        .filter(|&(row, col)| {
            grid.neighbours(row, col)
                .filter(|&(r, c)| grid.get(r, c).copied().unwrap_or(false))
                .count()
                < MAX_CROWD
        })
        .collect()
}
