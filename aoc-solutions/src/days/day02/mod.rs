//! Day 2: Gift Shop
//!
//! Input is a single comma separated list of inclusive `first-last` ID ranges.
//! Invalid IDs are made only of some block of digits repeated.

use anyhow::{Context, anyhow};
use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};
use std::ops::RangeInclusive;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["ranges", "digits"])]
pub struct Day02;

impl AocParser for Day02 {
    const INPUT_MODE: InputMode = InputMode::Text;
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .text()?
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(parse_range)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_range(piece: &str) -> anyhow::Result<RangeInclusive<u64>> {
    let (first, last) = piece
        .split_once('-')
        .ok_or_else(|| anyhow!("range {piece:?} is missing '-'"))?;
    let first: u64 = first
        .trim()
        .parse()
        .with_context(|| format!("range {piece:?} has an invalid start"))?;
    let last: u64 = last
        .trim()
        .parse()
        .with_context(|| format!("range {piece:?} has an invalid end"))?;
    Ok(first..=last)
}

impl PartSolver<1> for Day02 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(sum_matching(shared, is_doubled))
    }
}

impl PartSolver<2> for Day02 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(sum_matching(shared, is_repeated))
    }
}

fn sum_matching(ranges: &[RangeInclusive<u64>], invalid: fn(&str) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|range| range.clone())
        .filter(|id| invalid(&id.to_string()))
        .sum()
}

/// Exactly two copies of the same block, e.g. `6464`
fn is_doubled(id: &str) -> bool {
    let (left, right) = id.split_at(id.len() / 2);
    id.len() % 2 == 0 && left == right
}

/// Two or more copies of the same block, e.g. `123123123`
fn is_repeated(id: &str) -> bool {
    let n = id.len();
    (1..=n / 2)
        .filter(|block| n % block == 0)
        .any(|block| id.as_bytes().chunks(block).all(|chunk| chunk == &id.as_bytes()[..block]))
}
