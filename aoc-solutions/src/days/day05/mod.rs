//! Day 5: Cafeteria
//!
//! The input holds inclusive fresh-ingredient ID ranges, a blank line, then
//! the available ingredient IDs.

use anyhow::{Context, anyhow};
use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["ranges", "intervals"])]
pub struct Day05;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Fresh ranges as `(first, last)`, both inclusive
    pub fresh: Vec<(u64, u64)>,
    pub available: Vec<u64>,
}

impl AocParser for Day05 {
    const INPUT_MODE: InputMode = InputMode::Text;
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        let text = input.text()?;
        let mut lines = text.lines().map(str::trim).enumerate();

        let fresh = lines
            .by_ref()
            .take_while(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parse_range(line).with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if fresh.is_empty() {
            return Err(ParseError::MissingData("no fresh ID ranges".into()));
        }

        // a missing ID section just means nothing is available
        let available = lines
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.parse::<u64>().with_context(|| {
                    format!("(line {}) invalid ingredient ID {line:?}", line_idx + 1)
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        Ok(Inventory { fresh, available })
    }
}

fn parse_range(line: &str) -> anyhow::Result<(u64, u64)> {
    let (first, last) = line
        .split_once('-')
        .ok_or_else(|| anyhow!("range {line:?} is missing '-'"))?;
    let first = first.parse().with_context(|| format!("invalid range start in {line:?}"))?;
    let last = last.parse().with_context(|| format!("invalid range end in {line:?}"))?;
    Ok((first, last))
}

impl PartSolver<1> for Day05 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        let count = shared
            .available
            .iter()
            .filter(|&&id| shared.fresh.iter().any(|&(first, last)| (first..=last).contains(&id)))
            .count();
        Ok(count as u64)
    }
}

impl PartSolver<2> for Day05 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(merge(&shared.fresh)
            .iter()
            .map(|&(first, last)| last - first + 1)
            .sum())
    }
}

/// Sort and merge overlapping or touching ranges
fn merge(ranges: &[(u64, u64)]) -> Vec<(u64, u64)> {
    let mut sorted: Vec<_> = ranges
        .iter()
        .copied()
        .filter(|&(first, last)| first <= last)
        .collect();
    sorted.sort_unstable();

    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(sorted.len());
    for (first, last) in sorted {
        match merged.last_mut() {
            Some((_, end)) if first <= end.saturating_add(1) => *end = (*end).max(last),
            _ => merged.push((first, last)),
        }
    }
    merged
}
