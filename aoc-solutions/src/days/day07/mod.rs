//! Day 7: Laboratories
//!
//! A tachyon beam enters at the non-`.` cell of the first row and moves down.
//! Every `^` it meets splits it into beams in the columns to the left and right.

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["grid", "simulation", "counting"])]
pub struct Day07;

/// How beams landing in the same column combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamModel {
    /// Beams in the same column are one beam; the result counts splitter hits
    Merged,
    /// Every path is its own timeline; the result counts timelines at the bottom
    Timelines,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifold {
    pub width: usize,
    pub start: usize,
    /// Splitter flags for every row below the first
    pub rows: Vec<Vec<bool>>,
}

impl AocParser for Day07 {
    const INPUT_MODE: InputMode = InputMode::Lines;
    type SharedData<'a> = Manifold;

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines()?.iter().filter(|line| !line.is_empty());

        let first = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("empty manifold".into()))?;
        let width = first.chars().count();
        let start = first
            .chars()
            .position(|c| c != '.')
            .ok_or_else(|| ParseError::MissingData("first row has no beam entry point".into()))?;

        let rows = lines
            .enumerate()
            .map(|(row_idx, line)| {
                let row: Vec<bool> = line.chars().map(|c| c != '.').collect();
                if row.len() != width {
                    return Err(ParseError::InvalidFormat(format!(
                        "(row {}) expected {} columns, found {}",
                        row_idx + 2,
                        width,
                        row.len()
                    )));
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Manifold { width, start, rows })
    }
}

impl PartSolver<1> for Day07 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(propagate(shared, BeamModel::Merged))
    }
}

impl PartSolver<2> for Day07 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(propagate(shared, BeamModel::Timelines))
    }
}

/// Run the beam down the manifold
///
/// Returns the number of splitter hits for [`BeamModel::Merged`] and the
/// number of timelines leaving the bottom for [`BeamModel::Timelines`].
/// Beams split off either edge are lost.
pub fn propagate(manifold: &Manifold, model: BeamModel) -> u64 {
    let mut beams = vec![0u64; manifold.width];
    beams[manifold.start] = 1;
    let mut hits = 0;

    for row in &manifold.rows {
        let mut next = vec![0u64; manifold.width];
        for (col, &count) in beams.iter().enumerate().filter(|&(_, &count)| count > 0) {
            if row[col] {
                hits += 1;
                if let Some(left) = col.checked_sub(1) {
                    next[left] += count;
                }
                if col + 1 < manifold.width {
                    next[col + 1] += count;
                }
            } else {
                next[col] += count;
            }
        }
        if model == BeamModel::Merged {
            next.iter_mut().for_each(|count| *count = (*count).min(1));
        }
        beams = next;
    }

    match model {
        BeamModel::Merged => hits,
        BeamModel::Timelines => beams.iter().sum(),
    }
}
