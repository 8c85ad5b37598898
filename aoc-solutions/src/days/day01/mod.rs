//! Day 1: Secret Entrance
//!
//! A safe dial shows 0-99 and starts at 50. Each line rotates it left (`L`)
//! or right (`R`) by some number of clicks.

use anyhow::{Context, anyhow};
use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["dial", "modular"])]
pub struct Day01;

/// How visits to position 0 are counted.
///
/// Both rules have their own regression fixtures: on the published example
/// `Landing` gives 3 and `EveryClick` gives 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroRule {
    /// A rotation counts once when it stops on 0
    Landing,
    /// Every click that leaves the dial pointing at 0 counts, full turns included
    EveryClick,
}

impl AocParser for Day01 {
    const INPUT_MODE: InputMode = InputMode::Lines;
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()?
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_rotation(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_rotation(line: &str) -> anyhow::Result<i64> {
    let negative = match line.as_bytes().first() {
        Some(b'L') => true,
        Some(b'R') => false,
        _ => return Err(anyhow!("first character need to be 'L' or 'R'")),
    };
    let clicks: i64 = line[1..]
        .parse()
        .with_context(|| format!("invalid click count {:?}", &line[1..]))?;
    if clicks < 0 {
        return Err(anyhow!("Rotate value must be non negative"));
    }
    Ok(if negative { -clicks } else { clicks })
}

impl PartSolver<1> for Day01 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(count_zeros(shared, ZeroRule::Landing))
    }
}

impl PartSolver<2> for Day01 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(count_zeros(shared, ZeroRule::EveryClick))
    }
}

/// Replay `rotations` from the starting position and count zeros under `rule`
pub fn count_zeros(rotations: &[i64], rule: ZeroRule) -> u64 {
    let mut position = START;
    let mut count = 0;
    for &rotation in rotations {
        if rule == ZeroRule::EveryClick {
            count += clicks_through_zero(position, rotation);
        }
        position = (position + rotation.rem_euclid(DIAL_SIZE)).rem_euclid(DIAL_SIZE);
        if rule == ZeroRule::Landing && position == 0 {
            count += 1;
        }
    }
    count
}

/// Number of clicks during one rotation that leave the dial on 0
fn clicks_through_zero(position: i64, rotation: i64) -> u64 {
    // clicks needed to reach 0 for the first time in the direction of travel
    let first = match (rotation >= 0, position) {
        (true, p) => DIAL_SIZE - p,
        (false, 0) => DIAL_SIZE,
        (false, p) => p,
    };
    let distance = rotation.abs();
    if distance < first {
        0
    } else {
        ((distance - first) / DIAL_SIZE + 1) as u64
    }
}
