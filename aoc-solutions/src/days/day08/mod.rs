//! Day 8: Playground
//!
//! Junction boxes hang at integer 3-D positions. Strings of lights join the
//! closest pairs first; joined boxes form circuits.

use crate::utils::DisjointSet;
use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};
use regex::Regex;
use std::sync::OnceLock;

/// Closest pairs joined before part 1 measures the circuits
pub const CONNECTIONS: usize = 1000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["geometry", "union-find"])]
pub struct Day08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionBox {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl JunctionBox {
    fn distance_squared(&self, other: &JunctionBox) -> i64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }
}

#[derive(Debug, Clone)]
pub struct Playground {
    pub boxes: Vec<JunctionBox>,
    /// Every pair `(i, j)` with `i < j`, closest first; equal distances keep index order
    pub pairs: Vec<(usize, usize)>,
}

fn point_regex() -> &'static Regex {
    static POINT: OnceLock<Regex> = OnceLock::new();
    POINT.get_or_init(|| Regex::new(r"^\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*$").unwrap())
}

impl AocParser for Day08 {
    const INPUT_MODE: InputMode = InputMode::Lines;
    type SharedData<'a> = Playground;

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        let boxes = input
            .lines()?
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_box(line).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) expected x,y,z but got {line:?}",
                        line_idx + 1
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut pairs: Vec<(usize, usize)> = (0..boxes.len())
            .flat_map(|i| (i + 1..boxes.len()).map(move |j| (i, j)))
            .collect();
        pairs.sort_by_key(|&(i, j)| boxes[i].distance_squared(&boxes[j]));

        Ok(Playground { boxes, pairs })
    }
}

fn parse_box(line: &str) -> Option<JunctionBox> {
    let caps = point_regex().captures(line)?;
    let coord = |i: usize| caps[i].parse::<i64>().ok();
    Some(JunctionBox {
        x: coord(1)?,
        y: coord(2)?,
        z: coord(3)?,
    })
}

impl PartSolver<1> for Day08 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        largest_circuits_product(shared, CONNECTIONS)
    }
}

impl PartSolver<2> for Day08 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        closing_pair_product(shared)
    }
}

/// Join the `connections` closest pairs, then multiply the three largest circuit sizes
///
/// Pairs already in the same circuit still use up a connection.
pub fn largest_circuits_product(
    playground: &Playground,
    connections: usize,
) -> Result<u64, SolveError> {
    if playground.boxes.len() < 2 {
        return Err(SolveError::failed("need at least two junction boxes"));
    }
    let mut circuits = DisjointSet::new(playground.boxes.len());
    for &(i, j) in playground.pairs.iter().take(connections) {
        circuits.union(i, j);
    }

    let mut sizes = circuits.component_sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes.iter().take(3).map(|&size| size as u64).product())
}

/// Join closest pairs until one circuit remains
///
/// Returns the product of the x coordinates of the last pair joined.
pub fn closing_pair_product(playground: &Playground) -> Result<u64, SolveError> {
    if playground.boxes.len() < 2 {
        return Err(SolveError::failed("need at least two junction boxes"));
    }
    let mut circuits = DisjointSet::new(playground.boxes.len());
    for &(i, j) in &playground.pairs {
        if circuits.union(i, j) && circuits.components() == 1 {
            let product = playground.boxes[i].x * playground.boxes[j].x;
            return u64::try_from(product)
                .map_err(|_| SolveError::failed(format!("negative x product {product}")));
        }
    }
    Err(SolveError::failed("junction boxes never formed one circuit"))
}
