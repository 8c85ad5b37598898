//! Day 6: Trash Compactor
//!
//! A worksheet of arithmetic problems laid out side by side. The last line
//! holds one operator (`+` or `*`) per problem; the lines above hold digits.
//!
//! Part 1 reads each problem's operands as whitespace separated numbers down
//! a column. Part 2 reads every character column as one number (top digit
//! most significant), with fully blank columns separating problems.

use crate::utils::Grid;
use anyhow::{anyhow, bail};
use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing", "columns"])]
pub struct Day06;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub operands: Vec<u64>,
    pub op: Op,
}

impl Problem {
    pub fn evaluate(&self) -> u64 {
        match self.op {
            Op::Add => self.operands.iter().sum(),
            Op::Mul => self.operands.iter().product(),
        }
    }
}

/// Both readings of the same worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pub by_rows: Vec<Problem>,
    pub by_columns: Vec<Problem>,
}

impl AocParser for Day06 {
    const INPUT_MODE: InputMode = InputMode::Lines;
    type SharedData<'a> = Worksheet;

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines()?;
        while let Some((last, rest)) = lines.split_last() {
            if !last.trim().is_empty() {
                break;
            }
            lines = rest;
        }
        let (op_line, number_lines) = lines
            .split_last()
            .ok_or_else(|| ParseError::MissingData("empty worksheet".into()))?;

        let ops = parse_ops(op_line).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let by_rows =
            read_rows(number_lines, &ops).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let by_columns =
            read_columns(number_lines, &ops).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok(Worksheet { by_rows, by_columns })
    }
}

fn parse_ops(line: &str) -> anyhow::Result<Vec<Op>> {
    line.split_whitespace()
        .map(|token| match token {
            "+" => Ok(Op::Add),
            "*" => Ok(Op::Mul),
            other => bail!("unknown operator {other:?}"),
        })
        .collect()
}

fn read_rows(lines: &[String], ops: &[Op]) -> anyhow::Result<Vec<Problem>> {
    let rows = lines
        .iter()
        .enumerate()
        .map(|(line_idx, line)| {
            let row = line
                .split_whitespace()
                .map(|n| {
                    n.parse::<u64>()
                        .map_err(|e| anyhow!("(line {}) {n:?}: {e}", line_idx + 1))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            if row.len() != ops.len() {
                bail!(
                    "(line {}) expected {} numbers, found {}",
                    line_idx + 1,
                    ops.len(),
                    row.len()
                );
            }
            Ok(row)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(ops
        .iter()
        .enumerate()
        .map(|(i, &op)| Problem {
            operands: rows.iter().map(|row| row[i]).collect(),
            op,
        })
        .collect())
}

fn read_columns(lines: &[String], ops: &[Op]) -> anyhow::Result<Vec<Problem>> {
    let grid = Grid::parse_padded(lines.iter().map(String::as_str), ' ', |c| match c {
        ' ' | '0'..='9' => Ok(c),
        other => bail!("unexpected character {other:?}"),
    })?;

    // one entry per character column, None for an all-blank separator column
    let columns = (0..grid.width()).map(|col| {
        let digits: String = grid.column(col).filter(|c| !c.is_whitespace()).collect();
        (!digits.is_empty()).then_some(digits)
    });

    let mut groups = Vec::new();
    for (is_number, chunk) in &columns.chunk_by(Option::is_some) {
        if is_number {
            let operands = chunk
                .flatten()
                .map(|digits| digits.parse::<u64>())
                .collect::<Result<Vec<_>, _>>()?;
            groups.push(operands);
        }
    }

    if groups.len() != ops.len() {
        bail!(
            "found {} column groups but {} operators",
            groups.len(),
            ops.len()
        );
    }

    Ok(groups
        .into_iter()
        .zip(ops)
        .map(|(operands, &op)| Problem { operands, op })
        .collect())
}

fn grand_total(problems: &[Problem]) -> u64 {
    problems.iter().map(Problem::evaluate).sum()
}

impl PartSolver<1> for Day06 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(grand_total(&shared.by_rows))
    }
}

impl PartSolver<2> for Day06 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(grand_total(&shared.by_columns))
    }
}
