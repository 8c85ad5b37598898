//! Day 3: Lobby
//!
//! Each line is a bank of single-digit batteries. Turning on `k` of them, in
//! order, produces the joltage read from their digits.

use anyhow::anyhow;
use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy", "digits"])]
pub struct Day03;

impl AocParser for Day03 {
    const INPUT_MODE: InputMode = InputMode::Lines;
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a PuzzleInput) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()?
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.trim()
                    .chars()
                    .map(|c| {
                        c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                            anyhow!("(line {}) {:?} is not a digit", line_idx + 1, c)
                        })
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Day03 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Day03 {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        total_joltage(shared, 12)
    }
}

fn total_joltage(banks: &[Vec<u8>], k: usize) -> Result<u64, SolveError> {
    banks.iter().map(|bank| max_joltage(bank, k)).sum()
}

/// Largest `k`-digit number formed by an in-order subsequence of `bank`
///
/// Each digit is the leftmost maximum among the positions that still leave
/// room for the remaining digits.
pub fn max_joltage(bank: &[u8], k: usize) -> Result<u64, SolveError> {
    if bank.len() < k {
        return Err(SolveError::failed(format!(
            "bank of {} batteries cannot turn on {k}",
            bank.len()
        )));
    }

    let mut joltage = 0;
    let mut start = 0;
    for remaining in (0..k).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, digit) = window
            .iter()
            .enumerate()
            // max_by_key keeps the last maximum, so compare reversed positions
            .max_by_key(|&(i, d)| (*d, std::cmp::Reverse(i)))
            .map(|(i, d)| (i, *d))
            .ok_or_else(|| SolveError::failed("empty selection window"))?;
        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }
    Ok(joltage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fixtures::load_fixture;
    use aoc_solver::SolverExt;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_part1_example() {
        let input = load_fixture(3, "test1.txt", Day03::INPUT_MODE);
        assert_eq!(Day03::solve_part_one(&input).unwrap(), 357);
    }

    #[test]
    fn test_part2_example() {
        let input = load_fixture(3, "test1.txt", Day03::INPUT_MODE);
        assert_eq!(Day03::solve_part_two(&input).unwrap(), 3121910778619);
    }

    #[test]
    fn test_max_joltage_per_bank() {
        assert_eq!(max_joltage(&digits("987654321111111"), 2).unwrap(), 98);
        assert_eq!(max_joltage(&digits("811111111111119"), 2).unwrap(), 89);
        assert_eq!(max_joltage(&digits("234234234234278"), 2).unwrap(), 78);
        assert_eq!(max_joltage(&digits("818181911112111"), 2).unwrap(), 92);
        assert_eq!(
            max_joltage(&digits("234234234234278"), 12).unwrap(),
            434234234278
        );
    }

    #[test]
    fn test_exact_length_bank_uses_every_digit() {
        assert_eq!(max_joltage(&digits("19"), 2).unwrap(), 19);
    }

    #[test]
    fn test_short_bank_is_solve_error() {
        assert!(matches!(
            max_joltage(&digits("7"), 2),
            Err(SolveError::SolveFailed(_))
        ));
        let input = PuzzleInput::from_lines(["12345"]);
        assert!(Day03::solve_part_two(&input).is_err());
    }

    #[test]
    fn test_non_digit_is_parse_error() {
        let input = PuzzleInput::from_lines(["123", "12a"]);
        let err = Day03::parse(&input).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
