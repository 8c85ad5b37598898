//! Registry and type-erased instance behaviour

use aoc_solver::{
    AocParser, AocSolver, DayConfig, DynSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    RegistrationError, SolveError, SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Numbers;

impl AocParser for Numbers {
    const INPUT_MODE: InputMode = InputMode::Lines;
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &PuzzleInput) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()?
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                line.parse().map_err(|_| {
                    ParseError::InvalidFormat(format!("(line {}) not a number", idx + 1))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Numbers {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(shared.iter().sum())
    }
}

impl PartSolver<2> for Numbers {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(shared.iter().copied().max().unwrap_or(0))
    }
}

fn registry() -> aoc_solver::SolverRegistry {
    SolverRegistryBuilder::new()
        .register::<Numbers>(2025, 1)
        .unwrap()
        .build()
}

#[test]
fn test_config_reflects_solver_constants() {
    let registry = registry();
    assert_eq!(
        registry.config(2025, 1),
        Some(DayConfig {
            year: 2025,
            day: 1,
            parts: 2,
            input_mode: InputMode::Lines,
        })
    );
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
    assert_eq!(registry.configs().count(), 1);
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<Numbers>(2025, 1)
        .unwrap()
        .register::<Numbers>(2025, 1);
    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2025, 1))));
}

#[test]
fn test_out_of_range_registration_rejected() {
    let result = SolverRegistryBuilder::new().register::<Numbers>(2025, 26);
    assert!(matches!(result, Err(RegistrationError::InvalidYearDay(2025, 26))));

    let result = SolverRegistryBuilder::new().register::<Numbers>(2014, 1);
    assert!(matches!(result, Err(RegistrationError::InvalidYearDay(2014, 1))));
}

#[test]
fn test_create_solver_errors() {
    let registry = registry();
    let input = PuzzleInput::from_lines(["1"]);

    assert!(matches!(
        registry.create_solver(2025, 2, &input),
        Err(SolverError::NotFound(2025, 2))
    ));
    assert!(matches!(
        registry.create_solver(1999, 1, &input),
        Err(SolverError::InvalidYearDay(1999, 1))
    ));

    let bad = PuzzleInput::from_lines(["1", "x"]);
    assert!(matches!(
        registry.create_solver(2025, 1, &bad),
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));

    let wrong_mode = PuzzleInput::from_raw("1\n2", InputMode::Text);
    assert!(matches!(
        registry.create_solver(2025, 1, &wrong_mode),
        Err(SolverError::ParseError(ParseError::WrongInputMode { .. }))
    ));
}

#[test]
fn test_instance_metadata_and_timing() {
    let registry = registry();
    let input = PuzzleInput::from_lines(["4", "5"]);
    let solver = registry.create_solver(2025, 1, &input).unwrap();

    assert_eq!(solver.year(), 2025);
    assert_eq!(solver.day(), 1);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_end() >= solver.parse_start());

    let result = solver.solve(1).unwrap();
    assert_eq!(result.answer, 9);
    assert!(result.duration() >= chrono::TimeDelta::zero());

    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Solving is repeatable and independent of the order parts are requested in.
    #[test]
    fn prop_solving_is_pure(numbers in prop::collection::vec(0u64..1000, 0..20)) {
        let registry = registry();
        let input = PuzzleInput::from_lines(numbers.iter().map(u64::to_string));
        let before = input.clone();
        let solver: Box<dyn DynSolver + '_> = registry.create_solver(2025, 1, &input).unwrap();

        let two_first = solver.solve(2).unwrap().answer;
        let one = solver.solve(1).unwrap().answer;
        let two_again = solver.solve(2).unwrap().answer;

        prop_assert_eq!(one, numbers.iter().sum::<u64>());
        prop_assert_eq!(two_first, two_again);
        prop_assert_eq!(two_first, numbers.iter().copied().max().unwrap_or(0));
        prop_assert_eq!(&input, &before);
    }
}
