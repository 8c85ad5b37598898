use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, InputMode, ParseError, PartSolver, PuzzleInput,
    SolveError, SolverPlugin, SolverRegistryBuilder, inventory,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 03, tags = ["macro-test", "text"])]
pub struct CommaSums;

impl AocParser for CommaSums {
    const INPUT_MODE: InputMode = InputMode::Text;
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &PuzzleInput) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .text()?
            .split(',')
            .map(|n| {
                n.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {n}")))
            })
            .collect()
    }
}

impl PartSolver<1> for CommaSums {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(shared.iter().sum())
    }
}

impl PartSolver<2> for CommaSums {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(shared.iter().map(|n| n * n).sum())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 4)]
pub struct LineCount;

impl AocParser for LineCount {
    const INPUT_MODE: InputMode = InputMode::Lines;
    type SharedData<'a> = &'a [String];

    fn parse(input: &PuzzleInput) -> Result<Self::SharedData<'_>, ParseError> {
        input.lines()
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &Self::SharedData<'_>) -> Result<u64, SolveError> {
        Ok(shared.len() as u64)
    }
}

#[test]
fn test_plugins_are_submitted() {
    let plugins: Vec<&SolverPlugin> = inventory::iter::<SolverPlugin>().collect();
    let comma = plugins
        .iter()
        .find(|p| p.year == 2016 && p.day == 3)
        .expect("CommaSums plugin missing");
    assert_eq!(comma.tags, &["macro-test", "text"]);

    let count = plugins
        .iter()
        .find(|p| p.year == 2016 && p.day == 4)
        .expect("LineCount plugin missing");
    assert!(count.tags.is_empty());
}

#[test]
fn test_register_all_plugins_carries_input_mode() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let config = registry.config(2016, 3).unwrap();
    assert_eq!(config.parts, 2);
    assert_eq!(config.input_mode, InputMode::Text);

    let config = registry.config(2016, 4).unwrap();
    assert_eq!(config.parts, 1);
    assert_eq!(config.input_mode, InputMode::Lines);
}

#[test]
fn test_filtered_registration_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.contains(2016, 3));
    assert!(!registry.contains(2016, 4));

    let input = PuzzleInput::from_raw("1,2,3\n", InputMode::Text);
    let solver = registry.create_solver(2016, 3, &input).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, 6);
    assert_eq!(solver.solve(2).unwrap().answer, 14);
}
