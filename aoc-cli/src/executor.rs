//! Sequential executor for running solvers

use crate::config::RunConfig;
use crate::error::ExecutorError;
use aoc_solver::{DayConfig, PuzzleInput, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single part
///
/// Failures carry the rendered message; the typed error is returned from
/// [`Executor::execute`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<u64, String>,
    /// Set on the first part of a day, when the input was parsed
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a day to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub config: DayConfig,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected days one after another, parts in order
pub struct Executor<'r> {
    registry: &'r SolverRegistry,
    config: &'r RunConfig,
}

impl<'r> Executor<'r> {
    pub fn new(registry: &'r SolverRegistry, config: &'r RunConfig) -> Self {
        Self { registry, config }
    }

    /// Collect work items by filtering the registered day configurations
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .configs()
            .filter(|c| self.config.year_filter.is_none_or(|y| c.year == y))
            .filter(|c| self.config.day_filter.is_none_or(|d| c.day == d))
            .map(|config| WorkItem {
                config,
                parts: self.filter_parts(config.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's number of parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Run every work item, handing each part's result to `sink` as it completes
    ///
    /// A failing day does not stop the run; all failures are returned together.
    pub fn execute<F>(&self, work_items: &[WorkItem], mut sink: F) -> Result<(), ExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let mut collected_error: Option<ExecutorError> = None;
        for work in work_items {
            if let Err(e) = self.run_day(work, &mut sink) {
                tracing::warn!(error = %e, "day failed");
                collected_error = Some(ExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    /// Load and parse the day's input once, then solve the selected parts in order
    fn run_day<F>(&self, work: &WorkItem, sink: &mut F) -> Result<(), ExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let DayConfig {
            year,
            day,
            input_mode,
            ..
        } = work.config;
        let path = self.config.input_path(day);
        tracing::info!(year, day, path = %path.display(), mode = %input_mode, "running day");

        let fail_all = |sink: &mut F, message: String| {
            for part in work.parts.clone() {
                sink(SolverResult {
                    year,
                    day,
                    part,
                    answer: Err(message.clone()),
                    parse_duration: None,
                    solve_duration: TimeDelta::zero(),
                });
            }
        };

        let input = match PuzzleInput::load(&path, input_mode) {
            Ok(input) => input,
            Err(source) => {
                fail_all(sink, source.to_string());
                return Err(ExecutorError::Input { year, day, source });
            }
        };

        let solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(source) => {
                fail_all(sink, source.to_string());
                return Err(ExecutorError::Solver {
                    year,
                    day,
                    part: None,
                    source,
                });
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        let mut collected_error: Option<ExecutorError> = None;
        for part in work.parts.clone() {
            let (answer, solve_duration) = match solver.solve(part) {
                Ok(result) => (Ok(result.answer), result.duration()),
                Err(e) => {
                    let message = e.to_string();
                    let error = ExecutorError::Solver {
                        year,
                        day,
                        part: Some(part),
                        source: SolverError::SolveError(e),
                    };
                    collected_error = Some(ExecutorError::combine_opt(collected_error, error));
                    (Err(message), TimeDelta::zero())
                }
            };
            sink(SolverResult {
                year,
                day,
                part,
                answer,
                parse_duration: parse_duration.take(),
                solve_duration,
            });
        }
        collected_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverRegistryBuilder;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build()
    }

    fn run_config(input_dir: &Path) -> RunConfig {
        RunConfig {
            year_filter: Some(2025),
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: input_dir.to_path_buf(),
            input_file: "input.txt".to_string(),
            timings: false,
        }
    }

    fn write_input(dir: &TempDir, day: u8, content: &str) {
        let day_dir = dir.path().join(format!("day{day:02}"));
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("input.txt"), content).unwrap();
    }

    fn answers(results: &[SolverResult]) -> Vec<(u8, u8, Result<u64, String>)> {
        results.iter().map(|r| (r.day, r.part, r.answer.clone())).collect()
    }

    #[test]
    fn test_collect_work_items_filters() {
        let registry = registry();
        let temp = TempDir::new().unwrap();
        let mut config = run_config(temp.path());

        let all = Executor::new(&registry, &config).collect_work_items();
        assert!(all.len() >= 8);
        assert!(all.windows(2).all(|w| w[0].config.day < w[1].config.day));

        config.day_filter = Some(4);
        config.part_filter = Some(2);
        let items = Executor::new(&registry, &config).collect_work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].config.day, 4);
        assert_eq!(items[0].parts, 2..=2);

        config.year_filter = Some(2016);
        assert!(Executor::new(&registry, &config).collect_work_items().is_empty());
    }

    #[test]
    fn test_runs_day_from_input_dir() {
        let registry = registry();
        let temp = TempDir::new().unwrap();
        write_input(&temp, 1, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n");
        let mut config = run_config(temp.path());
        config.day_filter = Some(1);

        let executor = Executor::new(&registry, &config);
        let items = executor.collect_work_items();
        let mut results = Vec::new();
        executor.execute(&items, |r| results.push(r)).unwrap();

        assert_eq!(answers(&results), vec![(1, 1, Ok(3)), (1, 2, Ok(6))]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_failures_are_collected_and_run_continues() {
        let registry = registry();
        let temp = TempDir::new().unwrap();
        // day 2 has no input, day 3 is malformed, day 5 is fine
        write_input(&temp, 3, "12a\n");
        write_input(&temp, 5, "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n");
        let config = run_config(temp.path());

        let executor = Executor::new(&registry, &config);
        let items: Vec<_> = executor
            .collect_work_items()
            .into_iter()
            .filter(|w| [2, 3, 5].contains(&w.config.day))
            .collect();
        let mut results = Vec::new();
        let err = executor.execute(&items, |r| results.push(r)).unwrap_err();

        let errors = err.errors();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            ExecutorError::Input {
                day: 2,
                source: aoc_solver::InputError::NotFound { .. },
                ..
            }
        ));
        assert!(matches!(
            errors[1],
            ExecutorError::Solver {
                day: 3,
                part: None,
                source: SolverError::ParseError(_),
                ..
            }
        ));

        assert_eq!(results.len(), 6);
        assert!(results[..4].iter().all(|r| r.answer.is_err()));
        assert_eq!(results[4].answer, Ok(3));
        assert_eq!(results[5].answer, Ok(14));
    }

    #[test]
    fn test_solve_failure_reports_part() {
        let registry = registry();
        let temp = TempDir::new().unwrap();
        // a single junction box parses but cannot be solved
        write_input(&temp, 8, "1,2,3\n");
        let mut config = run_config(temp.path());
        config.day_filter = Some(8);

        let executor = Executor::new(&registry, &config);
        let items = executor.collect_work_items();
        let mut results = Vec::new();
        let err = executor.execute(&items, |r| results.push(r)).unwrap_err();

        assert_eq!(err.errors().len(), 2);
        assert!(matches!(err.errors()[0], ExecutorError::Solver { part: Some(1), .. }));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.answer.is_err()));
    }
}
