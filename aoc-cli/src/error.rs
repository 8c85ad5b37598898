//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// One or more days failed to run
    #[error("{0}")]
    Executor(#[from] ExecutorError),

    /// Creating a new day failed
    #[error("{0}")]
    Scaffold(#[from] ScaffoldError),
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// The day's input file could not be loaded
    #[error("{year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::InputError,
    },

    /// Parsing or solving failed
    #[error("{year}/{day:02}{}: {source}", part.map(|p| format!(" part {p}")).unwrap_or_default())]
    Solver {
        year: u16,
        day: u8,
        /// None when the shared parse step failed
        part: Option<u8>,
        #[source]
        source: aoc_solver::SolverError,
    },

    /// Multiple errors collected while running several days
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ExecutorError>),
}

impl ExecutorError {
    /// Combine two errors into one, flattening nested `Multiple`s
    pub fn combine(first: ExecutorError, second: ExecutorError) -> ExecutorError {
        let mut errors = first.into_vec();
        errors.extend(second.into_vec());
        ExecutorError::Multiple(errors)
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(existing: Option<ExecutorError>, new: ExecutorError) -> ExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// The individual errors, in the order they happened
    pub fn errors(&self) -> Vec<&ExecutorError> {
        match self {
            ExecutorError::Multiple(errors) => {
                errors.iter().flat_map(ExecutorError::errors).collect()
            }
            single => vec![single],
        }
    }

    fn into_vec(self) -> Vec<ExecutorError> {
        match self {
            ExecutorError::Multiple(errors) => errors,
            single => vec![single],
        }
    }
}

/// Errors from `aoc new`
///
/// Every variant is raised before anything is written, except [`ScaffoldError::Io`].
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Day must be between 1 and 25, got {0}")]
    InvalidDay(u16),

    #[error("Template directory not found at {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Day {day} already exists at {}", path.display())]
    AlreadyExists { day: u8, path: PathBuf },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ScaffoldError::Io { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{ParseError, SolverError};

    fn parse_failure(day: u8) -> ExecutorError {
        ExecutorError::Solver {
            year: 2025,
            day,
            part: None,
            source: SolverError::ParseError(ParseError::MissingData("nothing".into())),
        }
    }

    #[test]
    fn test_combine_flattens() {
        let combined = ExecutorError::combine(parse_failure(1), parse_failure(2));
        let combined = ExecutorError::combine(combined, parse_failure(3));
        let combined = ExecutorError::combine(parse_failure(4), combined);

        let ExecutorError::Multiple(errors) = &combined else {
            panic!("expected Multiple");
        };
        assert_eq!(errors.len(), 4);
        assert_eq!(combined.to_string(), "Multiple errors occurred (4 total)");
        assert_eq!(combined.errors().len(), 4);
    }

    #[test]
    fn test_combine_opt() {
        let single = ExecutorError::combine_opt(None, parse_failure(1));
        assert!(matches!(single, ExecutorError::Solver { day: 1, .. }));
    }

    #[test]
    fn test_messages() {
        let err = ExecutorError::Solver {
            year: 2025,
            day: 3,
            part: Some(2),
            source: SolverError::NotFound(2025, 3),
        };
        assert_eq!(
            err.to_string(),
            "2025/03 part 2: Solver not found for year 2025 day 3"
        );
        assert_eq!(
            ScaffoldError::InvalidDay(26).to_string(),
            "Day must be between 1 and 25, got 26"
        );
    }
}
