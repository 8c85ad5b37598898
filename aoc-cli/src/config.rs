//! Configuration resolution from CLI args

use crate::cli::{NewArgs, RunArgs};
use std::path::{Path, PathBuf};

/// Resolved configuration for the `run` command
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding the `dayNN/` folders
    pub input_dir: PathBuf,
    /// File name of the puzzle input inside each day folder
    pub input_file: String,
    /// Print timings and a summary
    pub timings: bool,
}

impl RunConfig {
    pub fn from_args(args: RunArgs) -> Self {
        Self {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input_file,
            timings: args.timings,
        }
    }

    /// Path of the puzzle input for `day`
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.input_dir.join(day_dir_name(day)).join(&self.input_file)
    }
}

/// Resolved configuration for the `new` command
#[derive(Debug, Clone)]
pub struct NewConfig {
    /// Requested day, or None for the next free one
    pub day: Option<u8>,
    pub template_dir: PathBuf,
    pub days_dir: PathBuf,
}

impl NewConfig {
    pub fn from_args(args: NewArgs) -> Self {
        Self {
            day: args.day,
            template_dir: expand_tilde(&args.template_dir),
            days_dir: expand_tilde(&args.days_dir),
        }
    }
}

/// Folder name of a day, e.g. `day07`
pub fn day_dir_name(day: u8) -> String {
    format!("day{day:02}")
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
