//! `aoc new`: create a day directory from the template

use crate::config::{NewConfig, day_dir_name};
use crate::error::ScaffoldError;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder replaced with the zero-padded day number in every template file
pub const PLACEHOLDER: &str = "XX";

const LAST_DAY: u8 = 25;

/// What `create_day` produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDay {
    pub day: u8,
    pub path: PathBuf,
    /// Whether `pub mod dayNN;` was added to the days module
    pub registered: bool,
}

/// One past the highest existing `dayNN` directory, or 1 when there is none
pub fn next_day(days_dir: &Path) -> Result<u16, ScaffoldError> {
    if !days_dir.exists() {
        return Ok(1);
    }
    let mut highest = 0u16;
    for entry in fs::read_dir(days_dir).map_err(ScaffoldError::io(days_dir))? {
        let entry = entry.map_err(ScaffoldError::io(days_dir))?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        if let Some(day) = name
            .to_str()
            .and_then(|n| n.strip_prefix("day"))
            .and_then(|n| n.parse::<u16>().ok())
        {
            highest = highest.max(day);
        }
    }
    Ok(highest + 1)
}

/// Validate the request, copy the template and register the module
///
/// Nothing is written when validation fails.
pub fn create_day(config: &NewConfig) -> Result<CreatedDay, ScaffoldError> {
    let requested = match config.day {
        Some(day) => u16::from(day),
        None => {
            let day = next_day(&config.days_dir)?;
            tracing::info!(day, "picked next available day");
            day
        }
    };
    let day = u8::try_from(requested)
        .ok()
        .filter(|d| (1..=LAST_DAY).contains(d))
        .ok_or(ScaffoldError::InvalidDay(requested))?;

    if !config.template_dir.is_dir() {
        return Err(ScaffoldError::TemplateNotFound(config.template_dir.clone()));
    }

    let path = config.days_dir.join(day_dir_name(day));
    if path.exists() {
        return Err(ScaffoldError::AlreadyExists { day, path });
    }

    let padded = format!("{day:02}");
    copy_template(&config.template_dir, &path, &padded)?;
    tracing::info!(day, path = %path.display(), "copied template");

    let registered = register_module(&config.days_dir, day)?;
    Ok(CreatedDay {
        day,
        path,
        registered,
    })
}

/// Recursively copy `from` into `to`, substituting the placeholder in text files
fn copy_template(from: &Path, to: &Path, replacement: &str) -> Result<(), ScaffoldError> {
    fs::create_dir_all(to).map_err(ScaffoldError::io(to))?;
    for entry in fs::read_dir(from).map_err(ScaffoldError::io(from))? {
        let entry = entry.map_err(ScaffoldError::io(from))?;
        let source = entry.path();
        let target = to.join(entry.file_name());

        if source.is_dir() {
            copy_template(&source, &target, replacement)?;
            continue;
        }

        let bytes = fs::read(&source).map_err(ScaffoldError::io(&source))?;
        let contents = match String::from_utf8(bytes) {
            Ok(text) => text.replace(PLACEHOLDER, replacement).into_bytes(),
            Err(raw) => raw.into_bytes(),
        };
        fs::write(&target, contents).map_err(ScaffoldError::io(&target))?;
    }
    Ok(())
}

/// Append `pub mod dayNN;` to `<days_dir>/mod.rs` if that file exists
fn register_module(days_dir: &Path, day: u8) -> Result<bool, ScaffoldError> {
    let mod_file = days_dir.join("mod.rs");
    if !mod_file.is_file() {
        tracing::warn!(path = %mod_file.display(), "no days module to register the new day in");
        return Ok(false);
    }

    let mut contents = fs::read_to_string(&mod_file).map_err(ScaffoldError::io(&mod_file))?;
    let line = format!("pub mod {};", day_dir_name(day));
    if contents.lines().any(|l| l.trim() == line) {
        return Ok(true);
    }
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(&line);
    contents.push('\n');
    fs::write(&mod_file, contents).map_err(ScaffoldError::io(&mod_file))?;
    tracing::info!(path = %mod_file.display(), "registered module");
    Ok(true)
}

/// Follow-up instructions printed after a successful `aoc new`
pub fn next_steps(created: &CreatedDay) -> String {
    let dir = created.path.display();
    let mut steps = format!("Created {} at {dir}\n\nTo get started:\n", day_dir_name(created.day));
    steps.push_str(&format!("  1. Add your puzzle input to {dir}/input.txt\n"));
    steps.push_str(&format!(
        "  2. Paste the example into {dir}/test1.txt and fill in the expected answers\n"
    ));
    steps.push_str(&format!("  3. Implement the parts in {dir}/mod.rs\n"));
    if !created.registered {
        steps.push_str(&format!(
            "  4. Add `pub mod {};` to the days module\n",
            day_dir_name(created.day)
        ));
    }
    steps.push_str(&format!("\nRun: cargo run -p aoc-cli -- --day {}", created.day));
    steps
}
