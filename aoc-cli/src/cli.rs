//! CLI argument parsing using clap

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Run Advent of Code solutions and scaffold new days",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the default `run` command
    #[command(flatten)]
    pub run: RunArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve registered days (the default when no command is given)
    Run(RunArgs),
    /// Create a new day directory from the template
    New(NewArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding the `dayNN/` folders
    #[arg(long, default_value = "aoc-solutions/src/days")]
    pub input_dir: PathBuf,

    /// Input file name inside each day folder
    #[arg(long, default_value = "input.txt")]
    pub input_file: String,

    /// Show parse/solve timings and a summary
    #[arg(long)]
    pub timings: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Day number (1-25); the next free day if omitted
    pub day: Option<u8>,

    /// Template directory copied for the new day
    #[arg(long, default_value = "template")]
    pub template_dir: PathBuf,

    /// Directory the `dayNN/` folder is created in
    #[arg(long, default_value = "aoc-solutions/src/days")]
    pub days_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_run() {
        let cli = Cli::try_parse_from(["aoc", "--day", "3", "--timings"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.run.day, Some(3));
        assert!(cli.run.timings);
        assert_eq!(cli.run.input_file, "input.txt");
    }

    #[test]
    fn test_run_subcommand() {
        let cli = Cli::try_parse_from([
            "aoc",
            "run",
            "-y",
            "2025",
            "-t",
            "grid,simulation",
            "-vv",
        ])
        .unwrap();
        let Some(Command::Run(args)) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.year, Some(2025));
        assert_eq!(args.tags, vec!["grid", "simulation"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_new_subcommand() {
        let cli = Cli::try_parse_from(["aoc", "new", "9", "--days-dir", "days"]).unwrap();
        let Some(Command::New(args)) = cli.command else {
            panic!("expected new command");
        };
        assert_eq!(args.day, Some(9));
        assert_eq!(args.days_dir, PathBuf::from("days"));
        assert_eq!(args.template_dir, PathBuf::from("template"));

        let cli = Cli::try_parse_from(["aoc", "new"]).unwrap();
        assert!(matches!(cli.command, Some(Command::New(NewArgs { day: None, .. }))));
    }

    #[test]
    fn test_day_out_of_range_rejected_for_run() {
        assert!(Cli::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Cli::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
