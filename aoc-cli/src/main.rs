//! AOC CLI - run the Advent of Code solutions and scaffold new days

mod cli;
mod config;
mod error;
mod executor;
mod output;
mod scaffold;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::{Cli, Command};
use config::{NewConfig, RunConfig};
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Command::New(args)) => new_day(NewConfig::from_args(args)),
        Some(Command::Run(args)) => run(RunConfig::from_args(args)),
        None => run(RunConfig::from_args(cli.run)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let CliError::Executor(errors @ error::ExecutorError::Multiple(_)) = &e {
            for error in errors.errors() {
                eprintln!("  - {}", error);
            }
        }
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only carries answers; RUST_LOG overrides -v
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 2),
        )
        .init();
}

fn run(config: RunConfig) -> Result<(), CliError> {
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(&registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    tracing::debug!(days = work_items.len(), "collected work items");

    let mut formatter = OutputFormatter::new(config.timings, work_items.len() > 1);
    let mut results = Vec::new();
    let outcome = executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);
    outcome.map_err(CliError::Executor)
}

fn new_day(config: NewConfig) -> Result<(), CliError> {
    let created = scaffold::create_day(&config)?;
    println!("{}", scaffold::next_steps(&created));
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
