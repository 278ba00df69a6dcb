#![warn(clippy::all)]

use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use bounded_life::{config::USAGE, io, Config};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn run(config: &Config) -> Result<()> {
    let mut grid = io::load(&config.input)
        .with_context(|| format!("failed to load {}", config.input.display()))?;
    info!(
        width = grid.width(),
        height = grid.height(),
        population = grid.population(),
        "loaded field"
    );

    let timer = Instant::now();
    grid.tick_with(config.strategy, config.generations);
    info!(
        generations = config.generations,
        strategy = %config.strategy,
        elapsed = ?timer.elapsed(),
        population = grid.population(),
        "simulation finished"
    );

    match &config.output {
        Some(path) => io::save(&grid, path)
            .with_context(|| format!("failed to save {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(io::write(&grid).as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "run failed");
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// The single line reported on stderr for a failed run.
fn failure_message(err: &anyhow::Error) -> String {
    let kind = err
        .downcast_ref::<bounded_life::Error>()
        .map_or("Error", bounded_life::Error::kind);
    format!("error[{kind}]: {err:#}")
}
