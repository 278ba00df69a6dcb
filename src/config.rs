use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::Strategy;

pub const USAGE: &str =
    "usage: bounded-life INPUT [-n|--generations N] [-o|--output PATH] [--strategy double|row|naive]";

/// Settings of a single run of the command driver.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub generations: usize,
    /// Result goes to stdout when `None`.
    pub output: Option<PathBuf>,
    pub strategy: Strategy,
}

impl Config {
    pub const DEFAULT_GENERATIONS: usize = 1;

    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            generations: Self::DEFAULT_GENERATIONS,
            output: None,
            strategy: Strategy::default(),
        }
    }

    /// Parses arguments without the program name.
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Option<Self>> {
        let args: Vec<String> = args.into_iter().collect();
        let mut input = None;
        let mut generations = Self::DEFAULT_GENERATIONS;
        let mut output = None;
        let mut strategy = Strategy::default();

        let next_arg = |i: usize, flag: &str| -> Result<&str> {
            args.get(i)
                .map(String::as_str)
                .ok_or_else(|| anyhow!("{flag} requires a value"))
        };
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-n" | "--generations" => {
                    i += 1;
                    generations = next_arg(i, "--generations")?
                        .parse()
                        .context("--generations requires a non-negative integer")?;
                }
                "-o" | "--output" => {
                    i += 1;
                    output = Some(PathBuf::from(next_arg(i, "--output")?));
                }
                "--strategy" => {
                    i += 1;
                    strategy = next_arg(i, "--strategy")?.parse().map_err(|err: String| anyhow!(err))?;
                }
                "-h" | "--help" => return Ok(None),
                flag if flag.starts_with('-') && flag.len() > 1 => bail!("unknown argument: {flag}"),
                path => {
                    if input.replace(PathBuf::from(path)).is_some() {
                        bail!("unexpected extra input path: {path}");
                    }
                }
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!("missing input path"))?;
        Ok(Some(Self {
            input,
            generations,
            output,
            strategy,
        }))
    }
}
