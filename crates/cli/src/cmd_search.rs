// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search command implementation.
//!
//! Loads the bug and landscape files, counts the bugs and prints the report.

use std::io::Write;

use pest_control::cli::Cli;
use pest_control::config::{self, Config};
use pest_control::discovery;
use pest_control::error::{Error, ExitCode};
use pest_control::file_reader::read_lines;
use pest_control::matcher::Pattern;
use pest_control::report::{self, Summary};

/// Run the search described by `cli`.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Load config
    let config = match &cli.config {
        Some(path) => config::load_with_warnings(path)?,
        None => match discovery::find_config(&cwd) {
            Some(path) => config::load_with_warnings(&path)?,
            None => Config::default(),
        },
    };

    for ignored in cli.ignored_files() {
        tracing::warn!("only one landscape file is searched, ignoring {}", ignored.display());
    }

    let bug = read_lines(&cli.bug_file)?;
    tracing::debug!("bug type loaded ({} lines)", bug.len());
    let landscape_path = cli.landscape();
    let landscape = read_lines(landscape_path)?;
    tracing::debug!("landscape loaded ({} lines)", landscape.len());

    let pattern = Pattern::new(bug).map_err(Error::from)?;
    tracing::debug!("searching for bugs...");
    let summary = Summary::new(landscape_path, pattern.find_in(&landscape));

    let format = cli.output.unwrap_or(config.output.format);
    let positions = cli.positions || config.output.positions;
    let output = report::formatter(format, positions).format(&summary)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(ExitCode::Success)
}
