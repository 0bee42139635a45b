// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

/// Search a text file for bugs and print the number of occurrences
#[derive(Parser, Debug)]
#[command(name = "pest-control")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of text file containing the bug to be searched
    #[arg(value_name = "BUG_FILE")]
    pub bug_file: PathBuf,

    /// Path of text file to search for bugs (only the last one is used)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Print debug messages
    #[arg(short, long)]
    pub debug: bool,

    /// Output format
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// List the line and column of every bug found
    #[arg(long)]
    pub positions: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "PEST_CONTROL_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The landscape file to search.
    pub fn landscape(&self) -> &Path {
        // `files` is required, so there is always a last element.
        self.files.last().map_or(self.bug_file.as_path(), PathBuf::as_path)
    }

    /// Landscape paths given on the command line but not searched.
    pub fn ignored_files(&self) -> &[PathBuf] {
        match self.files.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
