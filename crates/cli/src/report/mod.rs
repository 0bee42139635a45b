// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search result reporting.
//!
//! Formats the number of bugs found in a landscape as text or JSON.

mod json;
mod text;

use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::matcher::Anchor;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Outcome of searching one landscape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Landscape file, as given on the command line.
    pub file: PathBuf,
    /// Number of bugs found.
    pub bugs: usize,
    /// Where each bug starts, in scan order.
    pub matches: Vec<Anchor>,
}

impl Summary {
    pub fn new(file: &Path, matches: Vec<Anchor>) -> Self {
        Self { file: file.to_path_buf(), bugs: matches.len(), matches }
    }
}

/// Trait for formatting a search summary.
pub trait ReportFormatter {
    fn format(&self, summary: &Summary) -> anyhow::Result<String>;
}

/// Build the formatter for an output format.
pub fn formatter(format: OutputFormat, positions: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter { positions }),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
