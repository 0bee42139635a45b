// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use super::{ReportFormatter, Summary};

/// Text format report formatter.
pub struct TextFormatter {
    /// Add one row per bug with its 1-based line and column.
    pub positions: bool,
}

impl ReportFormatter for TextFormatter {
    fn format(&self, summary: &Summary) -> anyhow::Result<String> {
        let mut output = String::new();
        writeln!(output, "Found {} bugs in {}", summary.bugs, summary.file.display())?;

        if self.positions {
            for anchor in &summary.matches {
                writeln!(output, "  line {}, column {}", anchor.line + 1, anchor.column + 1)?;
            }
        }

        Ok(output)
    }
}
