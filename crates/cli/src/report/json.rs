// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use super::{ReportFormatter, Summary};

/// JSON format report formatter. Positions are 1-based.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, summary: &Summary) -> anyhow::Result<String> {
        let matches: Vec<_> = summary
            .matches
            .iter()
            .map(|anchor| json!({ "line": anchor.line + 1, "column": anchor.column + 1 }))
            .collect();

        let output = json!({
            "file": summary.file.display().to_string(),
            "bugs": summary.bugs,
            "matches": matches,
        });

        let mut text = serde_json::to_string_pretty(&output)?;
        text.push('\n');
        Ok(text)
    }
}
