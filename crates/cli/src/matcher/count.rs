// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Non-overlapping occurrence scanning within one line.

use super::line::{Line, PatternLine};

/// Iterator over the columns where a pattern line occurs in a line.
///
/// After every hit the search resumes at `column + pattern.len()`, so two
/// occurrences never share a character. The same advance is used in exact
/// and fuzzy mode.
pub struct Anchors<'p, 'l, 'a> {
    pattern: &'p PatternLine,
    line: &'l Line<'a>,
    start: usize,
}

impl<'p, 'l, 'a> Anchors<'p, 'l, 'a> {
    pub fn new(pattern: &'p PatternLine, line: &'l Line<'a>) -> Self {
        Self { pattern, line, start: 0 }
    }
}

impl Iterator for Anchors<'_, '_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // An empty pattern would never advance.
        if self.pattern.is_empty() || self.start >= self.line.len() {
            return None;
        }
        let column = self.pattern.locate(self.line, self.start)?;
        self.start = column + self.pattern.len();
        Some(column)
    }
}

/// Count non-overlapping occurrences of `pattern` in `line`.
pub fn count_occurrences(pattern: &PatternLine, line: &Line<'_>) -> usize {
    Anchors::new(pattern, line).count()
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
