// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bug pattern matching.
//!
//! A bug is a block of text lines. It is found in a landscape wherever its
//! first line occurs and every following line occurs at the same column on
//! the following landscape lines:
//! - Line matching: [`PatternLine::locate`] (exact or camouflaged)
//! - Occurrence scanning: [`Anchors`] / [`count_occurrences`]
//! - Vertical alignment: [`aligned_lines`] / [`is_full_match`]
//! - Orchestration: [`Pattern::scan`] and the [`search`] entry point

pub mod align;
pub mod count;
pub mod line;
pub mod observer;

use serde::Serialize;
use thiserror::Error;

pub use align::{aligned_lines, is_full_match};
pub use count::{Anchors, count_occurrences};
pub use line::{CAMOUFLAGE, Line, MatchMode, PatternLine};
pub use observer::{RecordingObserver, SearchObserver, TracingObserver};

/// Invalid bug pattern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("bug pattern is empty")]
    NoLines,

    #[error("first line of the bug pattern is empty")]
    EmptyFirstLine,
}

/// Position of the first pattern line of a candidate bug (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Anchor {
    pub line: usize,
    pub column: usize,
}

impl Anchor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A validated, multi-line bug pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    lines: Vec<PatternLine>,
}

impl Pattern {
    /// Build a pattern from its lines.
    ///
    /// Fails when there are no lines, or when the first line is empty since
    /// it could never be advanced past.
    pub fn new<I, S>(lines: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<PatternLine> = lines.into_iter().map(PatternLine::new).collect();
        match lines.first() {
            None => Err(PatternError::NoLines),
            Some(first) if first.is_empty() => Err(PatternError::EmptyFirstLine),
            Some(_) => Ok(Self { lines }),
        }
    }

    pub fn lines(&self) -> &[PatternLine] {
        &self.lines
    }

    /// Number of lines in the pattern (never zero).
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Scan the whole landscape and return the number of bugs found.
    ///
    /// Only pattern line 0 is used to find anchors, and only on the anchor
    /// row itself; alignment may look at the rows below it.
    pub fn scan<S: AsRef<str>>(&self, landscape: &[S], observer: &mut dyn SearchObserver) -> usize {
        let rows: Vec<Line<'_>> = landscape.iter().map(|l| Line::new(l.as_ref())).collect();
        let head = &self.lines[0];
        let mut found = 0;

        for (index, row) in rows.iter().enumerate() {
            let candidates = count_occurrences(head, row);
            if candidates == 0 {
                continue;
            }
            tracing::trace!(line = index, candidates, "scanning landscape line");

            for column in Anchors::new(head, row).take(candidates) {
                let anchor = Anchor::new(index, column);
                observer.anchor_found(anchor);
                if is_full_match(&self.lines, &rows, anchor) {
                    found += 1;
                    observer.bug_found(anchor, found);
                }
            }
        }

        found
    }

    /// Number of bugs in `landscape`.
    pub fn count_in<S: AsRef<str>>(&self, landscape: &[S]) -> usize {
        self.scan(landscape, &mut TracingObserver)
    }

    /// Anchors of every bug in `landscape`, in scan order.
    pub fn find_in<S: AsRef<str>>(&self, landscape: &[S]) -> Vec<Anchor> {
        let mut observer = (TracingObserver, RecordingObserver::default());
        self.scan(landscape, &mut observer);
        observer.1.bugs
    }
}

/// Count the bugs described by `pattern` in `landscape`.
pub fn search<P, S>(pattern: &[P], landscape: &[S]) -> Result<usize, PatternError>
where
    P: AsRef<str>,
    S: AsRef<str>,
{
    let pattern = Pattern::new(pattern.iter().map(|line| -> &str { line.as_ref() }))?;
    Ok(pattern.count_in(landscape))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
