// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Vertical alignment of the remaining pattern lines below an anchor.

use super::Anchor;
use super::line::{Line, PatternLine};

/// Count the pattern lines that line up with `anchor`.
///
/// Line 0 is already established by the anchor and always counts. Every
/// later line `j` must be located at exactly `anchor.column` on landscape
/// line `anchor.line + j`. Lines that fall past the end of the landscape are
/// skipped, so such a candidate can never be complete.
pub fn aligned_lines(pattern: &[PatternLine], landscape: &[Line<'_>], anchor: Anchor) -> usize {
    let below = pattern
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(j, bug_line)| {
            landscape
                .get(anchor.line + j)
                .and_then(|line| bug_line.locate(line, anchor.column))
                == Some(anchor.column)
        })
        .count();
    1 + below
}

/// Whether every pattern line lines up with `anchor`.
pub fn is_full_match(pattern: &[PatternLine], landscape: &[Line<'_>], anchor: Anchor) -> bool {
    aligned_lines(pattern, landscape, anchor) == pattern.len()
}

#[cfg(test)]
#[path = "align_tests.rs"]
mod tests;
