// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-line matching.
//!
//! A pattern line without spaces is located with a plain substring search
//! (`memchr::memmem`). A pattern line with spaces is "camouflaged": the
//! spaces stand for characters that may differ, so the line is accepted
//! where the Levenshtein distance to the landscape window is at most the
//! number of spaces.

use memchr::memmem;

/// Character that marks an unknown position in a pattern line.
pub const CAMOUFLAGE: char = ' ';

/// A landscape line indexed by character.
///
/// Columns are counted in chars, not bytes, so the same column refers to the
/// same visual position on every line regardless of multi-byte characters.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    text: &'a str,
    /// Byte offset of each char, followed by `text.len()`.
    offsets: Vec<usize>,
}

impl<'a> Line<'a> {
    pub fn new(text: &'a str) -> Self {
        let offsets = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { text, offsets }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length of the line in chars.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset of `column`, clamped to the end of the line.
    fn byte_offset(&self, column: usize) -> usize {
        self.offsets[column.min(self.len())]
    }

    /// Column of a byte offset that falls on a char boundary.
    fn column_of(&self, byte: usize) -> usize {
        match self.offsets.binary_search(&byte) {
            Ok(column) => column,
            // Only reachable for offsets inside a char; round down.
            Err(column) => column.saturating_sub(1),
        }
    }

    /// Slice of at most `len` chars starting at `column`.
    fn window(&self, column: usize, len: usize) -> &'a str {
        let start = self.byte_offset(column);
        let end = self.byte_offset(column.saturating_add(len));
        &self.text[start..end]
    }
}

/// How a pattern line is compared against the landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Leftmost substring search.
    Exact,
    /// Edit-distance comparison anchored on the leading character.
    Fuzzy {
        /// Maximum accepted Levenshtein distance.
        tolerance: usize,
    },
}

/// One line of a bug pattern with its matching mode precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLine {
    text: String,
    len: usize,
    mode: MatchMode,
}

impl PatternLine {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        let spaces = text.chars().filter(|&c| c == CAMOUFLAGE).count();
        let mode = if spaces == 0 { MatchMode::Exact } else { MatchMode::Fuzzy { tolerance: spaces } };
        Self { text, len, mode }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the pattern line in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Find the lowest column at or after `start` where this pattern line is
    /// present in `line`.
    ///
    /// In fuzzy mode only the first occurrence of the leading character is
    /// tried; a failed distance check there is final for this call.
    pub fn locate(&self, line: &Line<'_>, start: usize) -> Option<usize> {
        if start > line.len() {
            return None;
        }
        let from = line.byte_offset(start);
        let haystack = &line.as_str()[from..];

        match self.mode {
            MatchMode::Exact => {
                let found = memmem::find(haystack.as_bytes(), self.text.as_bytes())?;
                Some(line.column_of(from + found))
            }
            MatchMode::Fuzzy { tolerance } => {
                let lead = self.text.chars().next()?;
                let found = haystack.find(lead)?;
                let column = line.column_of(from + found);
                let distance = strsim::levenshtein(&self.text, line.window(column, self.len));
                (distance <= tolerance).then_some(column)
            }
        }
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
