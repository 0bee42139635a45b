// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading bug and landscape files into lines, with a size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. The mapping is copied into owned lines before it is dropped
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(String),
    /// Large file memory-mapped.
    Mapped(MappedContent),
}

/// Memory-mapped file content with UTF-8 validation.
pub struct MappedContent {
    mmap: Mmap,
}

impl MappedContent {
    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.mmap).ok()
    }
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        let size = meta.len();

        if size < MMAP_THRESHOLD {
            // Small file: direct read
            let content = fs::read_to_string(path)?;
            Ok(FileContent::Owned(content))
        } else {
            // Large file: memory-map
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and the content is copied out before the mapping is dropped.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(MappedContent { mmap }))
        }
    }

    /// Get content as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FileContent::Owned(s) => Some(s),
            FileContent::Mapped(m) => m.as_str(),
        }
    }
}

/// Read `path` into its lines, with trailing whitespace trimmed from each.
///
/// Line terminators may be `\n` or `\r\n`. I/O failures keep the offending
/// path; content that is not UTF-8 is an [`Error::Encoding`].
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    tracing::debug!("reading input file: {}", path.display());

    let content = FileContent::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            Error::Encoding { path: path.to_path_buf() }
        } else {
            Error::Read { path: path.to_path_buf(), source }
        }
    })?;
    let text = content.as_str().ok_or_else(|| Error::Encoding { path: path.to_path_buf() })?;

    Ok(split_lines(text))
}

/// Split text into lines with trailing whitespace removed.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim_end().to_string()).collect()
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
