// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-level errors and exit codes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::matcher::PatternError;

/// Exit codes that do not come from the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Search completed.
    Success = 0,
    /// Invalid pattern, undecodable input, or unexpected failure.
    Failure = 1,
    /// Invalid configuration.
    ConfigError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors surfaced to the process boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A bug or landscape file could not be read.
    #[error("{} - {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file is not valid UTF-8.
    #[error("{} - invalid UTF-8 content", path.display())]
    Encoding { path: PathBuf },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Exit status for this error.
    ///
    /// Read failures exit with the OS error number when there is one.
    pub fn exit_status(&self) -> u8 {
        match self {
            Error::Read { source, .. } => match source.raw_os_error().map(u8::try_from) {
                Some(Ok(errno)) if errno != 0 => errno,
                _ => ExitCode::Failure as u8,
            },
            Error::Encoding { .. } | Error::Pattern(_) => ExitCode::Failure as u8,
            Error::Config { .. } => ExitCode::ConfigError as u8,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
