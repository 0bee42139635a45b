// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Count bugs in a text landscape.
//!
//! A bug is a block of lines. Pattern lines that contain spaces are
//! "camouflaged" and accept up to one edit per space. See [`matcher`] for the
//! matching rules and [`matcher::search`] for the entry point.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod logging;
pub mod matcher;
pub mod report;


pub use error::{Error, ExitCode};
pub use matcher::{Anchor, Pattern, PatternError, search};
