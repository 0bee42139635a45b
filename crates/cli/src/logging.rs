// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Off except for warnings by default. `--debug` enables debug events from
//! this crate, and `PEST_CONTROL_LOG` accepts any `EnvFilter` directive
//! (e.g. `PEST_CONTROL_LOG=pest_control=trace`).

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "PEST_CONTROL_LOG";

/// Filter used when `PEST_CONTROL_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "warn,pest_control=debug" } else { "warn" }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
