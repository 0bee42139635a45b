// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_search;

use clap::Parser;

use pest_control::cli::Cli;
use pest_control::error::{Error, ExitCode};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    pest_control::logging::init(cli.debug);

    match cmd_search::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("pest-control: {err}");
            let status = err
                .downcast_ref::<Error>()
                .map_or(ExitCode::Failure as u8, Error::exit_status);
            std::process::ExitCode::from(status)
        }
    }
}
