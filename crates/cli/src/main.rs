// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::IsTerminal;

use clap::Parser;
use sbrs::Cli;
use tracing_subscriber::EnvFilter;

/// Set up logging to stderr, filtered by `SB_LOG`.
fn setup_logging() {
    let filter = EnvFilter::try_from_env("SB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = sbrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
