// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sbrs - the command-line host for the sprint board.
//!
//! This crate drives the `sb-core` controllers from the command line, with a
//! JSON board file standing in for the backend.
//!
//! # Main Components
//!
//! - [`FileBackend`] - [`sb_core::Backend`] over a board file
//! - [`Settings`] - board path, acting user and organization, from
//!   `.sprintboard.toml` and command-line flags
//! - [`Error`] - Error types for all operations

mod cli;
pub mod colors;
mod commands;
mod display;

pub mod board;
pub mod config;
pub mod error;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use board::{BoardFile, FileBackend, Member};
pub use cli::{
    Cli, Command, FilterArgs, GlobalArgs, IssueCommand, OutputFormat, SprintCommand,
};
pub use config::{find_config, Config, Settings};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;

    if let Command::Completion { shell } = command {
        generate(shell, &mut Cli::command(), "sb", &mut std::io::stdout());
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let settings = Settings::resolve(&cwd, global.board, global.user, global.org)?;
    tracing::debug!(board = %settings.board_path.display(), "resolved settings");

    match command {
        Command::Issues { filter, output } => commands::issues::run(&settings, &filter, output),
        Command::Assignees { filter, output } => {
            commands::assignees::run(&settings, &filter, output)
        }
        Command::Sprint(cmd) => commands::sprint::run(&settings, cmd),
        Command::Issue(cmd) => commands::issue::run(&settings, cmd),
        Command::Users { output } => commands::users::run(&settings, output),
        Command::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
