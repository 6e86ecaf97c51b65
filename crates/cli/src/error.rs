// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the sbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sb_core::Error),

    #[error("board file not found: {0}\n  hint: pass --board <path> or set 'board' in .sprintboard.toml")]
    BoardNotFound(String),

    #[error("no acting user\n  hint: pass --as <user-id> or set 'user' in .sprintboard.toml")]
    UserRequired,

    #[error("no organization\n  hint: pass --org <id> or set 'org' in .sprintboard.toml")]
    OrgRequired,

    #[error("no sprint selected\n  hint: pass a sprint id; the board has no active sprint")]
    NoSprint,

    #[error("no project\n  hint: pass --project <id>; the sprint has no project")]
    ProjectRequired,

    #[error("nothing to change\n  hint: pass --status and/or --priority")]
    NothingToEdit,

    #[error("invalid timestamp: {reason}")]
    InvalidTimestamp { reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// A specialized Result type for sbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
