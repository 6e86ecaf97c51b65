// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod assignees;
pub mod issue;
pub mod issues;
pub mod sprint;
pub mod users;

use chrono::{DateTime, Utc};
use sb_core::{FilterSpec, Priority};

use crate::board::{BoardFile, FileBackend};
use crate::cli::FilterArgs;
use crate::config::Settings;
use crate::error::{Error, Result};

/// Helper to open the board from the resolved settings.
pub fn open_backend(settings: &Settings) -> Result<FileBackend> {
    FileBackend::open(&settings.board_path, settings.user.clone())
}

/// Parse `--now`, falling back to the system clock.
pub fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| Error::InvalidTimestamp {
                reason: format!("'{}': {}", s, e),
            }),
        None => Ok(Utc::now()),
    }
}

/// The sprint a listing is scoped to: the requested one, else the board's
/// default. `None` only when the board has no sprints at all.
pub fn scope_sprint(board: &BoardFile, requested: Option<&str>) -> Result<Option<String>> {
    match requested {
        Some(id) => {
            if board.sprints.iter().any(|s| s.id == id) {
                Ok(Some(id.to_string()))
            } else {
                Err(sb_core::Error::SprintNotFound(id.to_string()).into())
            }
        }
        None => Ok(board.default_sprint().map(|s| s.id.clone())),
    }
}

/// Like [`scope_sprint`], but a sprint is required.
pub fn require_sprint(board: &BoardFile, requested: Option<&str>) -> Result<String> {
    scope_sprint(board, requested)?.ok_or(Error::NoSprint)
}

/// Build the filter spec from command-line filter flags.
pub fn build_filter(args: &FilterArgs) -> Result<FilterSpec> {
    let mut spec = FilterSpec::new();
    if let Some(term) = &args.search {
        spec = spec.with_search(term.as_str());
    }
    for id in &args.assignee {
        let id = id.trim();
        if !id.is_empty() {
            spec = spec.with_assignee(id);
        }
    }
    // An empty priority selects nothing
    if let Some(p) = args.priority.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        spec = spec.with_priority(p.parse::<Priority>()?);
    }
    Ok(spec)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
