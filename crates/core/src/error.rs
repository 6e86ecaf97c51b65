// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sb-core operations.

use thiserror::Error;

/// All possible errors that can occur in sb-core operations.
///
/// The pure derivations (filtering, sprint resolution) never produce these;
/// they come from parsing, validation, permission checks and the backend.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("sprint not found: {0}")]
    SprintNotFound(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("invalid sprint transition: cannot go from {from} to {to}\n  hint: from '{from}' you can go to: {valid_targets}")]
    InvalidTransition {
        from: String,
        to: String,
        valid_targets: String,
    },

    #[error("cannot {action} sprint {sprint} right now\n  hint: {reason}")]
    TransitionNotOffered {
        sprint: String,
        action: &'static str,
        reason: &'static str,
    },

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: LOW, MEDIUM, HIGH, URGENT")]
    InvalidPriority(String),

    #[error(
        "invalid status: '{0}'\n  hint: valid statuses are: TODO, IN_PROGRESS, IN_REVIEW, DONE"
    )]
    InvalidIssueStatus(String),

    #[error("invalid sprint status: '{0}'\n  hint: valid statuses are: PLANNED, ACTIVE, COMPLETED")]
    InvalidSprintStatus(String),

    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("permission denied: only the reporter or an organization admin can {action}")]
    PermissionDenied { action: &'static str },

    #[error("{0} already in progress")]
    ActionInFlight(&'static str),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
