// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprints and their linear lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lifecycle state of a sprint: PLANNED -> ACTIVE -> COMPLETED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SprintStatus {
    #[default]
    Planned,
    Active,
    Completed,
}

impl SprintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SprintStatus::Planned => "PLANNED",
            SprintStatus::Active => "ACTIVE",
            SprintStatus::Completed => "COMPLETED",
        }
    }

    /// The only status this one may move to, if any.
    pub fn next(&self) -> Option<SprintStatus> {
        match self {
            SprintStatus::Planned => Some(SprintStatus::Active),
            SprintStatus::Active => Some(SprintStatus::Completed),
            SprintStatus::Completed => None,
        }
    }

    /// Transitions are monotonic and move exactly one step forward.
    pub fn can_transition_to(&self, target: SprintStatus) -> bool {
        self.next() == Some(target)
    }

    pub fn valid_targets(&self) -> String {
        match self.next() {
            Some(next) => next.as_str().to_string(),
            None => "none (sprint is finished)".to_string(),
        }
    }

    /// Returns an error describing the transition if it is not allowed.
    pub fn check_transition(&self, target: SprintStatus) -> Result<()> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(Error::InvalidTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                valid_targets: self.valid_targets(),
            })
        }
    }
}

impl fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SprintStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PLANNED" => Ok(SprintStatus::Planned),
            "ACTIVE" => Ok(SprintStatus::Active),
            "COMPLETED" => Ok(SprintStatus::Completed),
            _ => Err(Error::InvalidSprintStatus(s.to_string())),
        }
    }
}

/// A time-boxed iteration of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: String,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub status: SprintStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Sprint {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Sprint {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
            status: SprintStatus::Planned,
            project_id: None,
        }
    }

    /// Label used by the sprint selector, e.g. `Sprint 1 (Mar 3, 2026 to Mar 17, 2026)`.
    pub fn label(&self) -> String {
        format!(
            "{} ({} to {})",
            self.name,
            self.start_date.format("%b %-d, %Y"),
            self.end_date.format("%b %-d, %Y")
        )
    }
}

/// Looks a sprint up by identifier.
pub fn find_sprint<'a>(sprints: &'a [Sprint], id: &str) -> Option<&'a Sprint> {
    sprints.iter().find(|s| s.id == id)
}

#[cfg(test)]
#[path = "sprint_tests.rs"]
mod tests;
