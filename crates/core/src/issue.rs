// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the sprint board.
//!
//! This module contains the fundamental data types: Issue, Priority,
//! IssueStatus, and the payloads sent to the backend when issues are
//! created or updated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::user::User;

/// How urgent an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All priorities in ascending order, as offered by the priority selector.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            "URGENT" => Ok(Priority::Urgent),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Board column an issue sits in. The set is defined by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    #[default]
    Todo,
    InProgress,
    InReview,
    Done,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Todo => "TODO",
            IssueStatus::InProgress => "IN_PROGRESS",
            IssueStatus::InReview => "IN_REVIEW",
            IssueStatus::Done => "DONE",
        }
    }

    /// Column heading.
    pub fn name(&self) -> &'static str {
        match self {
            IssueStatus::Todo => "Todo",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::InReview => "In Review",
            IssueStatus::Done => "Done",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "TODO" => Ok(IssueStatus::Todo),
            "IN_PROGRESS" => Ok(IssueStatus::InProgress),
            "IN_REVIEW" => Ok(IssueStatus::InReview),
            "DONE" => Ok(IssueStatus::Done),
            _ => Err(Error::InvalidIssueStatus(s.to_string())),
        }
    }
}

/// A tracked work item, as echoed by the backend.
///
/// Only `status` and `priority` change from this side, and only through
/// backend actions. Missing fields deserialize to their empty form so that
/// sparse records degrade to "non-matching" in filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<User>,
    #[serde(default)]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
}

impl Issue {
    /// Creates an issue with default status and priority and no people attached.
    pub fn new(id: impl Into<String>, title: impl Into<String>, project_id: impl Into<String>) -> Self {
        Issue {
            id: id.into(),
            title: title.into(),
            description: None,
            status: IssueStatus::default(),
            priority: Priority::default(),
            assignee: None,
            reporter: None,
            project_id: project_id.into(),
            sprint_id: None,
        }
    }

    /// Identifier of the assignee, if one with an identifier is set.
    pub fn assignee_id(&self) -> Option<&str> {
        self.assignee.as_ref().and_then(User::identifier)
    }
}

/// Fields sent with every issue update. Both are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueUpdate {
    pub status: IssueStatus,
    pub priority: Priority,
}

/// Payload for creating an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    pub status: IssueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
}

impl NewIssue {
    /// Checks the fields the backend requires.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::Validation {
                field: "title",
                message: "Title is required",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
