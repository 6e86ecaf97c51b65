// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The boundary to the backend that owns persistence.
//!
//! Every data mutation goes through a [`Backend`]. Implementations may talk to
//! a remote service or a local file; callers treat the returned records as
//! authoritative.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::issue::{Issue, IssueUpdate, NewIssue};
use crate::sprint::{Sprint, SprintStatus};
use crate::user::User;

/// Response to a sprint status change request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintStatusUpdate {
    pub success: bool,
    pub sprint: Sprint,
}

/// CRUD actions delegated to the backend.
pub trait Backend {
    /// Creates an issue in a project and returns the stored record.
    fn create_issue(&mut self, project_id: &str, issue: &NewIssue) -> Result<Issue>;

    /// Updates status and priority of an issue and returns the stored record.
    fn update_issue(&mut self, issue_id: &str, update: &IssueUpdate) -> Result<Issue>;

    fn delete_issue(&mut self, issue_id: &str) -> Result<()>;

    /// Requests a sprint status change. The returned sprint carries the
    /// status the backend actually settled on.
    fn update_sprint_status(
        &mut self,
        sprint_id: &str,
        status: SprintStatus,
    ) -> Result<SprintStatusUpdate>;

    fn organization_users(&self, org_id: &str) -> Result<Vec<User>>;
}
