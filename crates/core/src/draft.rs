// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue creation form state.

use tracing::{info, warn};

use crate::action::Backend;
use crate::error::Result;
use crate::issue::{Issue, IssueStatus, NewIssue, Priority};
use crate::mutation::InFlight;
use crate::user::User;
use crate::view::BoardView;

/// Editable fields of the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assignee_id: Option<String>,
}

impl Default for IssueForm {
    fn default() -> Self {
        IssueForm {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            assignee_id: None,
        }
    }
}

/// Controller behind the issue creation drawer.
///
/// The drawer creates issues in one board column (`status`) of one sprint.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    project_id: String,
    sprint_id: Option<String>,
    status: IssueStatus,
    pub form: IssueForm,
    users: Vec<User>,
    submitting: InFlight,
    last_error: Option<String>,
}

impl IssueDraft {
    pub fn new(project_id: impl Into<String>, sprint_id: Option<String>, status: IssueStatus) -> Self {
        IssueDraft {
            project_id: project_id.into(),
            sprint_id,
            status,
            form: IssueForm::default(),
            users: Vec::new(),
            submitting: InFlight::default(),
            last_error: None,
        }
    }

    /// Resets the form and loads assignable users if none are loaded yet.
    pub fn open(&mut self, backend: &dyn Backend, org_id: &str) -> Result<()> {
        self.form = IssueForm::default();
        self.last_error = None;
        if self.users.is_empty() && !org_id.is_empty() {
            self.users = backend.organization_users(org_id)?;
        }
        Ok(())
    }

    /// Users offered as assignees.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Builds and validates the payload for the backend.
    pub fn payload(&self) -> Result<NewIssue> {
        let payload = NewIssue {
            title: self.form.title.clone(),
            description: self.form.description.clone(),
            priority: self.form.priority,
            assignee_id: self.form.assignee_id.clone().filter(|id| !id.is_empty()),
            status: self.status,
            sprint_id: self.sprint_id.clone(),
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Creates the issue through `backend` and adds it to `view`.
    ///
    /// On failure the form is kept as typed.
    pub fn submit(&mut self, backend: &mut dyn Backend, view: &mut BoardView) -> Result<Issue> {
        let payload = self.payload()?;
        self.submitting.begin("issue creation")?;
        let result = backend.create_issue(&self.project_id, &payload);
        self.submitting.finish();
        match result {
            Ok(issue) => {
                info!(issue_id = %issue.id, project_id = %self.project_id, "issue created");
                self.form = IssueForm::default();
                self.last_error = None;
                view.upsert_issue(issue.clone());
                Ok(issue)
            }
            Err(e) => {
                warn!(project_id = %self.project_id, error = %e, "issue creation failed");
                self.last_error = Some("Failed to create issue. Please try again.".to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
