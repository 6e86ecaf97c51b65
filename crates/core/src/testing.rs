// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! In-memory backend for controller tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::action::{Backend, SprintStatusUpdate};
use crate::error::{Error, Result};
use crate::issue::{Issue, IssueUpdate, NewIssue};
use crate::sprint::{Sprint, SprintStatus};
use crate::user::User;

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub issues: Vec<Issue>,
    pub sprints: Vec<Sprint>,
    pub users: Vec<User>,
    /// Fails the next call with this message.
    pub fail_next: Option<String>,
    /// Answers sprint updates with this status instead of the requested one.
    pub settle_sprint_as: Option<SprintStatus>,
    /// Answers sprint updates with `success: false`.
    pub reject_sprint: bool,
    pub calls: Vec<String>,
}

impl FakeBackend {
    fn check_failure(&mut self) -> Result<()> {
        match self.fail_next.take() {
            Some(message) => Err(Error::Backend(message)),
            None => Ok(()),
        }
    }
}

impl Backend for FakeBackend {
    fn create_issue(&mut self, project_id: &str, issue: &NewIssue) -> Result<Issue> {
        self.calls.push(format!("create {}", project_id));
        self.check_failure()?;
        let mut created = Issue::new(
            format!("i-{}", self.issues.len() + 1),
            issue.title.clone(),
            project_id,
        );
        created.status = issue.status;
        created.priority = issue.priority;
        created.sprint_id = issue.sprint_id.clone();
        created.assignee = issue
            .assignee_id
            .as_ref()
            .and_then(|id| self.users.iter().find(|u| &u.id == id).cloned());
        self.issues.push(created.clone());
        Ok(created)
    }

    fn update_issue(&mut self, issue_id: &str, update: &IssueUpdate) -> Result<Issue> {
        self.calls.push(format!("update {}", issue_id));
        self.check_failure()?;
        let issue = self
            .issues
            .iter_mut()
            .find(|i| i.id == issue_id)
            .ok_or_else(|| Error::IssueNotFound(issue_id.to_string()))?;
        issue.status = update.status;
        issue.priority = update.priority;
        Ok(issue.clone())
    }

    fn delete_issue(&mut self, issue_id: &str) -> Result<()> {
        self.calls.push(format!("delete {}", issue_id));
        self.check_failure()?;
        self.issues.retain(|i| i.id != issue_id);
        Ok(())
    }

    fn update_sprint_status(
        &mut self,
        sprint_id: &str,
        status: SprintStatus,
    ) -> Result<SprintStatusUpdate> {
        self.calls.push(format!("sprint {} {}", sprint_id, status));
        self.check_failure()?;
        let settled = self.settle_sprint_as.unwrap_or(status);
        let success = !self.reject_sprint;
        let sprint = self
            .sprints
            .iter_mut()
            .find(|s| s.id == sprint_id)
            .ok_or_else(|| Error::SprintNotFound(sprint_id.to_string()))?;
        if success {
            sprint.status = settled;
        }
        Ok(SprintStatusUpdate {
            success,
            sprint: sprint.clone(),
        })
    }

    fn organization_users(&self, _org_id: &str) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }
}

pub fn sprint_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

/// A two-week sprint starting at [`sprint_start`].
pub fn make_sprint(id: &str, status: SprintStatus) -> Sprint {
    let mut sprint = Sprint::new(
        id,
        format!("Sprint {}", id),
        sprint_start(),
        sprint_start() + Duration::days(14),
    );
    sprint.status = status;
    sprint
}
