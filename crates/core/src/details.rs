// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue details: status/priority edits and deletion for a single issue.

use tracing::{info, warn};

use crate::action::Backend;
use crate::error::{Error, Result};
use crate::issue::{Issue, IssueStatus, IssueUpdate, Priority};
use crate::mutation::{InFlight, Mutation};
use crate::user::Viewer;
use crate::view::BoardView;

/// Controller behind the issue details dialog.
#[derive(Debug, Clone)]
pub struct IssueDetails {
    issue: Issue,
    status: Mutation<IssueStatus>,
    priority: Mutation<Priority>,
    delete: InFlight,
    can_change: bool,
    last_error: Option<String>,
}

impl IssueDetails {
    pub fn new(issue: Issue, viewer: &Viewer) -> Self {
        let can_change = viewer.can_modify(issue.reporter.as_ref());
        IssueDetails {
            status: Mutation::new("issue update", issue.status),
            priority: Mutation::new("issue update", issue.priority),
            issue,
            delete: InFlight::default(),
            can_change,
            last_error: None,
        }
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    /// Whether edits and deletion are offered to the viewer.
    pub fn can_change(&self) -> bool {
        self.can_change
    }

    /// Status to display (the requested one while an update is pending).
    pub fn status(&self) -> IssueStatus {
        *self.status.value()
    }

    pub fn priority(&self) -> Priority {
        *self.priority.value()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_pending() || self.priority.is_pending() || self.delete.is_busy()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Link back to the issue's board.
    pub fn project_path(&self) -> String {
        match &self.issue.sprint_id {
            Some(sprint) => format!("/project/{}?sprint={}", self.issue.project_id, sprint),
            None => format!("/project/{}", self.issue.project_id),
        }
    }

    fn ensure_can_change(&self, action: &'static str) -> Result<()> {
        if self.can_change {
            Ok(())
        } else {
            Err(Error::PermissionDenied { action })
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.status.is_pending() || self.priority.is_pending() {
            return Err(Error::ActionInFlight("issue update"));
        }
        Ok(())
    }

    /// Starts a status change. Returns the update to send, or `None` if the
    /// status is unchanged.
    pub fn request_status(&mut self, status: IssueStatus) -> Result<Option<IssueUpdate>> {
        self.ensure_can_change("change the status")?;
        self.ensure_idle()?;
        if !self.status.request(status)? {
            return Ok(None);
        }
        Ok(Some(IssueUpdate {
            status,
            priority: *self.priority.confirmed(),
        }))
    }

    /// Starts a priority change. Returns the update to send, or `None` if the
    /// priority is unchanged.
    pub fn request_priority(&mut self, priority: Priority) -> Result<Option<IssueUpdate>> {
        self.ensure_can_change("change the priority")?;
        self.ensure_idle()?;
        if !self.priority.request(priority)? {
            return Ok(None);
        }
        Ok(Some(IssueUpdate {
            status: *self.status.confirmed(),
            priority,
        }))
    }

    /// Applies the backend's answer to a pending update. On success both
    /// fields adopt the returned record.
    pub fn apply_update(&mut self, result: Result<Issue>) -> Result<&Issue> {
        match result {
            Ok(updated) => {
                self.status.settle(updated.status);
                self.priority.settle(updated.priority);
                self.last_error = None;
                info!(issue_id = %updated.id, status = %updated.status, priority = %updated.priority, "issue updated");
                self.issue = updated;
                Ok(&self.issue)
            }
            Err(e) => {
                warn!(issue_id = %self.issue.id, error = %e, "issue update failed");
                let message = e.to_string();
                if self.status.is_pending() {
                    self.status.fail(message.clone());
                }
                if self.priority.is_pending() {
                    self.priority.fail(message.clone());
                }
                self.last_error = Some(message);
                Err(e)
            }
        }
    }

    pub fn request_delete(&mut self) -> Result<()> {
        self.ensure_can_change("delete this issue")?;
        self.delete.begin("delete")
    }

    pub fn apply_delete(&mut self, result: Result<()>) -> Result<()> {
        self.delete.finish();
        match result {
            Ok(()) => {
                info!(issue_id = %self.issue.id, "issue deleted");
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(issue_id = %self.issue.id, error = %e, "issue delete failed");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Changes the status through `backend` and hands the result to `view`.
    pub fn change_status(
        &mut self,
        backend: &mut dyn Backend,
        view: &mut BoardView,
        status: IssueStatus,
    ) -> Result<()> {
        if let Some(update) = self.request_status(status)? {
            self.send_update(backend, view, &update)?;
        }
        Ok(())
    }

    /// Changes the priority through `backend` and hands the result to `view`.
    pub fn change_priority(
        &mut self,
        backend: &mut dyn Backend,
        view: &mut BoardView,
        priority: Priority,
    ) -> Result<()> {
        if let Some(update) = self.request_priority(priority)? {
            self.send_update(backend, view, &update)?;
        }
        Ok(())
    }

    fn send_update(
        &mut self,
        backend: &mut dyn Backend,
        view: &mut BoardView,
        update: &IssueUpdate,
    ) -> Result<()> {
        let result = backend.update_issue(&self.issue.id, update);
        let updated = self.apply_update(result)?.clone();
        view.upsert_issue(updated);
        Ok(())
    }

    /// Deletes the issue through `backend` and removes it from `view`.
    pub fn delete(&mut self, backend: &mut dyn Backend, view: &mut BoardView) -> Result<()> {
        self.request_delete()?;
        let result = backend.delete_issue(&self.issue.id);
        self.apply_delete(result)?;
        view.remove_issue(&self.issue.id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "details_tests.rs"]
mod tests;
