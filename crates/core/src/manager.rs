// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint selection and lifecycle requests.
//!
//! [`SprintManager`] keeps the selected sprint of a project and tracks its
//! status through [`Mutation`], so the status it reports is always the one
//! the backend last confirmed.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::action::{Backend, SprintStatusUpdate};
use crate::error::{Error, Result};
use crate::mutation::Mutation;
use crate::resolver::{can_end, resolve_with_status, SprintActions};
use crate::sprint::{find_sprint, Sprint, SprintStatus};

/// A pending sprint status change, to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintTransition {
    pub sprint_id: String,
    pub target: SprintStatus,
}

#[derive(Debug, Clone)]
pub struct SprintManager {
    sprints: Vec<Sprint>,
    current: Sprint,
    status: Mutation<SprintStatus>,
}

impl SprintManager {
    pub fn new(sprints: Vec<Sprint>, current: Sprint) -> Self {
        let status = Mutation::new("sprint status update", current.status);
        SprintManager {
            sprints,
            current,
            status,
        }
    }

    /// Starts with the sprint `id` selected. Returns `None` if it is unknown.
    pub fn with_selected(sprints: Vec<Sprint>, id: &str) -> Option<Self> {
        let current = find_sprint(&sprints, id)?.clone();
        Some(Self::new(sprints, current))
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    /// The selected sprint, with its status as last confirmed.
    pub fn current(&self) -> &Sprint {
        &self.current
    }

    pub fn status(&self) -> SprintStatus {
        *self.status.confirmed()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_pending()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.status.error()
    }

    /// Selects a sprint by id. Unknown ids and the current id leave the
    /// selection unchanged; unknown ids are logged.
    pub fn select(&mut self, id: &str) -> bool {
        if id == self.current.id {
            return false;
        }
        match find_sprint(&self.sprints, id) {
            Some(sprint) => {
                self.current = sprint.clone();
                self.status.reset(sprint.status);
                true
            }
            None => {
                warn!(sprint_id = id, "ignoring selection of unknown sprint");
                false
            }
        }
    }

    pub fn actions(&self, now: DateTime<Utc>) -> SprintActions {
        resolve_with_status(&self.current, self.status(), now)
    }

    /// Requests PLANNED -> ACTIVE, if the sprint may be started at `now`.
    pub fn request_start(&mut self, now: DateTime<Utc>) -> Result<SprintTransition> {
        if !self.actions(now).can_start {
            return Err(Error::TransitionNotOffered {
                sprint: self.current.id.clone(),
                action: "start",
                reason: "only planned sprints can be started, during their own dates",
            });
        }
        self.request(SprintStatus::Active)
    }

    /// Requests ACTIVE -> COMPLETED.
    pub fn request_end(&mut self) -> Result<SprintTransition> {
        if !can_end(self.status()) {
            return Err(Error::TransitionNotOffered {
                sprint: self.current.id.clone(),
                action: "end",
                reason: "only active sprints can be ended",
            });
        }
        self.request(SprintStatus::Completed)
    }

    fn request(&mut self, target: SprintStatus) -> Result<SprintTransition> {
        self.status.request(target)?;
        Ok(SprintTransition {
            sprint_id: self.current.id.clone(),
            target,
        })
    }

    /// Applies the backend's answer to the pending request.
    ///
    /// On success the returned status is adopted as-is, whatever was
    /// requested. On failure the previous status stays.
    pub fn apply_update(&mut self, result: Result<SprintStatusUpdate>) -> Result<SprintStatus> {
        match result {
            Ok(update) if update.success => {
                let status = update.sprint.status;
                self.status.settle(status);
                self.current.status = status;
                if let Some(s) = self.sprints.iter_mut().find(|s| s.id == update.sprint.id) {
                    s.status = status;
                }
                info!(sprint_id = %self.current.id, %status, "sprint status updated");
                Ok(status)
            }
            Ok(update) => {
                let message = format!("backend rejected status change for {}", update.sprint.id);
                warn!("{}", message);
                self.status.fail(message.clone());
                Err(Error::Backend(message))
            }
            Err(e) => {
                warn!(sprint_id = %self.current.id, error = %e, "sprint status update failed");
                self.status.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// Starts the sprint through `backend`.
    pub fn start(&mut self, backend: &mut dyn Backend, now: DateTime<Utc>) -> Result<SprintStatus> {
        let transition = self.request_start(now)?;
        let result = backend.update_sprint_status(&transition.sprint_id, transition.target);
        self.apply_update(result)
    }

    /// Ends the sprint through `backend`.
    pub fn end(&mut self, backend: &mut dyn Backend) -> Result<SprintStatus> {
        let transition = self.request_end()?;
        let result = backend.update_sprint_status(&transition.sprint_id, transition.target);
        self.apply_update(result)
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
