// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON board file acting as the backend.
//!
//! The board file mirrors what the backend would return: users, their
//! organization roles, sprints and issues. [`FileBackend`] implements
//! [`Backend`] on top of it and writes every accepted mutation back to disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use sb_core::{
    Backend, Issue, IssueUpdate, NewIssue, OrgRole, Sprint, SprintStatus, SprintStatusUpdate,
    User, Viewer,
};

use crate::error::{Error, Result};

/// Organization membership of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: String,
    #[serde(default)]
    pub role: OrgRole,
}

/// On-disk board contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl BoardFile {
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn role_of(&self, user_id: &str) -> OrgRole {
        self.members
            .iter()
            .find(|m| m.user_id == user_id)
            .map(|m| m.role)
            .unwrap_or_default()
    }

    /// Issues of one sprint, or all issues when `sprint_id` is `None`.
    pub fn issues_in(&self, sprint_id: Option<&str>) -> Vec<Issue> {
        match sprint_id {
            Some(id) => self
                .issues
                .iter()
                .filter(|i| i.sprint_id.as_deref() == Some(id))
                .cloned()
                .collect(),
            None => self.issues.clone(),
        }
    }

    /// The sprint a board opens on: the active one, else the first planned,
    /// else the first listed.
    pub fn default_sprint(&self) -> Option<&Sprint> {
        self.sprints
            .iter()
            .find(|s| s.status == SprintStatus::Active)
            .or_else(|| {
                self.sprints
                    .iter()
                    .find(|s| s.status == SprintStatus::Planned)
            })
            .or_else(|| self.sprints.first())
    }

    fn next_issue_id(&self) -> String {
        let mut n = self.issues.len() + 1;
        loop {
            let id = format!("iss-{}", n);
            if !self.issues.iter().any(|i| i.id == id) {
                return id;
            }
            n += 1;
        }
    }
}

/// A [`Backend`] persisting to a board file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    board: BoardFile,
    actor: Option<String>,
}

impl FileBackend {
    /// Open the board at `path`. Created issues are reported by `actor`.
    pub fn open(path: &Path, actor: Option<String>) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::BoardNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let board: BoardFile = serde_json::from_str(&content)?;
        tracing::debug!(
            board = %path.display(),
            issues = board.issues.len(),
            sprints = board.sprints.len(),
            "opened board"
        );
        Ok(FileBackend {
            path: path.to_path_buf(),
            board,
            actor,
        })
    }

    pub fn board(&self) -> &BoardFile {
        &self.board
    }

    /// Authentication context for the acting user.
    pub fn viewer(&self) -> Result<Viewer> {
        let user_id = self.actor.as_deref().ok_or(Error::UserRequired)?;
        let user = self
            .board
            .user(user_id)
            .ok_or_else(|| sb_core::Error::UserNotFound(user_id.to_string()))?;
        Ok(Viewer::new(user.auth_identity(), self.board.role_of(user_id)))
    }

    /// Write the board back, replacing the file atomically.
    fn save(&self) -> sb_core::Result<()> {
        let content = serde_json::to_string_pretty(&self.board)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn lookup_user(&self, id: &str) -> sb_core::Result<User> {
        self.board
            .user(id)
            .cloned()
            .ok_or_else(|| sb_core::Error::UserNotFound(id.to_string()))
    }
}

impl Backend for FileBackend {
    fn create_issue(&mut self, project_id: &str, issue: &NewIssue) -> sb_core::Result<Issue> {
        issue.validate()?;
        let actor = self
            .actor
            .clone()
            .ok_or_else(|| sb_core::Error::Backend("no acting user".to_string()))?;
        let reporter = self.lookup_user(&actor)?;
        let assignee = match &issue.assignee_id {
            Some(id) => Some(self.lookup_user(id)?),
            None => None,
        };

        let mut created = Issue::new(self.board.next_issue_id(), issue.title.clone(), project_id);
        if !issue.description.is_empty() {
            created.description = Some(issue.description.clone());
        }
        created.status = issue.status;
        created.priority = issue.priority;
        created.assignee = assignee;
        created.reporter = Some(reporter);
        created.sprint_id = issue.sprint_id.clone();

        self.board.issues.push(created.clone());
        self.save()?;
        Ok(created)
    }

    fn update_issue(&mut self, issue_id: &str, update: &IssueUpdate) -> sb_core::Result<Issue> {
        let issue = self
            .board
            .issues
            .iter_mut()
            .find(|i| i.id == issue_id)
            .ok_or_else(|| sb_core::Error::IssueNotFound(issue_id.to_string()))?;
        issue.status = update.status;
        issue.priority = update.priority;
        let updated = issue.clone();
        self.save()?;
        Ok(updated)
    }

    fn delete_issue(&mut self, issue_id: &str) -> sb_core::Result<()> {
        let before = self.board.issues.len();
        self.board.issues.retain(|i| i.id != issue_id);
        if self.board.issues.len() == before {
            return Err(sb_core::Error::IssueNotFound(issue_id.to_string()));
        }
        self.save()
    }

    fn update_sprint_status(
        &mut self,
        sprint_id: &str,
        status: SprintStatus,
    ) -> sb_core::Result<SprintStatusUpdate> {
        let sprint = self
            .board
            .sprints
            .iter_mut()
            .find(|s| s.id == sprint_id)
            .ok_or_else(|| sb_core::Error::SprintNotFound(sprint_id.to_string()))?;
        sprint.status.check_transition(status)?;
        sprint.status = status;
        let sprint = sprint.clone();
        self.save()?;
        Ok(SprintStatusUpdate {
            success: true,
            sprint,
        })
    }

    fn organization_users(&self, org_id: &str) -> sb_core::Result<Vec<User>> {
        if let Some(org) = &self.board.organization {
            if org != org_id {
                return Err(sb_core::Error::Backend(format!(
                    "unknown organization: {}",
                    org_id
                )));
            }
        }
        if self.board.members.is_empty() {
            return Ok(self.board.users.clone());
        }
        Ok(self
            .board
            .users
            .iter()
            .filter(|u| self.board.members.iter().any(|m| m.user_id == u.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
