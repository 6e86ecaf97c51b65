// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use sb_core::{
    BoardView, Issue, IssueDetails, IssueDraft, IssueStatus, OrgRole, Priority, Viewer,
};

use crate::board::FileBackend;
use crate::cli::{IssueCommand, OutputFormat};
use crate::colors;
use crate::config::Settings;
use crate::display::{format_issue_details, format_issue_line};
use crate::error::{Error, Result};

use super::{open_backend, scope_sprint};

/// Flags of `sb issue new`.
#[derive(Debug, Clone, Default)]
pub(crate) struct NewOptions {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub status: Option<String>,
    pub sprint: Option<String>,
    pub project: Option<String>,
}

/// JSON output structure for `issue show`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssueDetailsJson<'a> {
    #[serde(flatten)]
    issue: &'a Issue,
    can_change: bool,
    project_path: String,
}

pub fn run(settings: &Settings, command: IssueCommand) -> Result<()> {
    let mut backend = open_backend(settings)?;
    let color = colors::should_colorize();
    let out = match command {
        IssueCommand::New {
            title,
            description,
            priority,
            assignee,
            status,
            sprint,
            project,
        } => {
            let options = NewOptions {
                title,
                description,
                priority,
                assignee,
                status,
                sprint,
                project,
            };
            let issue = create(&mut backend, settings, options)?;
            format!("Created {}: {}", issue.id, issue.title)
        }
        IssueCommand::Show { id, output } => show(&backend, settings, &id, output, color)?,
        IssueCommand::Edit {
            id,
            status,
            priority,
        } => {
            let issue = edit(&mut backend, &id, status.as_deref(), priority.as_deref())?;
            format_issue_line(&issue, color)
        }
        IssueCommand::Delete { id } => {
            delete(&mut backend, &id)?;
            format!("Deleted {}", id)
        }
    };
    println!("{}", out);
    Ok(())
}

fn find_issue(backend: &FileBackend, id: &str) -> Result<Issue> {
    backend
        .board()
        .issues
        .iter()
        .find(|i| i.id == id)
        .cloned()
        .ok_or_else(|| sb_core::Error::IssueNotFound(id.to_string()).into())
}

/// The acting viewer, or an anonymous one that may not change anything.
fn viewer_or_anonymous(backend: &FileBackend, settings: &Settings) -> Result<Viewer> {
    match settings.user {
        Some(_) => backend.viewer(),
        None => Ok(Viewer::new("", OrgRole::Member)),
    }
}

pub(crate) fn create(
    backend: &mut FileBackend,
    settings: &Settings,
    options: NewOptions,
) -> Result<Issue> {
    settings.require_user()?;
    let board = backend.board();
    let sprint_id = scope_sprint(board, options.sprint.as_deref())?;
    let sprint_project = sprint_id
        .as_deref()
        .and_then(|id| board.sprints.iter().find(|s| s.id == id))
        .and_then(|s| s.project_id.clone());
    let project = options
        .project
        .or(sprint_project)
        .ok_or(Error::ProjectRequired)?;
    let status = match options.status.as_deref() {
        Some(s) => s.parse::<IssueStatus>()?,
        None => IssueStatus::default(),
    };
    let mut view = BoardView::new(board.issues_in(sprint_id.as_deref()));

    let mut draft = IssueDraft::new(project, sprint_id, status);
    draft.open(&*backend, settings.org.as_deref().unwrap_or(""))?;
    if let Some(assignee) = options.assignee.as_deref() {
        if !draft.users().is_empty() && !draft.users().iter().any(|u| u.id == assignee) {
            return Err(sb_core::Error::UserNotFound(assignee.to_string()).into());
        }
    }

    draft.form.title = options.title;
    draft.form.description = options.description.unwrap_or_default();
    if let Some(p) = options.priority.as_deref() {
        draft.form.priority = p.parse::<Priority>()?;
    }
    draft.form.assignee_id = options.assignee;

    Ok(draft.submit(backend, &mut view)?)
}

pub(crate) fn show(
    backend: &FileBackend,
    settings: &Settings,
    id: &str,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let viewer = viewer_or_anonymous(backend, settings)?;
    let details = IssueDetails::new(find_issue(backend, id)?, &viewer);
    match output {
        OutputFormat::Json => {
            let json = IssueDetailsJson {
                issue: details.issue(),
                can_change: details.can_change(),
                project_path: details.project_path(),
            };
            Ok(serde_json::to_string_pretty(&json)?)
        }
        OutputFormat::Ids => Ok(details.issue().id.clone()),
        OutputFormat::Text => {
            let mut out = format_issue_details(details.issue(), details.can_change(), color);
            out.push_str("\n\n");
            out.push_str(&colors::context(
                &format!("Board: {}", details.project_path()),
                color,
            ));
            Ok(out)
        }
    }
}

pub(crate) fn edit(
    backend: &mut FileBackend,
    id: &str,
    status: Option<&str>,
    priority: Option<&str>,
) -> Result<Issue> {
    if status.is_none() && priority.is_none() {
        return Err(Error::NothingToEdit);
    }
    let status = status.map(str::parse::<IssueStatus>).transpose()?;
    let priority = priority.map(str::parse::<Priority>).transpose()?;

    let viewer = backend.viewer()?;
    let mut details = IssueDetails::new(find_issue(backend, id)?, &viewer);
    let mut view = BoardView::new(backend.board().issues.clone());

    if let Some(status) = status {
        details.change_status(backend, &mut view, status)?;
    }
    if let Some(priority) = priority {
        details.change_priority(backend, &mut view, priority)?;
    }
    Ok(details.issue().clone())
}

pub(crate) fn delete(backend: &mut FileBackend, id: &str) -> Result<()> {
    let viewer = backend.viewer()?;
    let mut details = IssueDetails::new(find_issue(backend, id)?, &viewer);
    let mut view = BoardView::new(backend.board().issues.clone());
    details.delete(backend, &mut view)?;
    Ok(())
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
