// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::Serialize;

use sb_core::{Sprint, SprintActions, SprintManager, SprintStatus};

use crate::board::{BoardFile, FileBackend};
use crate::cli::{OutputFormat, SprintCommand};
use crate::colors;
use crate::config::Settings;
use crate::display::{format_sprint_line, format_sprint_state};
use crate::error::Result;

use super::{open_backend, parse_now, require_sprint};

/// JSON output structure for `sprint show`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SprintStateJson<'a> {
    sprint: &'a Sprint,
    status: SprintStatus,
    actions: SprintActions,
}

pub fn run(settings: &Settings, command: SprintCommand) -> Result<()> {
    let mut backend = open_backend(settings)?;
    let color = colors::should_colorize();
    let out = match command {
        SprintCommand::List { output } => render_list(backend.board(), output, color)?,
        SprintCommand::Show { id, now, output } => {
            let now = parse_now(now.as_deref())?;
            render_show(backend.board(), id.as_deref(), now, output, color)?
        }
        SprintCommand::Start { id, now } => {
            let now = parse_now(now.as_deref())?;
            start(&mut backend, id.as_deref(), now)?
        }
        SprintCommand::End { id } => end(&mut backend, id.as_deref())?,
    };
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}

/// Opens a manager on the requested (or default) sprint.
fn manager_for(board: &BoardFile, id: Option<&str>) -> Result<SprintManager> {
    let id = require_sprint(board, id)?;
    SprintManager::with_selected(board.sprints.clone(), &id)
        .ok_or_else(|| sb_core::Error::SprintNotFound(id).into())
}

pub(crate) fn render_list(board: &BoardFile, output: OutputFormat, color: bool) -> Result<String> {
    let current = board.default_sprint().map(|s| s.id.as_str());
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&board.sprints)?),
        OutputFormat::Ids => Ok(board
            .sprints
            .iter()
            .map(|s| s.id.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Text => {
            if board.sprints.is_empty() {
                return Ok(colors::context("No sprints.", color));
            }
            Ok(board
                .sprints
                .iter()
                .map(|s| format_sprint_line(s, Some(s.id.as_str()) == current, color))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

pub(crate) fn render_show(
    board: &BoardFile,
    id: Option<&str>,
    now: DateTime<Utc>,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let manager = manager_for(board, id)?;
    let actions = manager.actions(now);
    match output {
        OutputFormat::Json => {
            let json = SprintStateJson {
                sprint: manager.current(),
                status: manager.status(),
                actions,
            };
            Ok(serde_json::to_string_pretty(&json)?)
        }
        OutputFormat::Ids => Ok(manager.current().id.clone()),
        OutputFormat::Text => Ok(format_sprint_state(
            manager.current(),
            manager.status(),
            &actions,
            color,
        )),
    }
}

pub(crate) fn start(backend: &mut FileBackend, id: Option<&str>, now: DateTime<Utc>) -> Result<String> {
    let mut manager = manager_for(backend.board(), id)?;
    let status = manager.start(backend, now)?;
    Ok(format!("Started {} ({})", manager.current().id, status))
}

pub(crate) fn end(backend: &mut FileBackend, id: Option<&str>) -> Result<String> {
    let mut manager = manager_for(backend.board(), id)?;
    let status = manager.end(backend)?;
    Ok(format!("Ended {} ({})", manager.current().id, status))
}

#[cfg(test)]
#[path = "sprint_tests.rs"]
mod tests;
