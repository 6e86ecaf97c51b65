// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use sb_core::{BoardView, User};

use crate::board::BoardFile;
use crate::cli::{FilterArgs, OutputFormat};
use crate::config::Settings;
use crate::display::format_assignee_line;
use crate::error::Result;

use super::{build_filter, open_backend, scope_sprint};

#[derive(Serialize)]
struct AssigneeJson<'a> {
    #[serde(flatten)]
    user: &'a User,
    selected: bool,
}

pub fn run(settings: &Settings, filter: &FilterArgs, output: OutputFormat) -> Result<()> {
    let backend = open_backend(settings)?;
    let out = render(backend.board(), filter, output)?;
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}

/// Renders the assignee palette of the scoped sprint, marking selections.
///
/// The palette is derived from the unfiltered sprint list so that selected
/// assignees stay visible even when nothing matches.
pub(crate) fn render(board: &BoardFile, filter: &FilterArgs, output: OutputFormat) -> Result<String> {
    let sprint_id = scope_sprint(board, filter.sprint.as_deref())?;
    let mut view = BoardView::new(board.issues_in(sprint_id.as_deref()));
    view.set_spec(build_filter(filter)?);
    let palette = view.assignees();
    let spec = view.spec();

    match output {
        OutputFormat::Json => {
            let json: Vec<_> = palette
                .iter()
                .map(|user| AssigneeJson {
                    user,
                    selected: spec.is_assignee_selected(&user.id),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&json)?)
        }
        OutputFormat::Ids => Ok(palette
            .iter()
            .map(|u| u.id.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Text => Ok(palette
            .iter()
            .map(|u| format_assignee_line(u, spec.is_assignee_selected(&u.id)))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
#[path = "assignees_tests.rs"]
mod tests;
