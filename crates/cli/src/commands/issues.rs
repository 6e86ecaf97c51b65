// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use sb_core::{BoardView, FilterSpec, Issue};

use crate::board::BoardFile;
use crate::cli::{FilterArgs, OutputFormat};
use crate::colors;
use crate::display::format_issue_line;
use crate::error::Result;

use super::{build_filter, open_backend, scope_sprint};
use crate::config::Settings;

/// JSON output structure for the issues command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssuesOutputJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sprint_id: Option<String>,
    filters: &'a FilterSpec,
    issues: Vec<&'a Issue>,
}

pub fn run(settings: &Settings, filter: &FilterArgs, output: OutputFormat) -> Result<()> {
    let backend = open_backend(settings)?;
    let out = render(backend.board(), filter, output, colors::should_colorize())?;
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}

/// Renders the filtered issue list of the scoped sprint.
pub(crate) fn render(
    board: &BoardFile,
    filter: &FilterArgs,
    output: OutputFormat,
    color: bool,
) -> Result<String> {
    let sprint_id = scope_sprint(board, filter.sprint.as_deref())?;
    let mut view = BoardView::new(board.issues_in(sprint_id.as_deref()));
    view.set_spec(build_filter(filter)?);

    let spec = view.spec().clone();
    let visible = view.visible();

    match output {
        OutputFormat::Json => {
            let json = IssuesOutputJson {
                sprint_id,
                filters: &spec,
                issues: visible,
            };
            Ok(serde_json::to_string_pretty(&json)?)
        }
        OutputFormat::Ids => Ok(visible
            .iter()
            .map(|i| i.id.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            if let Some(sprint) = sprint_id
                .as_deref()
                .and_then(|id| board.sprints.iter().find(|s| s.id == id))
            {
                lines.push(colors::header(&sprint.label(), color));
            }
            if visible.is_empty() {
                let message = if spec.is_applied() {
                    "No issues match the current filters."
                } else {
                    "No issues in this sprint."
                };
                lines.push(colors::context(message, color));
            }
            for issue in visible {
                lines.push(format_issue_line(issue, color));
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
