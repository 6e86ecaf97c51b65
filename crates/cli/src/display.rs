// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sb_core::{Issue, Sprint, SprintActions, SprintStatus, User};

use crate::colors;

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines.join("\n")
}

/// One-line issue summary: `- [HIGH] (TODO, @Ada) iss-1: Fix login`
pub fn format_issue_line(issue: &Issue, color: bool) -> String {
    let status_display = match &issue.assignee {
        Some(assignee) => format!("{}, @{}", issue.status, assignee.display_name()),
        None => issue.status.to_string(),
    };
    format!(
        "- [{}] ({}) {}: {}",
        colors::priority(issue.priority, color),
        status_display,
        issue.id,
        issue.title
    )
}

/// Full issue view for `sb issue show`.
pub fn format_issue_details(issue: &Issue, can_change: bool, color: bool) -> String {
    let mut output = Vec::new();

    output.push(format!("[{}] {}", issue.id, issue.title));
    output.push(format!("Status: {}", issue.status.name()));
    output.push(format!(
        "Priority: {}",
        colors::priority(issue.priority, color)
    ));
    output.push(format!("Assignee: {}", user_label(issue.assignee.as_ref())));
    output.push(format!("Reporter: {}", user_label(issue.reporter.as_ref())));
    if let Some(sprint) = &issue.sprint_id {
        output.push(format!("Sprint: {}", sprint));
    }

    output.push(String::new());
    output.push(colors::header("Description:", color));
    let description = issue
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("--");
    for line in wrap_text(description, WRAP_WIDTH).lines() {
        output.push(format!("    {}", line));
    }

    if !can_change {
        output.push(String::new());
        output.push(colors::context(
            "(read-only: only the reporter or an admin can edit)",
            color,
        ));
    }

    output.join("\n")
}

fn user_label(user: Option<&User>) -> String {
    match user {
        Some(u) => format!("{} ({})", u.display_name(), u.id),
        None => "Unassigned".to_string(),
    }
}

/// Assignee palette entry: `[A] Ada (u-ada)`, with `*` when selected.
pub fn format_assignee_line(user: &User, selected: bool) -> String {
    let marker = if selected { "*" } else { " " };
    format!("{}[{}] {} ({})", marker, user.initial(), user.display_name(), user.id)
}

/// Sprint selector entry.
pub fn format_sprint_line(sprint: &Sprint, current: bool, color: bool) -> String {
    let marker = if current { "*" } else { " " };
    format!(
        "{} {}: {} [{}]",
        marker,
        sprint.id,
        sprint.label(),
        colors::sprint_status(sprint.status, color)
    )
}

/// Sprint state block for `sb sprint show` and after transitions.
pub fn format_sprint_state(
    sprint: &Sprint,
    status: SprintStatus,
    actions: &SprintActions,
    color: bool,
) -> String {
    let mut output = vec![
        sprint.label(),
        format!("Status: {}", colors::sprint_status(status, color)),
    ];
    if let Some(annotation) = &actions.status_annotation {
        output.push(colors::context(annotation, color));
    }
    let mut offered = Vec::new();
    if actions.can_start {
        offered.push("start");
    }
    if actions.can_end {
        offered.push("end");
    }
    if offered.is_empty() {
        output.push("Actions: none".to_string());
    } else {
        output.push(format!("Actions: {}", offered.join(", ")));
    }
    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
