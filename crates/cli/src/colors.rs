// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use sb_core::{Priority, SprintStatus};

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    pub const LOW: u8 = 71;
    pub const MEDIUM: u8 = 179;
    pub const HIGH: u8 = 208;
    pub const URGENT: u8 = 196;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", fg256(code), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply header color (section titles) to text.
pub fn header(text: &str, enabled: bool) -> String {
    paint(codes::HEADER, text, enabled)
}

/// Apply context color (hints, annotations) to text.
pub fn context(text: &str, enabled: bool) -> String {
    paint(codes::CONTEXT, text, enabled)
}

pub fn priority_code(priority: Priority) -> u8 {
    match priority {
        Priority::Low => codes::LOW,
        Priority::Medium => codes::MEDIUM,
        Priority::High => codes::HIGH,
        Priority::Urgent => codes::URGENT,
    }
}

/// Priority label, colored by urgency.
pub fn priority(priority: Priority, enabled: bool) -> String {
    paint(priority_code(priority), priority.as_str(), enabled)
}

/// Sprint status label; finished sprints are dimmed.
pub fn sprint_status(status: SprintStatus, enabled: bool) -> String {
    match status {
        SprintStatus::Completed => context(status.as_str(), enabled),
        SprintStatus::Active => header(status.as_str(), enabled),
        SprintStatus::Planned => status.as_str().to_string(),
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
