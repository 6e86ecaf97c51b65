// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side issue filtering.
//!
//! A [`FilterSpec`] combines three criteria which must all hold:
//!
//! - the title contains the search term (case-insensitive)
//! - the assignee is one of the selected users, if any are selected
//! - the priority equals the selected priority, if one is selected
//!
//! Filtering is a pure projection: the input list is never modified and the
//! output keeps input order.

use std::collections::HashSet;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::issue::{Issue, Priority};
use crate::user::User;

/// The filter selection of a board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive substring to look for in titles.
    #[serde(default)]
    pub search_term: String,
    /// Selected assignee identifiers, in selection order, without duplicates.
    #[serde(default)]
    pub selected_assignees: Vec<String>,
    /// Selected priority, if any.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub selected_priority: Option<Priority>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_assignee(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.selected_assignees.contains(&id) {
            self.selected_assignees.push(id);
        }
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.selected_priority = Some(priority);
        self
    }

    /// Adds the assignee if absent, removes it if present.
    pub fn toggle_assignee(&mut self, id: &str) {
        if let Some(pos) = self.selected_assignees.iter().position(|a| a == id) {
            self.selected_assignees.remove(pos);
        } else {
            self.selected_assignees.push(id.to_string());
        }
    }

    pub fn is_assignee_selected(&self, id: &str) -> bool {
        self.selected_assignees.iter().any(|a| a == id)
    }

    /// Resets all criteria.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_assignees.clear();
        self.selected_priority = None;
    }

    /// Returns true if any criterion is active.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !self.search_term.is_empty()
            || !self.selected_assignees.is_empty()
            || self.selected_priority.is_some()
    }

    /// Check if an issue matches this filter.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.matcher().matches(issue)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            needle: self.search_term.to_lowercase(),
            spec: self,
        }
    }
}

/// Reads a selected priority where `""` means none is selected.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s.parse().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// A spec with its search term folded once, for matching many issues.
struct Matcher<'a> {
    needle: String,
    spec: &'a FilterSpec,
}

impl Matcher<'_> {
    fn matches(&self, issue: &Issue) -> bool {
        // Check title
        if !issue.title.to_lowercase().contains(&self.needle) {
            return false;
        }

        // Check assignee
        if !self.spec.selected_assignees.is_empty() {
            let selected = issue
                .assignee_id()
                .is_some_and(|id| self.spec.is_assignee_selected(id));
            if !selected {
                return false;
            }
        }

        // Check priority
        match self.spec.selected_priority {
            Some(priority) => issue.priority == priority,
            None => true,
        }
    }
}

/// Returns the issues matching `spec`, in input order.
pub fn filter_issues<'a>(issues: &'a [Issue], spec: &FilterSpec) -> Vec<&'a Issue> {
    let matcher = spec.matcher();
    issues.iter().filter(|issue| matcher.matches(issue)).collect()
}

/// Like [`filter_issues`] but yields positions into `issues`.
pub fn filter_positions(issues: &[Issue], spec: &FilterSpec) -> Vec<usize> {
    let matcher = spec.matcher();
    issues
        .iter()
        .enumerate()
        .filter(|(_, issue)| matcher.matches(issue))
        .map(|(i, _)| i)
        .collect()
}

/// Distinct assignees of `issues` in order of first appearance.
///
/// Issues without an assignee, or whose assignee has no identifier, are
/// skipped.
pub fn distinct_assignees(issues: &[Issue]) -> Vec<User> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut assignees = Vec::new();
    for user in issues.iter().filter_map(|issue| issue.assignee.as_ref()) {
        if let Some(id) = user.identifier() {
            if seen.insert(id) {
                assignees.push(user.clone());
            }
        }
    }
    assignees
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
