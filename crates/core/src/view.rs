// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The board's derived issue view.
//!
//! [`BoardView`] owns the issue list and the filter selection. Every mutation
//! event invalidates the derived view; [`BoardView::visible`] recomputes it on
//! demand and memoizes the result keyed on (list revision, filter spec).

use tracing::debug;

use crate::filter::{distinct_assignees, filter_positions, FilterSpec};
use crate::issue::{Issue, Priority};
use crate::user::User;

#[derive(Debug, Clone)]
struct Cached {
    revision: u64,
    spec: FilterSpec,
    positions: Vec<usize>,
}

/// Issue list plus filter selection, with a memoized filtered view.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    issues: Vec<Issue>,
    spec: FilterSpec,
    revision: u64,
    cache: Option<Cached>,
}

impl BoardView {
    pub fn new(issues: Vec<Issue>) -> Self {
        BoardView {
            issues,
            ..Default::default()
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the whole list, as after a refetch.
    pub fn set_issues(&mut self, issues: Vec<Issue>) {
        self.issues = issues;
        self.bump();
    }

    /// Replaces the issue with the same id, or appends it.
    pub fn upsert_issue(&mut self, issue: Issue) {
        match self.issues.iter_mut().find(|i| i.id == issue.id) {
            Some(existing) => *existing = issue,
            None => self.issues.push(issue),
        }
        self.bump();
    }

    /// Removes an issue. Returns false if no issue had that id.
    pub fn remove_issue(&mut self, id: &str) -> bool {
        let before = self.issues.len();
        self.issues.retain(|i| i.id != id);
        let removed = self.issues.len() != before;
        if removed {
            self.bump();
        }
        removed
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.spec.search_term = term.into();
    }

    pub fn toggle_assignee(&mut self, id: &str) {
        self.spec.toggle_assignee(id);
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.spec.selected_priority = priority;
    }

    pub fn set_spec(&mut self, spec: FilterSpec) {
        self.spec = spec;
    }

    pub fn clear_filters(&mut self) {
        self.spec.clear();
    }

    /// Issues passing the current filter, in list order.
    pub fn visible(&mut self) -> Vec<&Issue> {
        let fresh = self
            .cache
            .as_ref()
            .is_some_and(|c| c.revision == self.revision && c.spec == self.spec);
        if !fresh {
            let positions = filter_positions(&self.issues, &self.spec);
            debug!(
                revision = self.revision,
                total = self.issues.len(),
                visible = positions.len(),
                "recomputed board view"
            );
            self.cache = Some(Cached {
                revision: self.revision,
                spec: self.spec.clone(),
                positions,
            });
        }
        match &self.cache {
            Some(cached) => cached.positions.iter().map(|&i| &self.issues[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Assignee palette for the filter bar.
    pub fn assignees(&self) -> Vec<User> {
        distinct_assignees(&self.issues)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
