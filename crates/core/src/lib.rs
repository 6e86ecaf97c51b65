// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sb-core: Shared library for the sprintboard issue board
//!
//! This crate provides the board's data types and its pure derivations:
//! issue filtering, the assignee palette, and sprint state resolution. It
//! also holds the controllers a host layer drives (board view, sprint
//! manager, issue details, issue draft) and the [`Backend`] trait through
//! which they reach persistence.

pub mod action;
pub mod details;
pub mod draft;
pub mod error;
pub mod filter;
pub mod humanize;
pub mod issue;
pub mod manager;
pub mod mutation;
pub mod resolver;
pub mod sprint;
pub mod user;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{Backend, SprintStatusUpdate};
pub use details::IssueDetails;
pub use draft::{IssueDraft, IssueForm};
pub use error::{Error, Result};
pub use filter::{distinct_assignees, filter_issues, FilterSpec};
pub use issue::{Issue, IssueStatus, IssueUpdate, NewIssue, Priority};
pub use manager::{SprintManager, SprintTransition};
pub use mutation::{InFlight, Mutation, MutationState};
pub use resolver::{resolve_sprint_actions, SprintActions};
pub use sprint::{Sprint, SprintStatus};
pub use user::{OrgRole, User, Viewer};
pub use view::BoardView;
