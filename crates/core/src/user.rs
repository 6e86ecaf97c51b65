// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Users, organization roles, and the edit permission policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person that can report or be assigned issues.
///
/// Users are referenced by issues, never owned by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier. Empty means "no identifier".
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Identifier issued by the authentication provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_id: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: Some(name.into()),
            image_url: None,
            auth_id: None,
        }
    }

    /// Returns the identifier, or `None` when it is empty.
    pub fn identifier(&self) -> Option<&str> {
        if self.id.is_empty() {
            None
        } else {
            Some(&self.id)
        }
    }

    /// Name to show, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Avatar fallback letter.
    pub fn initial(&self) -> char {
        self.name
            .as_deref()
            .and_then(|n| n.chars().next())
            .unwrap_or('?')
    }

    /// The id the authentication context knows this user by.
    pub fn auth_identity(&self) -> &str {
        self.auth_id.as_deref().unwrap_or(&self.id)
    }
}

/// Role of a user within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    Admin,
    #[default]
    Member,
}

impl OrgRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgRole::Admin => "admin",
            OrgRole::Member => "member",
        }
    }
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only authentication context: who is acting and with which role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: String,
    pub role: OrgRole,
}

impl Viewer {
    pub fn new(user_id: impl Into<String>, role: OrgRole) -> Self {
        Viewer {
            user_id: user_id.into(),
            role,
        }
    }

    /// Edits and deletion are allowed for the issue's reporter or an
    /// organization admin.
    pub fn can_modify(&self, reporter: Option<&User>) -> bool {
        if self.role == OrgRole::Admin {
            return true;
        }
        reporter.is_some_and(|r| !self.user_id.is_empty() && r.auth_identity() == self.user_id)
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
