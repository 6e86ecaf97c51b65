// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use sb_core::{Backend, OrgRole, User};

use crate::board::FileBackend;
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::error::Result;

use super::open_backend;

#[derive(Serialize)]
struct UserJson<'a> {
    #[serde(flatten)]
    user: &'a User,
    role: OrgRole,
}

pub fn run(settings: &Settings, output: OutputFormat) -> Result<()> {
    let backend = open_backend(settings)?;
    let out = render(&backend, settings.require_org()?, output)?;
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}

/// Lists the users assignable within `org`.
pub(crate) fn render(backend: &FileBackend, org: &str, output: OutputFormat) -> Result<String> {
    let users = backend.organization_users(org)?;
    let board = backend.board();
    match output {
        OutputFormat::Json => {
            let json: Vec<_> = users
                .iter()
                .map(|user| UserJson {
                    user,
                    role: board.role_of(&user.id),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&json)?)
        }
        OutputFormat::Ids => Ok(users
            .iter()
            .map(|u| u.id.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Text => Ok(users
            .iter()
            .map(|u| {
                format!(
                    "{} ({}) {}",
                    u.display_name(),
                    u.id,
                    board.role_of(&u.id)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
