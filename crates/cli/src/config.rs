// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.sprintboard.toml`, found by walking up from
//! the current directory, and includes:
//! - `board`: Path to the board JSON file (relative to the config file)
//! - `user`: Id of the acting user
//! - `org`: Organization id used to list assignable users

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".sprintboard.toml";
const DEFAULT_BOARD_FILE: &str = "board.json";

/// Project configuration stored in `.sprintboard.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Board file path (relative to the config file's directory or absolute).
    #[serde(default)]
    pub board: Option<String>,
    /// Acting user id.
    #[serde(default)]
    pub user: Option<String>,
    /// Organization id.
    #[serde(default)]
    pub org: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Find the nearest `.sprintboard.toml` at or above `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Settings after merging the config file with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub board_path: PathBuf,
    pub user: Option<String>,
    pub org: Option<String>,
}

impl Settings {
    /// Resolve settings for a command run from `cwd`.
    ///
    /// Flags win over the config file; without either, the board defaults
    /// to `board.json` next to the config file (or in `cwd`).
    pub fn resolve(
        cwd: &Path,
        board_flag: Option<PathBuf>,
        user_flag: Option<String>,
        org_flag: Option<String>,
    ) -> Result<Self> {
        let (config, base) = match find_config(cwd) {
            Some(path) => {
                let config = Config::load(&path)?;
                let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf());
                tracing::debug!(config = %path.display(), "loaded config");
                (config, base)
            }
            None => (Config::default(), cwd.to_path_buf()),
        };

        let board_path = match board_flag {
            Some(path) if path.is_absolute() => path,
            Some(path) => cwd.join(path),
            None => base.join(config.board.as_deref().unwrap_or(DEFAULT_BOARD_FILE)),
        };

        Ok(Settings {
            board_path,
            user: user_flag.or(config.user),
            org: org_flag.or(config.org),
        })
    }

    pub fn require_user(&self) -> Result<&str> {
        self.user.as_deref().ok_or(Error::UserRequired)
    }

    pub fn require_org(&self) -> Result<&str> {
        self.org.as_deref().ok_or(Error::OrgRequired)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
