// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker configuration.
//!
//! Configuration is stored in a TOML file, looked up in this order:
//! `--config <path>`, `$MDJIRA_CONFIG`, then `<config dir>/mdjira/config.toml`.
//!
//! ```toml
//! endpoint = "https://example.atlassian.net"
//! user = "me@example.com"
//! token = "..."            # or set MDJIRA_TOKEN
//! project = "PROJ"
//! epic_link_field = "customfield_10014"   # optional, classic projects
//!
//! [issue_types]             # optional
//! subtask = "Subtask"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use mdj_core::IssueKind;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "mdjira";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Connection and project settings for the Jira instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Jira instance, e.g. `https://example.atlassian.net`.
    pub endpoint: String,
    /// Account used for basic auth (usually an email address).
    pub user: String,
    /// API token. May be left empty and supplied through `MDJIRA_TOKEN`.
    #[serde(default)]
    pub token: String,
    /// Project key new issues are created in.
    pub project: String,
    /// Custom field linking stories to their epic. When unset, stories use `parent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_link_field: Option<String>,
    /// Issue type names as configured in the project.
    #[serde(default)]
    pub issue_types: IssueTypeNames,
}

/// Jira issue type names for each issue kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTypeNames {
    #[serde(default = "default_epic")]
    pub epic: String,
    #[serde(default = "default_story")]
    pub story: String,
    #[serde(default = "default_subtask")]
    pub subtask: String,
}

fn default_epic() -> String {
    "Epic".to_string()
}

fn default_story() -> String {
    "Story".to_string()
}

fn default_subtask() -> String {
    "Sub-task".to_string()
}

impl Default for IssueTypeNames {
    fn default() -> Self {
        IssueTypeNames {
            epic: default_epic(),
            story: default_story(),
            subtask: default_subtask(),
        }
    }
}

impl IssueTypeNames {
    /// Returns the configured type name for `kind`.
    pub fn name_for(&self, kind: IssueKind) -> &str {
        match kind {
            IssueKind::Epic => &self.epic,
            IssueKind::Story => &self.story,
            IssueKind::Subtask => &self.subtask,
        }
    }
}

impl Config {
    /// Resolves the config file location.
    ///
    /// An explicit path wins, then `MDJIRA_CONFIG`, then the user config directory.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = env::config_path() {
            return Ok(path);
        }
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::Config("cannot determine the user config directory".to_string()))
    }

    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, or a
    /// parse error if it is not valid TOML with the required fields.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replaces the token when an override (from `MDJIRA_TOKEN`) is present.
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.token = token;
        }
        self
    }

    /// Checks that the configuration can be used to reach Jira.
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(Error::Config(format!(
                "invalid endpoint '{}': must start with http:// or https://",
                self.endpoint
            )));
        }
        for (name, value) in [
            ("user", &self.user),
            ("token", &self.token),
            ("project", &self.project),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{name} cannot be empty")));
            }
        }
        Ok(())
    }

    /// Endpoint without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
