// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the mdjira CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] mdj_core::Error),

    #[error("no config file found at {0}\n  hint: create it with endpoint, user, token and project, or pass --config")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("sub-task '{summary}' sits directly under the epic\n  hint: add a '## story' heading above it; jira only accepts sub-tasks under stories")]
    SubtaskUnderEpic { summary: String },

    #[error("jira returned {status}: {body}")]
    Tracker { status: u16, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for mdjira operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for mdj_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Core(inner) => inner,
            other => mdj_core::Error::Tracker(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
