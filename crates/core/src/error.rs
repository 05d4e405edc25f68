// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for mdj-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur while building or submitting an issue tree.
///
/// Every error aborts the whole operation; no partial tree is ever returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line_number} of field-settings block: '{line}'\n  hint: each line must be 'name = value'")]
    MalformedFieldLine { line: String, line_number: usize },

    #[error("invalid field setting: '{0}'\n  hint: use --field name=value")]
    MalformedFieldArg(String),

    #[error("referenced ticket not found: {key} ({reason})")]
    TicketNotFound { key: String, reason: String },

    #[error("{}", multiple_roots_message(.first, .second))]
    MultipleRoots { first: String, second: String },

    #[error("cannot read {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tracker error: {0}")]
    Tracker(String),
}

fn multiple_roots_message(first: &str, second: &str) -> String {
    if first.is_empty() {
        format!(
            "epic '{second}' comes after a story or subtask\n  hint: a level-1 heading must come before any story or subtask"
        )
    } else {
        format!(
            "epic '{second}' must be the first issue heading (document root is already '{first}')\n  hint: a document describes exactly one epic"
        )
    }
}

/// A specialized Result type for mdj-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
