// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoder for the `name = value` field mini-language.
//!
//! Used for the body of `field-settings` code blocks and for `--field`
//! command-line arguments.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Custom field name to value mapping.
pub type FieldMap = BTreeMap<String, String>;

/// Decodes the body of a `field-settings` block.
///
/// Blank lines are skipped. Every other line is split on its first `=`, so
/// values may contain `=` themselves; key and value are trimmed. A later
/// duplicate key overwrites an earlier one.
///
/// # Errors
///
/// Returns [`Error::MalformedFieldLine`] for the first line without an `=`.
pub fn decode_fields(body: &str) -> Result<FieldMap> {
    let mut fields = FieldMap::new();
    for (idx, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = split_pair(line).ok_or_else(|| Error::MalformedFieldLine {
            line: line.to_string(),
            line_number: idx + 1,
        })?;
        fields.insert(key, value);
    }
    Ok(fields)
}

/// Parses a single `name=value` command-line argument.
///
/// # Errors
///
/// Returns [`Error::MalformedFieldArg`] if the argument has no `=`.
pub fn parse_field_arg(arg: &str) -> Result<(String, String)> {
    split_pair(arg).ok_or_else(|| Error::MalformedFieldArg(arg.to_string()))
}

fn split_pair(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
