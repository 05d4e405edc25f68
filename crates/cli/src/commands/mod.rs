// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod create;
pub mod show;

use std::path::Path;

use mdj_core::{parse_field_arg, FieldMap};

use crate::config::Config;
use crate::env;
use crate::error::Result;
use crate::jira::JiraClient;

/// Helper to open a Jira client from the resolved config file.
pub fn open_client(config_path: Option<&Path>) -> Result<JiraClient> {
    let path = Config::resolve_path(config_path)?;
    let config = Config::load(&path)?.with_token_override(env::token());
    tracing::debug!(path = %path.display(), project = %config.project, "loaded config");
    JiraClient::new(config)
}

/// Parses repeated `--field NAME=VALUE` arguments. Later values win.
pub fn parse_extra_fields(args: &[String]) -> Result<FieldMap> {
    let mut fields = FieldMap::new();
    for arg in args {
        let (name, value) = parse_field_arg(arg)?;
        fields.insert(name, value);
    }
    Ok(fields)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
