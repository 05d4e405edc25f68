// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mdjira - create Jira issue hierarchies from Markdown.
//!
//! This crate provides the `mdjira` CLI on top of [`mdj_core`]: it reads a
//! Markdown file, builds the epic/story/subtask tree and submits it to Jira
//! through [`jira::JiraClient`], or to a [`sink::DryRunSink`] with `--dry-run`.
//!
//! # Main Components
//!
//! - [`Config`] - Jira endpoint, credentials and project settings
//! - [`jira`] - REST client implementing the core tracker traits
//! - [`Error`] - Error types for all CLI operations

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;
pub mod jira;
pub mod sink;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Run a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Create {
            file,
            fields,
            dry_run,
            config,
            output,
        } => commands::create::run(&file, &fields, dry_run, config.as_deref(), output),
        Command::Show {
            file,
            verify,
            config,
            output,
        } => commands::show::run(&file, verify, config.as_deref(), output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "mdjira", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
