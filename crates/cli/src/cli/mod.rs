// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "mdjira")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Turn a Markdown outline into Jira epics, stories and sub-tasks")]
#[command(
    long_about = "Turn a Markdown outline into Jira epics, stories and sub-tasks.\n\n\
    Headings become issues by level, `field-settings` code blocks set custom fields, \
    and headings like `PROJ-12` refer to existing tickets."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create issues in Jira from a Markdown file
    ///
    /// Every `###` sub-task must sit under a `##` story; Jira does not accept
    /// sub-tasks directly under an epic, so such files are rejected before
    /// anything is created.
    #[command(after_help = colors::examples("\
Examples:
  mdjira create plan.md                        Create all issues in plan.md
  mdjira create plan.md --dry-run              Show what would be created
  mdjira create plan.md --field priority=High  Set a field on every issue
  mdjira create plan.md -o json                Print created issues as JSON"))]
    Create {
        /// Markdown file to read
        file: PathBuf,

        /// Extra field applied to every issue, overriding field-settings blocks
        #[arg(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// Build and number the issues without contacting Jira
        #[arg(long)]
        dry_run: bool,

        /// Path to the config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the issue tree parsed from a Markdown file
    #[command(after_help = colors::examples("\
Examples:
  mdjira show plan.md             Print the issue tree
  mdjira show plan.md --verify    Also check ticket references in Jira
  mdjira show plan.md -o json     Print the tree as JSON"))]
    Show {
        /// Markdown file to read
        file: PathBuf,

        /// Check ticket-reference headings against Jira
        #[arg(long)]
        verify: bool,

        /// Path to the config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
