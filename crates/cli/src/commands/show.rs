// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use mdj_core::{build_tree, load_blocks, AcceptReferences, IssueNode};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_tree;
use crate::error::Result;

use super::open_client;

pub fn run(file: &Path, verify: bool, config: Option<&Path>, output: OutputFormat) -> Result<()> {
    let blocks = load_blocks(file)?;
    let root = if verify {
        let client = open_client(config)?;
        build_tree(&blocks, &client)?
    } else {
        build_tree(&blocks, &AcceptReferences)?
    };

    for line in render(&root, output, colors::should_colorize())? {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn render(root: &IssueNode, output: OutputFormat, colorize: bool) -> Result<Vec<String>> {
    match output {
        OutputFormat::Json => Ok(vec![serde_json::to_string_pretty(root)?]),
        OutputFormat::Text => Ok(format_tree(root, colorize)),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
