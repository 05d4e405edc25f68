// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use mdj_core::{
    build_tree, load_blocks, submit_tree, AcceptReferences, FieldMap, IssueDraft, Submitted,
};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{format_fields, format_submitted};
use crate::error::Result;
use crate::jira::check_hierarchy;
use crate::sink::DryRunSink;

use super::{open_client, parse_extra_fields};

pub fn run(
    file: &Path,
    field_args: &[String],
    dry_run: bool,
    config: Option<&Path>,
    output: OutputFormat,
) -> Result<()> {
    // Bad --field values fail before the file is read or Jira is contacted.
    let extra = parse_extra_fields(field_args)?;
    let blocks = load_blocks(file)?;

    let lines = if dry_run {
        let mut sink = DryRunSink::new();
        let submitted = submit_blocks(&blocks, &extra, &mut sink)?;
        render(&submitted, Some(sink.drafts()), output, colors::should_colorize())?
    } else {
        let mut client = open_client(config)?;
        let root = build_tree(&blocks, &client)?;
        check_hierarchy(&root)?;
        let submitted = submit_tree(&root, &extra, &mut client)?;
        render(&submitted, None, output, colors::should_colorize())?
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Builds and checks the tree offline, then submits it to `sink`.
pub(crate) fn submit_blocks(
    blocks: &[mdj_core::Block],
    extra: &FieldMap,
    sink: &mut DryRunSink,
) -> Result<Vec<Submitted>> {
    let root = build_tree(blocks, &AcceptReferences)?;
    check_hierarchy(&root)?;
    Ok(submit_tree(&root, extra, sink)?)
}

/// Renders created issues. When `drafts` is given (dry run) each issue is
/// followed by the fields that would have been sent.
pub(crate) fn render(
    submitted: &[Submitted],
    drafts: Option<&[IssueDraft]>,
    output: OutputFormat,
    colorize: bool,
) -> Result<Vec<String>> {
    match output {
        OutputFormat::Json => Ok(vec![serde_json::to_string_pretty(submitted)?]),
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(submitted.len());
            for (i, record) in submitted.iter().enumerate() {
                lines.push(format_submitted(record, colorize));
                if let Some(draft) = drafts.and_then(|d| d.get(i)) {
                    lines.extend(format_fields(&draft.fields, record.depth));
                }
            }
            Ok(lines)
        }
    }
}

#[cfg(test)]
#[path = "create_tests.rs"]
mod tests;
