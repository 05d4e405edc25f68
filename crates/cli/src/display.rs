// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use mdj_core::{FieldMap, IssueNode, Submitted};

use crate::colors;

/// Title shown for a root epic that never received a heading.
const UNTITLED: &str = "(untitled)";

/// Format one node as `[kind] Title  (labels: a, b)  {n fields}`.
pub fn format_node(node: &IssueNode, colorize: bool) -> String {
    let title = if node.title.is_empty() {
        UNTITLED
    } else {
        node.title.as_str()
    };

    let mut line = format!("{} {}", colors::kind_tag(node.kind, colorize), title);
    if !node.labels.is_empty() {
        line.push_str(&format!("  (labels: {})", node.labels.join(", ")));
    }
    match node.fields.len() {
        0 => {}
        1 => line.push_str("  {1 field}"),
        n => line.push_str(&format!("  {{{n} fields}}")),
    }
    line
}

/// Format a parsed tree with box-drawing connectors, root first.
pub fn format_tree(root: &IssueNode, colorize: bool) -> Vec<String> {
    let mut lines = vec![format_node(root, colorize)];
    push_children(&mut lines, &root.children, "", colorize);
    lines
}

fn push_children(lines: &mut Vec<String>, children: &[IssueNode], prefix: &str, colorize: bool) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!(
            "{}{}{}",
            prefix,
            connector,
            format_node(child, colorize)
        ));

        if !child.children.is_empty() {
            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            push_children(lines, &child.children, &child_prefix, colorize);
        }
    }
}

/// Format a created issue, indented two spaces per level.
pub fn format_submitted(record: &Submitted, colorize: bool) -> String {
    let key = if colorize {
        colors::literal(&record.key)
    } else {
        record.key.clone()
    };
    format!(
        "{}{}  {} {}",
        "  ".repeat(record.depth),
        key,
        colors::kind_tag(record.kind, colorize),
        record.summary
    )
}

/// Format the fields sent with an issue, nested under its line.
pub fn format_fields(fields: &FieldMap, depth: usize) -> Vec<String> {
    let indent = "  ".repeat(depth + 2);
    fields
        .iter()
        .map(|(name, value)| format!("{indent}{name} = {value}"))
        .collect()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
