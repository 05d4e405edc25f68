// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Heading tree builder.
//!
//! Folds the flat block sequence of a document into one rooted
//! [`IssueNode`] tree:
//!
//! - `#` opens the epic (the root), `##` a story, `###` a subtask; deeper
//!   headings are ignored.
//! - A heading line starting with `Labels: ` sets the node's labels.
//! - A heading that is just a ticket key (`PROJ-123`) is verified and
//!   skipped; it never becomes a node and leaves the open ancestors as they were.
//! - A code block tagged `field-settings` sets the fields of the most
//!   recently opened node.
//!
//! Open nodes are kept on an explicit stack ([`OpenStack`]). Opening a node
//! closes every open node whose rank is not shallower than the new one.

use tracing::debug;

use crate::blocks::{tokenize, Block};
use crate::error::{Error, Result};
use crate::fields::decode_fields;
use crate::issue::{IssueKind, IssueNode};
use crate::reference::{is_ticket_reference, TicketVerifier};

/// Info-string prefix marking a field-settings code block.
pub const FIELD_SETTINGS_TAG: &str = "field-settings";

/// Heading line prefix carrying comma-separated labels.
pub const LABELS_PREFIX: &str = "Labels: ";

/// Tokenizes `markdown` and builds its issue tree.
///
/// # Errors
///
/// See [`build_tree`].
pub fn parse_document(markdown: &str, verifier: &dyn TicketVerifier) -> Result<IssueNode> {
    build_tree(&tokenize(markdown), verifier)
}

/// Builds the issue tree from a document's top-level blocks.
///
/// # Errors
///
/// - [`Error::MalformedFieldLine`] if a field-settings block does not decode.
/// - [`Error::TicketNotFound`] if a referenced ticket fails verification.
/// - [`Error::MultipleRoots`] if a level-1 heading is not the first issue heading.
pub fn build_tree(blocks: &[Block], verifier: &dyn TicketVerifier) -> Result<IssueNode> {
    let mut stack = OpenStack::new();
    let mut seen_heading = false;

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let Some(kind) = IssueKind::from_level(*level) else {
                    continue;
                };
                let HeadingText { title, labels } = split_heading(text);

                if is_ticket_reference(&title) {
                    verify_reference(verifier, &title)?;
                    continue;
                }

                let node = IssueNode::new(kind, title).with_labels(labels);
                if kind == IssueKind::Epic {
                    if seen_heading {
                        return Err(Error::MultipleRoots {
                            first: stack.root().title.clone(),
                            second: node.title,
                        });
                    }
                    stack.adopt_root(node);
                } else {
                    stack.open(node);
                }
                seen_heading = true;
            }
            Block::CodeBlock { info, body } => {
                let Some(qualifier) = info.strip_prefix(FIELD_SETTINGS_TAG) else {
                    continue;
                };
                let fields = decode_fields(body)?;
                let cursor = stack.cursor_mut();
                debug!(
                    issue = %cursor.title,
                    qualifier = qualifier.trim(),
                    count = fields.len(),
                    "attaching field settings"
                );
                cursor.fields = fields;
            }
            Block::Other => {}
        }
    }

    Ok(stack.finish())
}

fn verify_reference(verifier: &dyn TicketVerifier, key: &str) -> Result<()> {
    verifier.verify_exists(key).map_err(|e| match e {
        Error::TicketNotFound { .. } => e,
        other => Error::TicketNotFound {
            key: key.to_string(),
            reason: other.to_string(),
        },
    })?;
    debug!(key, "verified ticket reference");
    Ok(())
}

/// Title and labels extracted from a heading's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeadingText {
    pub title: String,
    pub labels: Vec<String>,
}

/// Splits heading text into its title and labels.
///
/// Label lines are split on `,` with elements kept verbatim. All other lines
/// are joined without a separator and the result is trimmed.
pub(crate) fn split_heading(text: &str) -> HeadingText {
    let mut raw = String::new();
    let mut labels = Vec::new();
    for line in text.lines() {
        match line.strip_prefix(LABELS_PREFIX) {
            Some(list) => labels = list.split(',').map(str::to_string).collect(),
            None => raw.push_str(line),
        }
    }
    HeadingText {
        title: raw.trim().to_string(),
        labels,
    }
}

/// The root plus the chain of currently open descendants.
///
/// `open` holds the rightmost spine below the root; its last element is the
/// cursor. The root itself can never be closed.
#[derive(Debug)]
pub(crate) struct OpenStack {
    root: IssueNode,
    open: Vec<IssueNode>,
}

impl OpenStack {
    /// Starts with an untitled epic as root.
    pub fn new() -> Self {
        OpenStack {
            root: IssueNode::new(IssueKind::Epic, ""),
            open: Vec::new(),
        }
    }

    pub fn root(&self) -> &IssueNode {
        &self.root
    }

    /// The node that receives field settings.
    pub fn cursor_mut(&mut self) -> &mut IssueNode {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    /// Replaces the untitled root with `node`, keeping fields attached before it.
    pub fn adopt_root(&mut self, node: IssueNode) {
        let fields = std::mem::take(&mut self.root.fields);
        self.root = node;
        self.root.fields = fields;
    }

    /// Closes open nodes at or deeper than `node`'s rank, then opens `node`.
    pub fn open(&mut self, node: IssueNode) {
        while self
            .open
            .last()
            .is_some_and(|top| top.kind.rank() >= node.kind.rank())
        {
            self.close_top();
        }
        self.open.push(node);
    }

    fn close_top(&mut self) {
        if let Some(node) = self.open.pop() {
            let parent = self.open.last_mut().unwrap_or(&mut self.root);
            parent.children.push(node);
        }
    }

    /// Closes everything and returns the finished root.
    pub fn finish(mut self) -> IssueNode {
        while !self.open.is_empty() {
            self.close_top();
        }
        self.root
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
