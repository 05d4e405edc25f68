// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-order submission of a finished issue tree.

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::fields::FieldMap;
use crate::issue::{IssueKind, IssueNode};

/// Everything a tracker needs to create one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub kind: IssueKind,
    pub summary: String,
    pub labels: Vec<String>,
    /// Node fields with the caller's extra fields merged over them.
    pub fields: FieldMap,
    /// Key of the already created parent issue (`None` for the root).
    pub parent: Option<String>,
}

impl IssueDraft {
    /// Builds the draft for `node`; `extra` wins over the node's own fields.
    pub fn for_node(node: &IssueNode, extra: &FieldMap, parent: Option<String>) -> Self {
        let mut fields = node.fields.clone();
        fields.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        IssueDraft {
            kind: node.kind,
            summary: node.title.clone(),
            labels: node.labels.clone(),
            fields,
            parent,
        }
    }
}

/// Destination for created issues.
pub trait IssueSink {
    /// Creates one issue and returns its tracker key.
    fn create(&mut self, draft: &IssueDraft) -> Result<String>;
}

/// Record of one created issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submitted {
    pub key: String,
    pub kind: IssueKind,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Distance from the root (0 for the root).
    pub depth: usize,
}

/// Submits `root` and its descendants in pre-order.
///
/// Each child is created after its parent and receives the parent's key.
/// The first sink error stops the walk; issues created before it are not
/// rolled back.
pub fn submit_tree(
    root: &IssueNode,
    extra: &FieldMap,
    sink: &mut dyn IssueSink,
) -> Result<Vec<Submitted>> {
    let mut submitted = Vec::with_capacity(root.count());
    let mut pending: Vec<(&IssueNode, Option<String>, usize)> = vec![(root, None, 0)];

    while let Some((node, parent, depth)) = pending.pop() {
        let draft = IssueDraft::for_node(node, extra, parent);
        let key = sink.create(&draft)?;
        info!(key = %key, kind = %node.kind, summary = %node.title, "created issue");

        for child in node.children.iter().rev() {
            pending.push((child, Some(key.clone()), depth + 1));
        }
        submitted.push(Submitted {
            key,
            kind: draft.kind,
            summary: draft.summary,
            parent: draft.parent,
            depth,
        });
    }

    Ok(submitted)
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
