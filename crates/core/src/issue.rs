// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types: IssueKind and IssueNode.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fields::FieldMap;

/// Classification of issues by heading depth.
///
/// Ordered by rank: `Epic < Story < Subtask`. A node's children always have
/// a strictly greater rank than the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Top-level initiative, from a level-1 heading.
    Epic,
    /// Unit of work under an epic, from a level-2 heading.
    Story,
    /// Piece of a story, from a level-3 heading.
    Subtask,
}

impl IssueKind {
    /// Maps a heading level to an issue kind. Levels outside 1..=3 yield `None`.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(IssueKind::Epic),
            2 => Some(IssueKind::Story),
            3 => Some(IssueKind::Subtask),
            _ => None,
        }
    }

    /// Nesting rank: 0 for epics, 1 for stories, 2 for subtasks.
    pub fn rank(&self) -> u8 {
        match self {
            IssueKind::Epic => 0,
            IssueKind::Story => 1,
            IssueKind::Subtask => 2,
        }
    }

    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Epic => "epic",
            IssueKind::Story => "story",
            IssueKind::Subtask => "subtask",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One issue in the parsed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueNode {
    /// Kind derived from the heading level.
    pub kind: IssueKind,
    /// Trimmed heading text, excluding any `Labels:` line.
    pub title: String,
    /// Labels from a `Labels: a,b,c` line, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Custom fields from the most recent `field-settings` block under this heading.
    #[serde(default, skip_serializing_if = "FieldMap::is_empty")]
    pub fields: FieldMap,
    /// Child issues in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IssueNode>,
}

impl IssueNode {
    /// Creates a childless node without labels or fields.
    pub fn new(kind: IssueKind, title: impl Into<String>) -> Self {
        IssueNode {
            kind,
            title: title.into(),
            labels: Vec::new(),
            fields: FieldMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets the labels (builder pattern).
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Appends a child (builder pattern).
    pub fn with_child(mut self, child: IssueNode) -> Self {
        self.children.push(child);
        self
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(IssueNode::count).sum::<usize>()
    }

    /// Pre-order `(kind, title)` pairs of this subtree.
    pub fn outline(&self) -> Vec<(IssueKind, &str)> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push((node.kind, node.title.as_str()));
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
