// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::reference::AcceptReferences;
use std::cell::RefCell;
use yare::parameterized;

/// Verifier that records every key and rejects the ones listed as missing.
#[derive(Default)]
struct RecordingVerifier {
    missing: Vec<&'static str>,
    seen: RefCell<Vec<String>>,
}

impl RecordingVerifier {
    fn missing(keys: &[&'static str]) -> Self {
        RecordingVerifier {
            missing: keys.to_vec(),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl TicketVerifier for RecordingVerifier {
    fn verify_exists(&self, key: &str) -> Result<()> {
        self.seen.borrow_mut().push(key.to_string());
        if self.missing.iter().any(|m| *m == key) {
            return Err(Error::Tracker(format!("{key} returned 404")));
        }
        Ok(())
    }
}

fn parse(markdown: &str) -> IssueNode {
    parse_document(markdown, &AcceptReferences).unwrap()
}

fn epic(title: &str) -> IssueNode {
    IssueNode::new(IssueKind::Epic, title)
}

fn story(title: &str) -> IssueNode {
    IssueNode::new(IssueKind::Story, title)
}

fn subtask(title: &str) -> IssueNode {
    IssueNode::new(IssueKind::Subtask, title)
}

#[test]
fn nested_document_matches_heading_levels() {
    let root = parse(
        "# Epic 1\n\n## Story 1.1\n\n### Subtask 1.1.1\n\n### Subtask 1.1.2\n\n## Story 1.2",
    );

    let expected = epic("Epic 1")
        .with_child(
            story("Story 1.1")
                .with_child(subtask("Subtask 1.1.1"))
                .with_child(subtask("Subtask 1.1.2")),
        )
        .with_child(story("Story 1.2"));
    similar_asserts::assert_eq!(root, expected);
}

#[test]
fn stories_after_subtask_attach_to_epic() {
    let root = parse("# E\n\n## S1\n\n### T1\n\n## S2\n\n## S3\n");

    let expected = epic("E")
        .with_child(story("S1").with_child(subtask("T1")))
        .with_child(story("S2"))
        .with_child(story("S3"));
    similar_asserts::assert_eq!(root, expected);
}

#[test]
fn outline_follows_document_order() {
    let root = parse("# E\n## A\n### A1\n## B\n### B1\n### B2\n");
    assert_eq!(
        root.outline(),
        vec![
            (IssueKind::Epic, "E"),
            (IssueKind::Story, "A"),
            (IssueKind::Subtask, "A1"),
            (IssueKind::Story, "B"),
            (IssueKind::Subtask, "B1"),
            (IssueKind::Subtask, "B2"),
        ]
    );
}

#[test]
fn subtask_without_story_attaches_to_epic() {
    let root = parse("# E\n\n### Orphan\n\n## S\n");
    assert_eq!(
        root,
        epic("E").with_child(subtask("Orphan")).with_child(story("S"))
    );
}

#[test]
fn deeper_headings_are_ignored() {
    let root = parse("# E\n\n## S\n\n#### Notes\n\n##### More\n\n### T\n");
    similar_asserts::assert_eq!(root, epic("E").with_child(story("S").with_child(subtask("T"))));
}

#[test]
fn document_without_epic_gets_untitled_root() {
    let root = parse("## S1\n\n## S2\n");
    similar_asserts::assert_eq!(root, epic("").with_child(story("S1")).with_child(story("S2")));
}

#[test]
fn empty_document_is_untitled_epic() {
    assert_eq!(parse(""), epic(""));
}

#[test]
fn titles_are_trimmed() {
    let blocks = vec![Block::heading(1, "   Spaced out   ")];
    let root = build_tree(&blocks, &AcceptReferences).unwrap();
    assert_eq!(root.title, "Spaced out");
}

#[test]
fn second_epic_is_rejected() {
    let err = parse_document("# Epic 1\n\n## S\n\n# Epic 2\n", &AcceptReferences).unwrap_err();
    match err {
        Error::MultipleRoots { first, second } => {
            assert_eq!(first, "Epic 1");
            assert_eq!(second, "Epic 2");
        }
        other => unreachable!("unexpected error: {other}"),
    }
}

#[test]
fn epic_after_story_is_rejected() {
    let err = parse_document("## S\n\n# Late epic\n", &AcceptReferences).unwrap_err();
    assert!(matches!(err, Error::MultipleRoots { ref second, .. } if second == "Late epic"));
}

#[test]
fn epic_after_story_error_asks_for_epic_first() {
    let err = parse_document("## S\n\n# Late epic\n", &AcceptReferences).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("must come before any story or subtask"), "{msg}");
}

#[test]
fn epic_after_reference_is_accepted() {
    let root = parse("## PROJ-1\n\n# Epic\n\n## S\n");
    similar_asserts::assert_eq!(root, epic("Epic").with_child(story("S")));
}

// Labels

#[test]
fn labels_line_is_split_and_excluded_from_title() {
    let blocks = vec![Block::heading(2, "Login page\nLabels: a,b,c")];
    let root = build_tree(&blocks, &AcceptReferences).unwrap();

    let story = &root.children[0];
    assert_eq!(story.title, "Login page");
    assert_eq!(story.labels, vec!["a", "b", "c"]);
}

#[test]
fn setext_heading_labels_from_markdown() {
    let root = parse("Auth overhaul\nLabels: security,q3\n===\n");
    assert_eq!(root.title, "Auth overhaul");
    assert_eq!(root.labels, vec!["security", "q3"]);
}

#[test]
fn label_elements_are_not_trimmed() {
    let blocks = vec![Block::heading(1, "E\nLabels: a, b")];
    let root = build_tree(&blocks, &AcceptReferences).unwrap();
    assert_eq!(root.labels, vec!["a", " b"]);
}

#[test]
fn later_labels_line_replaces_earlier() {
    let blocks = vec![Block::heading(1, "E\nLabels: old\nLabels: new,newer")];
    let root = build_tree(&blocks, &AcceptReferences).unwrap();
    assert_eq!(root.labels, vec!["new", "newer"]);
}

#[test]
fn title_lines_join_without_separator() {
    let blocks = vec![Block::heading(1, "Part one\n and two")];
    let root = build_tree(&blocks, &AcceptReferences).unwrap();
    assert_eq!(root.title, "Part one and two");
}

#[parameterized(
    no_space = { "Labels:a,b" },
    lowercase = { "labels: a,b" },
)]
fn near_miss_label_lines_stay_in_title(line: &str) {
    let blocks = vec![Block::heading(1, format!("E\n{line}"))];
    let root = build_tree(&blocks, &AcceptReferences).unwrap();
    assert!(root.labels.is_empty());
    assert_eq!(root.title, format!("E{line}"));
}

// Field settings

#[test]
fn field_block_attaches_to_preceding_heading() {
    let root = parse(
        "# E\n\n## S1\n\n```field-settings\npriority = High\n```\n\n## S2\n",
    );

    assert!(root.fields.is_empty());
    assert_eq!(root.children[0].fields["priority"], "High");
    assert!(root.children[1].fields.is_empty());
}

#[test]
fn field_block_after_subtask_attaches_to_subtask() {
    let root = parse("# E\n## S\n### T\n```field-settings\nestimate = 3\n```\n");
    let subtask = &root.children[0].children[0];
    assert_eq!(subtask.fields["estimate"], "3");
    assert!(root.children[0].fields.is_empty());
}

#[test]
fn later_field_block_replaces_earlier() {
    let root = parse(
        "# E\n```field-settings\na = 1\nb = 2\n```\n```field-settings\nc = 3\n```\n",
    );
    assert_eq!(root.fields.len(), 1);
    assert_eq!(root.fields["c"], "3");
}

#[test]
fn field_tag_accepts_trailing_qualifier() {
    let root = parse("# E\n```field-settings jira\nteam = Core\n```\n");
    assert_eq!(root.fields["team"], "Core");
}

#[test]
fn other_code_blocks_are_ignored() {
    let root = parse("# E\n```rust\nfn main() {}\n```\n```Field-Settings\nx\n```\n");
    assert!(root.fields.is_empty());
}

#[test]
fn field_block_before_first_heading_stays_on_root() {
    let root = parse("```field-settings\ncomponent = api\n```\n\n# E\n\n## S\n");
    assert_eq!(root.title, "E");
    assert_eq!(root.fields["component"], "api");
    assert!(root.children[0].fields.is_empty());
}

#[test]
fn malformed_field_line_aborts_build() {
    let err = parse_document("# E\n```field-settings\nfoo bar\n```\n", &AcceptReferences)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedFieldLine { .. }));
    assert!(err.to_string().contains("foo bar"));
}

// Ticket references

#[test]
fn reference_heading_is_not_a_node() {
    let root = parse("# E\n\n## ABC-123\n\n## S\n");
    similar_asserts::assert_eq!(root, epic("E").with_child(story("S")));
}

#[test]
fn references_are_verified_in_document_order() {
    let verifier = RecordingVerifier::default();
    parse_document("# E\n## PROJ-1\n## S\n### PROJ-2\n#### PROJ-3\n", &verifier).unwrap();
    // level 4 headings are never read
    assert_eq!(*verifier.seen.borrow(), vec!["PROJ-1", "PROJ-2"]);
}

#[test]
fn missing_reference_aborts_build() {
    let verifier = RecordingVerifier::missing(&["ABC-123"]);
    let err = parse_document("# E\n\n## ABC-123\n\n## S\n", &verifier).unwrap_err();

    match err {
        Error::TicketNotFound { key, reason } => {
            assert_eq!(key, "ABC-123");
            assert!(reason.contains("404"));
        }
        other => unreachable!("unexpected error: {other}"),
    }
}

#[test]
fn reference_leaves_cursor_on_previous_node() {
    let root = parse(
        "# E\n\n## S\n\n### PROJ-9\n\n```field-settings\nowner = sam\n```\n\n### T\n",
    );

    let story = &root.children[0];
    assert_eq!(story.fields["owner"], "sam");
    assert_eq!(story.children, vec![subtask("T")]);
}

#[test]
fn subheadings_after_reference_nest_under_open_node() {
    // The referenced story is skipped; its would-be subtasks stay under the
    // story that was open before it.
    let root = parse("# E\n## S1\n## PROJ-4\n### T1\n");
    similar_asserts::assert_eq!(root, epic("E").with_child(story("S1").with_child(subtask("T1"))));
}

#[test]
fn reference_with_labels_is_still_a_reference() {
    let blocks = vec![
        Block::heading(1, "E"),
        Block::heading(2, "PROJ-7\nLabels: linked"),
    ];
    let root = build_tree(&blocks, &AcceptReferences).unwrap();
    assert!(root.children.is_empty());
}

// Properties

#[test]
fn rebuilding_is_idempotent() {
    let blocks = tokenize(
        "E\nLabels: x\n===\n\n```field-settings\na = 1\n```\n## S\n### T\n## PROJ-1\n## S2\n",
    );
    let first = build_tree(&blocks, &AcceptReferences).unwrap();
    let second = build_tree(&blocks, &AcceptReferences).unwrap();
    similar_asserts::assert_eq!(first, second);
}

#[test]
fn children_are_always_deeper_than_parent() {
    let root = parse("## A\n### A1\n### A2\n## B\n### B1\n# PROJ-3\n## C\n");

    let mut stack = vec![&root];
    while let Some(node) = stack.pop() {
        for child in &node.children {
            assert!(child.kind.rank() > node.kind.rank());
            stack.push(child);
        }
    }
}

// OpenStack

#[test]
fn open_stack_pops_at_or_deeper_rank() {
    let mut stack = OpenStack::new();
    stack.open(story("S1"));
    stack.open(subtask("T1"));
    stack.open(subtask("T2"));
    stack.open(story("S2"));

    assert_eq!(stack.cursor_mut().title, "S2");
    let root = stack.finish();
    assert_eq!(
        root,
        epic("")
            .with_child(story("S1").with_child(subtask("T1")).with_child(subtask("T2")))
            .with_child(story("S2"))
    );
}

#[test]
fn open_stack_cursor_defaults_to_root() {
    let mut stack = OpenStack::new();
    stack.cursor_mut().title = "renamed".into();
    assert_eq!(stack.finish().title, "renamed");
}

#[test]
fn adopt_root_keeps_earlier_fields() {
    let mut stack = OpenStack::new();
    stack.cursor_mut().fields.insert("k".into(), "v".into());
    stack.adopt_root(epic("E"));

    let root = stack.finish();
    assert_eq!(root.title, "E");
    assert_eq!(root.fields["k"], "v");
}

#[test]
fn split_heading_extracts_title_and_labels() {
    assert_eq!(
        split_heading("  Title \nLabels: a,b"),
        HeadingText {
            title: "Title".into(),
            labels: vec!["a".into(), "b".into()],
        }
    );
}
