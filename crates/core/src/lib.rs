// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mdj-core: Markdown to issue hierarchy parser.
//!
//! This crate turns a Markdown document into a tree of [`IssueNode`]s
//! (epic, stories, subtasks) and walks that tree to submit it to an issue
//! tracker. The tracker itself is reached only through the
//! [`TicketVerifier`] and [`IssueSink`] traits, implemented by the CLI.
//!
//! ```rust,ignore
//! use mdj_core::{parse_document, submit_tree, AcceptReferences};
//!
//! let root = parse_document("# Epic\n\n## Story\n", &AcceptReferences)?;
//! let created = submit_tree(&root, &extra_fields, &mut sink)?;
//! ```

pub mod blocks;
pub mod error;
pub mod fields;
pub mod issue;
pub mod reference;
pub mod submit;
pub mod tree;

pub use blocks::{load_blocks, tokenize, Block};
pub use error::{Error, Result};
pub use fields::{decode_fields, parse_field_arg, FieldMap};
pub use issue::{IssueKind, IssueNode};
pub use reference::{is_ticket_reference, AcceptReferences, TicketVerifier};
pub use submit::{submit_tree, IssueDraft, IssueSink, Submitted};
pub use tree::{build_tree, parse_document, FIELD_SETTINGS_TAG, LABELS_PREFIX};
