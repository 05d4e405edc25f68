// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level block tokenizer built on pulldown-cmark.
//!
//! The tree builder only needs a flat, document-ordered list of headings and
//! code blocks. Blocks nested inside containers (lists, block quotes,
//! footnotes) are reported as [`Block::Other`].

use std::path::Path;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag};

use crate::error::{Error, Result};

/// A top-level Markdown block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// ATX or setext heading. Line breaks inside the heading become `\n`.
    Heading { level: u8, text: String },
    /// Fenced or indented code block. Indented blocks have an empty info string.
    CodeBlock { info: String, body: String },
    /// Anything else (paragraphs, lists, rules, nested blocks...).
    Other,
}

impl Block {
    /// Convenience constructor for headings.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Convenience constructor for code blocks.
    pub fn code(info: impl Into<String>, body: impl Into<String>) -> Self {
        Block::CodeBlock {
            info: info.into(),
            body: body.into(),
        }
    }
}

/// Splits Markdown text into its top-level blocks, in document order.
pub fn tokenize(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<Block> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    current = Some(match tag {
                        Tag::Heading { level, .. } => Block::heading(heading_level(level), ""),
                        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
                            Block::code(info.into_string(), "")
                        }
                        Tag::CodeBlock(CodeBlockKind::Indented) => Block::code("", ""),
                        _ => Block::Other,
                    });
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(block) = current.take() {
                        blocks.push(block);
                    }
                }
            }
            Event::Text(text) | Event::Code(text) | Event::InlineHtml(text) => match &mut current {
                Some(Block::Heading { text: heading, .. }) => heading.push_str(&text),
                Some(Block::CodeBlock { body, .. }) => body.push_str(&text),
                _ => {}
            },
            Event::SoftBreak | Event::HardBreak => {
                if let Some(Block::Heading { text, .. }) = &mut current {
                    text.push('\n');
                }
            }
            _ => {
                if depth == 0 {
                    blocks.push(Block::Other);
                }
            }
        }
    }

    blocks
}

/// Reads and tokenizes a Markdown file.
///
/// # Errors
///
/// Returns [`Error::InputUnreadable`] if the file cannot be read.
pub fn load_blocks(path: &Path) -> Result<Vec<Block>> {
    let markdown = std::fs::read_to_string(path).map_err(|source| Error::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tokenize(&markdown))
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
#[path = "blocks_tests.rs"]
mod tests;
