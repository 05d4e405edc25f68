// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket references: headings that name an existing tracker key.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;

// Anchored and case-sensitive; the title is trimmed before matching.
static TICKET_REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[A-Z]+-\d+$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Returns true if `title` is a tracker key such as `PROJ-123`.
pub fn is_ticket_reference(title: &str) -> bool {
    TICKET_REFERENCE_RE.is_match(title)
}

/// Checks that a referenced ticket exists on the tracker.
///
/// Called once per reference heading, in document order. Any error is
/// reported to the caller as [`Error::TicketNotFound`](crate::Error::TicketNotFound).
pub trait TicketVerifier {
    fn verify_exists(&self, key: &str) -> Result<()>;
}

/// Verifier that accepts every reference without contacting a tracker.
///
/// Used for offline previews and dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptReferences;

impl TicketVerifier for AcceptReferences {
    fn verify_exists(&self, key: &str) -> Result<()> {
        tracing::debug!(key, "accepting ticket reference without verification");
        Ok(())
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
