// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline issue sink for `--dry-run`.

use mdj_core::{IssueDraft, IssueSink};

/// Key prefix for issues that were never sent anywhere.
pub const DRY_RUN_PREFIX: &str = "DRY";

/// Records drafts and hands out sequential placeholder keys (`DRY-1`, `DRY-2`, ...).
#[derive(Debug, Default)]
pub struct DryRunSink {
    drafts: Vec<IssueDraft>,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drafts in the order they were submitted.
    pub fn drafts(&self) -> &[IssueDraft] {
        &self.drafts
    }
}

impl IssueSink for DryRunSink {
    fn create(&mut self, draft: &IssueDraft) -> mdj_core::Result<String> {
        self.drafts.push(draft.clone());
        Ok(format!("{}-{}", DRY_RUN_PREFIX, self.drafts.len()))
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
