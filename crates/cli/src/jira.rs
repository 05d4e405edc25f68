// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira REST client.
//!
//! Implements [`TicketVerifier`] and [`IssueSink`] on top of the v2 REST API
//! with basic authentication. Requests are blocking and never retried.

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use mdj_core::{IssueDraft, IssueKind, IssueNode, IssueSink, TicketVerifier};

use crate::config::Config;
use crate::error::{Error, Result};

/// Body of a successful `POST /rest/api/2/issue`.
#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: String,
}

/// Blocking Jira client bound to one project.
pub struct JiraClient {
    http: Client,
    config: Config,
}

impl JiraClient {
    /// Creates a client after validating the configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .user_agent(concat!("mdjira/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(JiraClient { http, config })
    }

    fn issue_url(&self, key: &str) -> String {
        format!("{}/rest/api/2/issue/{}", self.config.base_url(), key)
    }

    fn authed_get(&self, url: &str) -> Result<Response> {
        Ok(self
            .http
            .get(url)
            .basic_auth(&self.config.user, Some(&self.config.token))
            .send()?)
    }

    /// Creates one issue and returns its key.
    pub fn create_issue(&self, draft: &IssueDraft) -> Result<String> {
        let payload = create_payload(draft, &self.config);
        tracing::debug!(summary = %draft.summary, %payload, "creating jira issue");

        let response = self
            .http
            .post(format!("{}/rest/api/2/issue", self.config.base_url()))
            .basic_auth(&self.config.user, Some(&self.config.token))
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Tracker {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        let created: CreatedIssue = response.json()?;
        Ok(created.key)
    }
}

impl TicketVerifier for JiraClient {
    fn verify_exists(&self, key: &str) -> mdj_core::Result<()> {
        let url = format!("{}?fields=summary", self.issue_url(key));
        let status = self.authed_get(&url)?.status();
        tracing::debug!(key, %status, "checked ticket reference");

        if status.is_success() {
            return Ok(());
        }
        let reason = if status == StatusCode::NOT_FOUND {
            "no such issue".to_string()
        } else {
            format!("jira returned {status}")
        };
        Err(mdj_core::Error::TicketNotFound {
            key: key.to_string(),
            reason,
        })
    }
}

impl IssueSink for JiraClient {
    fn create(&mut self, draft: &IssueDraft) -> mdj_core::Result<String> {
        self.create_issue(draft).map_err(|e| {
            mdj_core::Error::Tracker(format!("failed to create '{}': {e}", draft.summary))
        })
    }
}

/// Rejects trees Jira cannot represent before anything is created.
///
/// Jira only accepts a sub-task whose parent is a standard issue, so a
/// sub-task directly under the epic would fail midway through submission.
pub fn check_hierarchy(root: &IssueNode) -> Result<()> {
    match root
        .children
        .iter()
        .find(|child| child.kind == IssueKind::Subtask)
    {
        Some(subtask) => Err(Error::SubtaskUnderEpic {
            summary: subtask.title.clone(),
        }),
        None => Ok(()),
    }
}

/// Builds the JSON body for creating `draft`.
///
/// Custom fields go in first so they cannot replace project, summary, issue
/// type or parent. Labels are trimmed and empty ones dropped, since Jira
/// rejects labels containing spaces.
pub fn create_payload(draft: &IssueDraft, config: &Config) -> Value {
    let mut fields = Map::new();
    for (name, value) in &draft.fields {
        fields.insert(name.clone(), field_value(value));
    }

    fields.insert("project".into(), json!({ "key": config.project }));
    fields.insert("summary".into(), json!(draft.summary));
    fields.insert(
        "issuetype".into(),
        json!({ "name": config.issue_types.name_for(draft.kind) }),
    );

    let labels: Vec<&str> = draft
        .labels
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if !labels.is_empty() {
        fields.insert("labels".into(), json!(labels));
    }

    if let Some(parent) = &draft.parent {
        match (draft.kind, &config.epic_link_field) {
            (IssueKind::Story, Some(link_field)) => {
                fields.insert(link_field.clone(), json!(parent));
            }
            _ => {
                fields.insert("parent".into(), json!({ "key": parent }));
            }
        }
    }

    json!({ "fields": fields })
}

/// Field values that are JSON objects or arrays are sent as-is (for fields
/// like `priority = {"name": "High"}`); everything else is a string.
pub fn field_value(raw: &str) -> Value {
    if raw.starts_with('{') || raw.starts_with('[') {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return value;
        }
    }
    Value::String(raw.to_string())
}

#[cfg(test)]
#[path = "jira_tests.rs"]
mod tests;
