// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        styled(colors::header, "Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_issues}
  {create}      Create issues in Jira from a Markdown file
  {show}        Show the issue tree parsed from a Markdown file

{header_setup}
  {completion}  Generate shell completions",
        header_issues = styled(colors::header, "Issues:"),
        header_setup = styled(colors::header, "Setup:"),
        create = styled(colors::literal, "create"),
        show = styled(colors::literal, "show"),
        completion = styled(colors::literal, "completion"),
    )
}

/// Applies `paint` only when colors are enabled.
fn styled(paint: fn(&str) -> String, text: &str) -> String {
    if colors::should_colorize() {
        paint(text)
    } else {
        text.to_string()
    }
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  mdjira show plan.md              Check how plan.md is read
  mdjira create plan.md --dry-run  Number the issues without Jira
  mdjira create plan.md            Create the issues

Markdown:
  # Epic / ## Story / ### Sub-task   Heading level picks the issue kind
  ## PROJ-12                         Refer to an existing ticket
  ```field-settings                  key = value lines for the issue above",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
