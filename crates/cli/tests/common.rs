// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `mdjira` with colors off and no config or token leaking in from the host.
pub fn mdjira() -> Command {
    let mut cmd = cargo_bin_cmd!("mdjira");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("MDJIRA_CONFIG")
        .env_remove("MDJIRA_TOKEN")
        .env_remove("MDJIRA_LOG");
    cmd
}

/// Writes `content` to `name` inside `temp` and returns the path.
pub fn write_file(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub const PLAN: &str = "\
# Authentication

```field-settings
priority = High
```

## Login page

### Form validation

### Error messages

## PROJ-12

## Logout
";
