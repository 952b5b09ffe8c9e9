// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder detection

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Regex pattern for {{name}} - shortest non-empty run that stays on one line
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^\n\r\x{2028}\x{2029}]+?)\}\}").expect("constant regex pattern is valid")
});

/// Find the distinct `{{name}}` placeholders in a template.
///
/// Names come back in order of first appearance and are not trimmed, so
/// `{{ name }}` yields `" name "`.
pub fn detect_placeholders(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PLACEHOLDER_PATTERN
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
#[path = "placeholder_tests.rs"]
mod tests;
