// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable definition parsing
//!
//! One definition per line. The key/value separator is the earliest match
//! of any rule in [`SEPARATORS`] past the start of the line, with rule order
//! breaking ties.

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::sync::LazyLock;

/// A separator rule: a display name and the pattern it matches
struct Separator {
    name: &'static str,
    pattern: Regex,
}

// Separator patterns in priority order - these are constant valid patterns
// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static SEPARATORS: LazyLock<Vec<Separator>> = LazyLock::new(|| {
    [
        ("equals", r"\s*=\s*"),
        ("comma", r"\s*,\s*"),
        ("tab", r"\t+"),
        ("ideographic-space", r"\x{3000}{2,}"),
        ("space", r" {2,}"),
    ]
    .into_iter()
    .map(|(name, pattern)| Separator {
        name,
        pattern: Regex::new(pattern).expect("constant regex pattern is valid"),
    })
    .collect()
});

/// Variable name to value mapping, kept in first-definition order.
///
/// Re-defining a key replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate definitions in first-definition order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a VariableMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for VariableMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Parse variable definitions, one `key<separator>value` per line.
///
/// Blank lines and lines without a usable separator are skipped.
pub fn parse_definitions(text: &str) -> VariableMap {
    let mut vars = VariableMap::new();

    for (lineno, raw) in text.split('\n').enumerate() {
        let line = trim(raw);
        if line.is_empty() {
            continue;
        }

        match split_definition(line) {
            Some((key, value)) => {
                if let Some(previous) = vars.insert(key, value) {
                    tracing::trace!(line = lineno + 1, key, previous = %previous, "definition overridden");
                }
            }
            None => tracing::trace!(line = lineno + 1, content = line, "skipped definition line"),
        }
    }

    vars
}

/// Trim whitespace and byte order marks, so a BOM-prefixed file parses
/// like any other
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Split a trimmed line at the earliest separator match past byte 0.
///
/// Each rule offers only its leftmost match; a rule whose match opens the
/// line has no key and drops out. Matches starting at the same position are
/// resolved by rule priority.
fn split_definition(line: &str) -> Option<(&str, &str)> {
    let (sep, m) = SEPARATORS
        .iter()
        .filter_map(|sep| sep.pattern.find(line).map(|m| (sep, m)))
        .filter(|(_, m)| m.start() > 0)
        .min_by_key(|(_, m)| m.start())?;

    let key = trim(&line[..m.start()]);
    let value = trim(&line[m.end()..]);
    tracing::trace!(separator = sep.name, key, "matched separator");
    (!key.is_empty()).then_some((key, value))
}

#[cfg(test)]
#[path = "definitions_tests.rs"]
mod tests;
