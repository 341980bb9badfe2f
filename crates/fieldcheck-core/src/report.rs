//! Error report produced by a validation run
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Field key -> ordered failure messages.
///
/// Only fields with at least one failure are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    fields: IndexMap<String, Vec<String>>,
}

/// Result of a run converted with [`ErrorReport::into_result`]
pub type ValidationResult<T> = Result<T, ErrorReport>;

/// One line per field: `<key>: <msg1>,<msg2>\n`
impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, messages) in &self.fields {
            writeln!(f, "{}: {}", key, messages.join(","))?;
        }
        Ok(())
    }
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure message for a field
    pub fn add<K: Into<String>, M: Into<String>>(&mut self, key: K, message: M) {
        self.fields.entry(key.into()).or_default().push(message.into());
    }

    /// Messages recorded for a field
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Total number of messages across all fields
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.fields
    }

    /// Ok if no field failed, otherwise the report itself
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for ErrorReport {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
