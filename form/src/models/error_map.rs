//! Per-field error map published to the host

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name to current error message.
///
/// A key mapped to `None` is a field that was validated and currently passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, Option<String>>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error message for a field, if it currently has one
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|message| message.as_deref())
    }

    pub fn set(&mut self, key: impl Into<String>, message: Option<String>) {
        self.0.insert(key.into(), message);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Fields that currently have an error, with their messages
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(key, message)| message.as_deref().map(|m| (key.as_str(), m)))
    }

    /// Number of fields with an error
    pub fn error_count(&self) -> usize {
        self.messages().count()
    }

    /// No field has an error
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of keys, passing ones included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this map with every key of `update` overwritten
    pub fn merged_with(&self, update: &ErrorMap) -> ErrorMap {
        let mut merged = self.clone();
        for (key, message) in &update.0 {
            merged.0.insert(key.clone(), message.clone());
        }
        merged
    }
}
