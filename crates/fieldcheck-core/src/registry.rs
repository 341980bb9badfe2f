//! Rule registry: merges plugins and explicit maps into one per-field mapping
//!
//! Precedence, lowest to highest:
//! 1. plugins, in declaration order (a later plugin replaces an earlier one)
//! 2. explicit validators, each paired with its explicit messages
//!
//! Replacement is whole-entry; validator lists are never concatenated.
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::rules::{Messages, Plugins, Validator, Validators};
use indexmap::IndexMap;
use tracing::debug;

/// Validators and custom messages for one field
#[derive(Debug, Default)]
pub struct FieldRules<'a> {
    pub validators: Vec<Validator<'a>>,
    pub messages: Vec<String>,
}

impl<'a> FieldRules<'a> {
    pub fn new(validators: Vec<Validator<'a>>, messages: Vec<String>) -> Self {
        Self { validators, messages }
    }

    /// Custom message for the validator at `index`, if one is set
    pub fn custom_message(&self, index: usize) -> Option<&str> {
        self.messages
            .get(index)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }
}

/// Consolidated field key -> rules mapping for a single run.
///
/// Iteration follows first-insertion order of each key.
#[derive(Debug, Default)]
pub struct RuleRegistry<'a> {
    rules: IndexMap<String, FieldRules<'a>>,
}

impl<'a> RuleRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the three rule sources. Empty sources contribute nothing.
    pub fn merge(plugins: Plugins<'a>, validators: Validators<'a>, mut messages: Messages) -> Self {
        let mut registry = Self::new();

        for plugin in &plugins {
            let Some(entry) = plugin.build() else {
                continue;
            };
            if registry
                .insert(entry.key.clone(), FieldRules::new(entry.validators, entry.messages))
                .is_some()
            {
                debug!(field = %entry.key, "plugin rules replaced by a later plugin");
            }
        }

        for (key, field_validators) in validators {
            let field_messages = messages.swap_remove(&key).unwrap_or_default();
            if registry
                .insert(key.clone(), FieldRules::new(field_validators, field_messages))
                .is_some()
            {
                debug!(field = %key, "plugin rules replaced by explicit validators");
            }
        }

        for key in messages.keys() {
            debug!(field = %key, "custom messages without explicit validators are ignored");
        }

        registry
    }

    /// Insert or replace the rules for a key, returning the previous rules
    pub fn insert(&mut self, key: String, rules: FieldRules<'a>) -> Option<FieldRules<'a>> {
        self.rules.insert(key, rules)
    }

    pub fn get(&self, key: &str) -> Option<&FieldRules<'a>> {
        self.rules.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules<'a>)> {
        self.rules.iter().map(|(key, rules)| (key.as_str(), rules))
    }
}
