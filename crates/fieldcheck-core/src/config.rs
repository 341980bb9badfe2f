//! Explicit validation configuration
//!
//! [`ValidationConfig`] carries the same four rule sources a [`Validate`]
//! subject exposes, as plain data. It drives [`run_with_config`](crate::run_with_config).
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::catalog::MessageCatalog;
use crate::rules::{Messages, Plugin, Plugins, Validator, Validators};
use crate::subject::Validate;

/// Strictness plus the three rule sources.
///
/// The default is non-strict with no rules.
#[derive(Debug, Default)]
pub struct ValidationConfig<'a> {
    /// Stop the whole run at the first failing validator
    pub strict: bool,
    /// Validators per field
    pub validators: Validators<'a>,
    /// Custom messages per field
    pub messages: Messages,
    /// Plugins, overridden by `validators`/`messages` on the same key
    pub plugins: Plugins<'a>,
}

impl<'a> ValidationConfig<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that stops at the first failure
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Configuration that runs every validator
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Snapshot a subject's declared rules
    pub fn from_subject<V: Validate + ?Sized>(subject: &'a V) -> Self {
        Self {
            strict: subject.is_strict(),
            validators: subject.validators(),
            messages: subject.messages(),
            plugins: subject.plugins(),
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Append one validator to a field's list
    pub fn with_validator<K: Into<String>>(mut self, key: K, validator: Validator<'a>) -> Self {
        self.validators.entry(key.into()).or_default().push(validator);
        self
    }

    /// Set a field's validator list, replacing any previous one
    pub fn with_validators<K: Into<String>>(
        mut self,
        key: K,
        validators: Vec<Validator<'a>>,
    ) -> Self {
        self.validators.insert(key.into(), validators);
        self
    }

    /// Set a field's custom messages, replacing any previous ones
    pub fn with_messages<K, I, M>(mut self, key: K, messages: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.messages
            .insert(key.into(), messages.into_iter().map(Into::into).collect());
        self
    }

    /// Overlay a catalog on the custom messages, key by key
    pub fn with_message_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.messages.extend(catalog.into_messages());
        self
    }

    pub fn with_plugin(mut self, plugin: Plugin<'a>) -> Self {
        self.plugins.push(plugin);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PluginEntry;
    use crate::subject::Base;

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::default();
        assert!(!config.strict);
        assert!(config.validators.is_empty());
        assert!(config.messages.is_empty());
        assert!(config.plugins.is_empty());

        assert!(ValidationConfig::strict().strict);
        assert!(!ValidationConfig::lenient().strict);
    }

    #[test]
    fn test_builders() {
        let config = ValidationConfig::new()
            .with_strict(true)
            .with_validator("name", Validator::new(|| None))
            .with_validator("name", Validator::new(|| None))
            .with_validators("age", vec![Validator::new(|| None)])
            .with_messages("name", ["", "too short"])
            .with_plugin(Plugin::new(|| PluginEntry::new("email", vec![], vec![])));

        assert!(config.strict);
        assert_eq!(config.validators["name"].len(), 2);
        assert_eq!(config.validators["age"].len(), 1);
        assert_eq!(config.messages["name"], vec!["".to_string(), "too short".to_string()]);
        assert_eq!(config.plugins.len(), 1);
    }

    #[test]
    fn test_with_message_catalog_overlays() {
        let catalog = MessageCatalog::from_json_str(r#"{"name": ["from catalog"]}"#).unwrap();
        let config = ValidationConfig::new()
            .with_messages("name", ["inline"])
            .with_messages("age", ["kept"])
            .with_message_catalog(catalog);

        assert_eq!(config.messages["name"], vec!["from catalog".to_string()]);
        assert_eq!(config.messages["age"], vec!["kept".to_string()]);
    }

    #[test]
    fn test_from_subject_base() {
        let config = ValidationConfig::from_subject(&Base);
        assert!(config.strict);
        assert!(config.validators.is_empty());
    }
}
