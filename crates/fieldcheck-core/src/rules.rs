//! Rule building blocks: validators, plugins and the per-field rule maps
//!
//! A validator is a zero-argument check that captures the value it inspects
//! when it is built. The engine only ever calls it and looks at the returned
//! diagnostic; it never sees field values.
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use std::fmt;

/// Field key -> ordered validator list
pub type Validators<'a> = IndexMap<String, Vec<Validator<'a>>>;

/// Field key -> ordered custom messages, aligned by position with the validators
pub type Messages = IndexMap<String, Vec<String>>;

/// Ordered plugin list
pub type Plugins<'a> = Vec<Plugin<'a>>;

/// A single captured check for one field.
///
/// The closure returns `None` (or an empty string) on success and a
/// diagnostic on failure. Diagnostics may contain the `$name` placeholder,
/// which is replaced with the field key when no custom message applies.
pub struct Validator<'a> {
    check: Box<dyn Fn() -> Option<String> + 'a>,
}

impl<'a> Validator<'a> {
    /// Wrap a check closure
    pub fn new<F>(check: F) -> Self
    where
        F: Fn() -> Option<String> + 'a,
    {
        Self {
            check: Box::new(check),
        }
    }

    /// Run the check, returning the diagnostic if it failed
    pub fn check(&self) -> Option<String> {
        (self.check)().filter(|message| !message.is_empty())
    }
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Validators and custom messages declared together for one field
#[derive(Debug)]
pub struct PluginEntry<'a> {
    pub key: String,
    pub validators: Vec<Validator<'a>>,
    pub messages: Vec<String>,
}

impl<'a> PluginEntry<'a> {
    pub fn new<K: Into<String>>(
        key: K,
        validators: Vec<Validator<'a>>,
        messages: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            validators,
            messages,
        }
    }
}

/// Deferred builder for a [`PluginEntry`].
///
/// Plugins are invoked once per run, during registry merge. A plugin that
/// yields nothing makes no contribution.
pub struct Plugin<'a> {
    build: Box<dyn Fn() -> Option<PluginEntry<'a>> + 'a>,
}

impl<'a> Plugin<'a> {
    /// Plugin that always produces an entry
    pub fn new<F>(build: F) -> Self
    where
        F: Fn() -> PluginEntry<'a> + 'a,
    {
        Self {
            build: Box::new(move || Some(build())),
        }
    }

    /// Plugin that may decline to produce an entry
    pub fn optional<F>(build: F) -> Self
    where
        F: Fn() -> Option<PluginEntry<'a>> + 'a,
    {
        Self {
            build: Box::new(build),
        }
    }

    pub fn build(&self) -> Option<PluginEntry<'a>> {
        (self.build)()
    }
}

impl fmt::Debug for Plugin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Plugin(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_empty_diagnostic_is_success() {
        assert_eq!(Validator::new(|| None).check(), None);
        assert_eq!(Validator::new(|| Some(String::new())).check(), None);
        assert_eq!(
            Validator::new(|| Some("bad".to_string())).check(),
            Some("bad".to_string())
        );
    }

    #[test]
    fn test_validator_borrows_captured_value() {
        let name = String::from("");
        let validator = Validator::new(|| name.is_empty().then(|| "$name 必须存在".to_string()));
        assert_eq!(validator.check().as_deref(), Some("$name 必须存在"));
    }

    #[test]
    fn test_plugin_build() {
        let plugin =
            Plugin::new(|| PluginEntry::new("name", vec![Validator::new(|| None)], vec![]));
        let entry = plugin.build().unwrap();
        assert_eq!(entry.key, "name");
        assert_eq!(entry.validators.len(), 1);

        let empty = Plugin::optional(|| None);
        assert!(empty.build().is_none());
    }
}
