//! Fieldcheck - field-level validation orchestrator
//!
//! A subject declares, per named field, an ordered list of validators and
//! optional custom error messages. This crate merges those rules, runs them
//! and produces a per-field [`ErrorReport`].
//!
//! ## Rule sources
//!
//! Rules come from three places, merged fresh on every run:
//! - **Plugins**: closures bundling a key with its validators and messages
//! - **Validators**: field key -> ordered validator list
//! - **Messages**: field key -> custom messages, aligned by position with the validators
//!
//! Explicit validators replace plugin rules for the same key. A later plugin
//! replaces an earlier one. Messages without matching validators are ignored.
//!
//! ## Messages
//!
//! When validator `i` of a field fails, custom message `i` is reported if it
//! exists and is non-empty. Otherwise the validator's own diagnostic is used
//! with `$name` replaced by the field key.
//!
//! ## Strict mode
//!
//! A strict run stops at the first failing validator across all fields.
//! Fields are visited in first-declaration order, plugins first.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck_core::{run, Messages, Validate, Validator, Validators};
//!
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Validate for User {
//!     fn is_strict(&self) -> bool {
//!         false
//!     }
//!
//!     fn validators(&self) -> Validators<'_> {
//!         Validators::from([
//!             (
//!                 "name".to_string(),
//!                 vec![Validator::new(move || {
//!                     self.name.is_empty().then(|| "$name 必须存在".to_string())
//!                 })],
//!             ),
//!             (
//!                 "age".to_string(),
//!                 vec![Validator::new(move || {
//!                     (self.age < 10).then(|| "$name 不能小于 10".to_string())
//!                 })],
//!             ),
//!         ])
//!     }
//!
//!     fn messages(&self) -> Messages {
//!         Messages::from([("name".to_string(), vec!["用户名必须存在".to_string()])])
//!     }
//! }
//!
//! let (report, ok) = run(&User { name: String::new(), age: 9 });
//! assert!(!ok);
//! assert_eq!(report.get("name").unwrap(), ["用户名必须存在"]);
//! assert_eq!(report.get("age").unwrap(), ["age 不能小于 10"]);
//! ```
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod config;
pub mod error;
pub mod executor;
pub mod registry;
pub mod report;
pub mod rules;
pub mod subject;
pub mod template;

// Re-export commonly used types for convenience
pub use catalog::MessageCatalog;
pub use config::ValidationConfig;
pub use error::{ConfigError, ConfigResult};
pub use registry::{FieldRules, RuleRegistry};
pub use report::{ErrorReport, ValidationResult};
pub use rules::{Messages, Plugin, PluginEntry, Plugins, Validator, Validators};
pub use subject::{Base, Validate};

use tracing::debug_span;

/// Validate a subject against its own declared rules.
///
/// Returns the report and `true` if no validator failed.
pub fn run<V: Validate + ?Sized>(subject: &V) -> (ErrorReport, bool) {
    let _span = debug_span!("run", subject = std::any::type_name::<V>()).entered();

    let registry = RuleRegistry::merge(subject.plugins(), subject.validators(), subject.messages());
    executor::execute(subject.is_strict(), &registry)
}

/// Validate using an explicit configuration instead of the subject's rules.
///
/// The subject is not queried; it only identifies the run in traces.
pub fn run_with_config<V: ?Sized>(
    _subject: &V,
    config: ValidationConfig<'_>,
) -> (ErrorReport, bool) {
    let _span = debug_span!("run_with_config", subject = std::any::type_name::<V>()).entered();

    let ValidationConfig {
        strict,
        validators,
        messages,
        plugins,
    } = config;
    let registry = RuleRegistry::merge(plugins, validators, messages);
    executor::execute(strict, &registry)
}
