//! Validation subject capability trait
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::report::ValidationResult;
use crate::rules::{Messages, Plugins, Validators};

/// Something that declares its own validation rules.
///
/// Every method has a default, so a subject only overrides what it needs:
/// strict by default, with no validators, messages or plugins.
///
/// Rules from [`Validate::validators`] and [`Validate::messages`] replace any
/// rules a plugin registered for the same field.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_core::{run, Validate, Validator, Validators};
///
/// struct Signup {
///     username: String,
/// }
///
/// impl Validate for Signup {
///     fn validators(&self) -> Validators<'_> {
///         Validators::from([(
///             "username".to_string(),
///             vec![Validator::new(move || {
///                 self.username.is_empty().then(|| "$name is required".to_string())
///             })],
///         )])
///     }
/// }
///
/// let (report, ok) = run(&Signup { username: String::new() });
/// assert!(!ok);
/// assert_eq!(report.get("username").unwrap(), ["username is required"]);
/// ```
pub trait Validate {
    /// Stop the whole run at the first failing validator
    fn is_strict(&self) -> bool {
        true
    }

    /// Validators per field, run in the order given
    fn validators(&self) -> Validators<'_> {
        Validators::new()
    }

    /// Custom messages per field, aligned by position with the validators
    fn messages(&self) -> Messages {
        Messages::new()
    }

    /// Bundled key/validators/messages builders, overridden by the explicit maps
    fn plugins(&self) -> Plugins<'_> {
        Plugins::new()
    }

    /// Run this subject's own rules, failing with the report if any check fails
    fn validate(&self) -> ValidationResult<()> {
        let (report, _) = crate::run(self);
        report.into_result()
    }
}

/// Subject with every default and no rules.
///
/// Embed it in types that only need an identity, e.g. for
/// [`run_with_config`](crate::run_with_config).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base;

impl Validate for Base {}
