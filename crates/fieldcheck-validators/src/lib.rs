//! Fieldcheck Validators - ready-made field checks
//!
//! Each constructor captures the value to check and returns a
//! [`Validator`] for use in a subject's rule maps or plugins. Default
//! messages use the `$name` placeholder, which the engine replaces with the
//! field key unless a custom message is registered.
//!
//! ```rust
//! use fieldcheck_core::{run, Validate, Validators};
//! use fieldcheck_validators::{min_length, required};
//!
//! struct Login {
//!     username: String,
//! }
//!
//! impl Validate for Login {
//!     fn is_strict(&self) -> bool {
//!         false
//!     }
//!
//!     fn validators(&self) -> Validators<'_> {
//!         Validators::from([(
//!             "username".to_string(),
//!             vec![required(&self.username), min_length(&self.username, 3)],
//!         )])
//!     }
//! }
//!
//! let (report, ok) = run(&Login { username: String::new() });
//! assert!(!ok);
//! assert_eq!(
//!     report.get("username").unwrap(),
//!     ["username 必须存在", "username 必须大于 3 个字符"]
//! );
//! ```
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

pub mod numeric;
pub mod string;

pub use numeric::{max, min};
pub use string::{matches, max_length, min_length, one_of, required};

use fieldcheck_core::Validator;

/// Adapt a boolean predicate: fails with `message` when it returns false
pub fn custom<'a, P, M>(predicate: P, message: M) -> Validator<'a>
where
    P: Fn() -> bool + 'a,
    M: Into<String>,
{
    let message = message.into();
    Validator::new(move || (!predicate()).then(|| message.clone()))
}
