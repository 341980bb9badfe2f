//! Validation executor
//!
//! Runs every field's validators in declared order and resolves each failure
//! to its reported message. In strict mode the whole run stops at the first
//! failure, whichever field it belongs to.
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::registry::RuleRegistry;
use crate::report::ErrorReport;
use crate::template::{render, NAME_PLACEHOLDER};
use tracing::{debug, trace};

/// Execute a merged registry, returning the report and whether every check passed
pub fn execute(strict: bool, registry: &RuleRegistry<'_>) -> (ErrorReport, bool) {
    let mut report = ErrorReport::new();

    for (key, rules) in registry.iter() {
        for (index, validator) in rules.validators.iter().enumerate() {
            let Some(diagnostic) = validator.check() else {
                continue;
            };

            let message = match rules.custom_message(index) {
                Some(custom) => custom.to_string(),
                None => render(&diagnostic, &[(NAME_PLACEHOLDER, key)]),
            };
            trace!(field = key, index, %message, "validator failed");
            report.add(key, message);

            if strict {
                debug!(field = key, index, "strict mode: stopping at first failure");
                return (report, false);
            }
        }
    }

    let ok = report.is_empty();
    (report, ok)
}
