//! Property-based tests for the validation engine
//!
//! These tests verify placeholder substitution and run-level behavior
//! across generated rule sets.

use fieldcheck_core::template::{render, NAME_PLACEHOLDER};
use fieldcheck_core::{
    run, run_with_config, Base, ValidationConfig, Validate, Validator, Validators,
};
use proptest::prelude::*;

/// Generated subject: each field holds a list of outcomes, `Some` meaning failure
#[derive(Debug, Clone)]
struct Generated {
    strict: bool,
    fields: Vec<(String, Vec<Option<String>>)>,
}

impl Validate for Generated {
    fn is_strict(&self) -> bool {
        self.strict
    }

    fn validators(&self) -> Validators<'_> {
        self.fields
            .iter()
            .map(|(key, outcomes)| {
                let validators: Vec<_> = outcomes
                    .iter()
                    .map(|outcome| Validator::new(move || outcome.clone()))
                    .collect();
                (key.clone(), validators)
            })
            .collect()
    }
}

fn generated_strategy() -> impl Strategy<Value = Generated> {
    (
        any::<bool>(),
        proptest::collection::vec(
            (
                "[a-z]{1,8}",
                proptest::collection::vec(proptest::option::of("[a-z $]{1,12}"), 0..4),
            ),
            0..5,
        ),
    )
        .prop_map(|(strict, mut fields)| {
            // Field keys are unique in a validators map
            let mut seen = std::collections::HashSet::new();
            fields.retain(|(key, _)| seen.insert(key.clone()));
            Generated { strict, fields }
        })
}

proptest! {
    #[test]
    fn render_without_token_is_identity(text in "[^$]{0,40}") {
        prop_assert_eq!(render(&text, &[(NAME_PLACEHOLDER, "field")]), text);
    }

    #[test]
    fn render_removes_every_token(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        key in "[a-z_]{1,10}",
    ) {
        let template = format!("{}$name{}$name", prefix, suffix);
        let rendered = render(&template, &[(NAME_PLACEHOLDER, key.as_str())]);
        prop_assert!(!rendered.contains(NAME_PLACEHOLDER));
        prop_assert_eq!(rendered, format!("{}{}{}{}", prefix, key, suffix, key));
    }

    #[test]
    fn render_does_not_rescan_values(count in 1usize..5) {
        let template = NAME_PLACEHOLDER.repeat(count);
        let rendered = render(&template, &[(NAME_PLACEHOLDER, NAME_PLACEHOLDER)]);
        prop_assert_eq!(rendered, template);
    }

    #[test]
    fn run_is_idempotent(subject in generated_strategy()) {
        prop_assert_eq!(run(&subject), run(&subject));
    }

    #[test]
    fn entry_points_agree(subject in generated_strategy()) {
        let direct = run(&subject);
        let configured = run_with_config(&Base, ValidationConfig::from_subject(&subject));
        prop_assert_eq!(direct, configured);
    }

    #[test]
    fn report_never_holds_empty_lists(subject in generated_strategy()) {
        let (report, ok) = run(&subject);
        prop_assert_eq!(ok, report.is_empty());
        for (_, messages) in report.iter() {
            prop_assert!(!messages.is_empty());
        }
    }

    #[test]
    fn strict_reports_at_most_one_message(subject in generated_strategy()) {
        let strict = Generated { strict: true, ..subject };
        let (report, _) = run(&strict);
        prop_assert!(report.message_count() <= 1);
    }

    #[test]
    fn non_strict_reports_every_failure(subject in generated_strategy()) {
        let lenient = Generated { strict: false, ..subject };
        let expected: usize = lenient
            .fields
            .iter()
            .flat_map(|(_, outcomes)| outcomes.iter())
            .filter(|outcome| outcome.is_some())
            .count();
        let (report, _) = run(&lenient);
        prop_assert_eq!(report.message_count(), expected);
    }
}
