//! String validators
//!
//! Lengths are counted in characters, not bytes.
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use fieldcheck_core::Validator;
use regex::Regex;

/// Fails on an empty string
pub fn required(value: &str) -> Validator<'_> {
    Validator::new(move || value.is_empty().then(|| "$name 必须存在".to_string()))
}

/// Fails when `value` has fewer than `min` characters
pub fn min_length(value: &str, min: usize) -> Validator<'_> {
    Validator::new(move || {
        (value.chars().count() < min).then(|| format!("$name 必须大于 {} 个字符", min))
    })
}

/// Fails when `value` has more than `max` characters
pub fn max_length(value: &str, max: usize) -> Validator<'_> {
    Validator::new(move || {
        (value.chars().count() > max).then(|| format!("$name 不能超过 {} 个字符", max))
    })
}

/// Fails unless `value` is one of `allowed`
pub fn one_of<'a>(value: &'a str, allowed: &'a [&'a str]) -> Validator<'a> {
    Validator::new(move || {
        (!allowed.contains(&value))
            .then(|| format!("$name 必须是 {} 之一", allowed.join(", ")))
    })
}

/// Fails unless `pattern` matches `value`
pub fn matches<'a>(value: &'a str, pattern: &'a Regex) -> Validator<'a> {
    Validator::new(move || (!pattern.is_match(value)).then(|| "$name 格式不正确".to_string()))
}
