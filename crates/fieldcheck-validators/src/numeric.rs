//! Ordered-value bounds
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use fieldcheck_core::Validator;
use std::fmt::Display;

/// Fails when `value` is less than `bound`
pub fn min<'a, T>(value: T, bound: T) -> Validator<'a>
where
    T: PartialOrd + Display + 'a,
{
    Validator::new(move || (value < bound).then(|| format!("$name 不能小于 {}", bound)))
}

/// Fails when `value` is greater than `bound`
pub fn max<'a, T>(value: T, bound: T) -> Validator<'a>
where
    T: PartialOrd + Display + 'a,
{
    Validator::new(move || (value > bound).then(|| format!("$name 不能大于 {}", bound)))
}
