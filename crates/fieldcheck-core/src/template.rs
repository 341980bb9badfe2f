//! Placeholder substitution for default error messages
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

/// Placeholder replaced with the field key in default messages
pub const NAME_PLACEHOLDER: &str = "$name";

/// Replace every literal occurrence of each token with its value.
///
/// The template is scanned once, left to right. At each position the tokens
/// are tried in the order given and the first match wins. Inserted values are
/// never scanned again, so a value containing a token is emitted as-is.
/// Empty tokens never match.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_core::template::render;
///
/// let message = render("$name 不能小于 10", &[("$name", "age")]);
/// assert_eq!(message, "age 不能小于 10");
/// ```
pub fn render(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        for (token, value) in replacements {
            if !token.is_empty() && rest.starts_with(token) {
                output.push_str(value);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            output.push(c);
        }
        rest = chars.as_str();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_occurrence() {
        let rendered = render("$name: $name is invalid", &[(NAME_PLACEHOLDER, "email")]);
        assert_eq!(rendered, "email: email is invalid");
    }

    #[test]
    fn test_render_without_tokens_is_identity() {
        assert_eq!(render("nothing to do", &[(NAME_PLACEHOLDER, "x")]), "nothing to do");
        assert_eq!(render("", &[(NAME_PLACEHOLDER, "x")]), "");
        assert_eq!(render("$nam", &[(NAME_PLACEHOLDER, "x")]), "$nam");
    }

    #[test]
    fn test_render_is_single_pass() {
        // The inserted value contains the token but must not be expanded again
        let rendered = render("$name!", &[(NAME_PLACEHOLDER, "$name$name")]);
        assert_eq!(rendered, "$name$name!");
    }

    #[test]
    fn test_render_prefers_earlier_token_at_same_position() {
        let rendered = render("$name_id", &[("$name", "A"), ("$name_id", "B")]);
        assert_eq!(rendered, "A_id");

        let rendered = render("$name_id", &[("$name_id", "B"), ("$name", "A")]);
        assert_eq!(rendered, "B");
    }

    #[test]
    fn test_render_handles_multibyte_text() {
        let rendered = render("字段 $name 必须存在", &[(NAME_PLACEHOLDER, "用户名")]);
        assert_eq!(rendered, "字段 用户名 必须存在");
    }

    #[test]
    fn test_render_ignores_empty_token() {
        assert_eq!(render("abc", &[("", "x")]), "abc");
    }
}
