//! Configuration file parsing utilities.
//!
//! Helpers for the `key = value` format of `settings.conf`: comment skipping,
//! key/value splitting, inline comment removal, and boolean spellings.

/// What: Check if a line should be skipped (empty or comment).
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Split a `key = value` line on its first `=`.
///
/// Output:
/// - `Some((key, value))` with both sides trimmed; `None` when there is no `=` or the key
///   is empty.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

/// What: Remove a trailing ` # comment` or ` // comment` from a value.
///
/// Details:
/// - Only strips markers preceded by whitespace, so URLs (`https://`) and currency
///   values like `#` survive.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    for marker in [" #", "\t#", " //", "\t//"] {
        if let Some(i) = s.find(marker) {
            end = end.min(i);
        }
    }
    s[..end].trim()
}

/// What: Interpret common boolean spellings.
///
/// Output:
/// - `Some(true)` for `true/1/yes/on`, `Some(false)` for `false/0/no/off`, `None` otherwise.
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comments are stripped without breaking URLs
    ///
    /// - Input: URL value with trailing comment; bare `#`
    /// - Output: URL intact; `#` kept
    fn strip_inline_comment_keeps_urls() {
        assert_eq!(
            strip_inline_comment("https://a.test/x  # mirror"),
            "https://a.test/x"
        );
        assert_eq!(strip_inline_comment("https://a.test//x"), "https://a.test//x");
        assert_eq!(strip_inline_comment("#"), "#");
    }

    #[test]
    /// What: Key/value split uses the first `=` only
    ///
    /// - Input: `a = b=c`, `= x`, `novalue`
    /// - Output: `("a", "b=c")`, `None`, `None`
    fn parse_key_value_first_equals() {
        assert_eq!(
            parse_key_value("a = b=c"),
            Some(("a".to_string(), "b=c".to_string()))
        );
        assert_eq!(parse_key_value("= x"), None);
        assert_eq!(parse_key_value("novalue"), None);
        assert!(skip_comment_or_empty("  ; note"));
        assert_eq!(parse_bool("On"), Some(true));
        assert_eq!(parse_bool("maybe"), None);
    }
}
