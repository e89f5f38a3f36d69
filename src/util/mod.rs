//! Small formatting helpers shared by the renderer, the print mode, and logging.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Format a price with its currency symbol.
///
/// Inputs:
/// - `price`: Non-negative amount
/// - `symbol`: Currency symbol (e.g. `₹`)
///
/// Output:
/// - Whole amounts without decimals (`₹549`); fractional amounts with two (`₹9.99`).
#[must_use]
pub fn format_price(price: f64, symbol: &str) -> String {
    if price.fract().abs() < f64::EPSILON {
        format!("{symbol}{price:.0}")
    } else {
        format!("{symbol}{price:.2}")
    }
}

/// What: Uppercase the first letter of every whitespace-separated word.
///
/// Details:
/// - Leaves the rest of each word untouched, so `iPhone 9` becomes `IPhone 9`.
#[must_use]
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// What: Truncate `s` to at most `max` terminal columns, appending `…` when cut.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Column budget
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix plus `…` whose width is `<= max`.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Extract the host part of a URL for a compact caption.
///
/// Output:
/// - `Some("cdn.dummyjson.com")` for `https://cdn.dummyjson.com/a.png`; `None` when there
///   is no `scheme://host`.
#[must_use]
pub fn url_host(url: &str) -> Option<&str> {
    let rest = url.split_once("://")?.1;
    let host = rest.split(['/', '?', '#']).next()?;
    (!host.is_empty()).then_some(host)
}

/// What: Render a star rating such as `★ 4.94`.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("★ {rating:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Prices print without trailing zeros for whole amounts
    ///
    /// - Input: 549.0 and 9.99
    /// - Output: `₹549` and `₹9.99`
    fn format_price_whole_and_fractional() {
        assert_eq!(format_price(549.0, "₹"), "₹549");
        assert_eq!(format_price(9.99, "₹"), "₹9.99");
        assert_eq!(format_price(0.5, "$"), "$0.50");
    }

    #[test]
    /// What: Word capitalization mirrors CSS `text-transform: capitalize`
    ///
    /// - Input: "essence mascara  lash princess"
    /// - Output: Each word capitalized, spacing preserved
    fn capitalize_words_each_word() {
        assert_eq!(
            capitalize_words("essence mascara  lash princess"),
            "Essence Mascara  Lash Princess"
        );
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    /// What: Truncation respects display width, including wide glyphs
    ///
    /// - Input: ASCII and CJK text with small budgets
    /// - Output: Fits budget with ellipsis
    fn truncate_to_width_counts_columns() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        let t = truncate_to_width("日本語テキスト", 6);
        assert!(UnicodeWidthStr::width(t.as_str()) <= 6);
        assert!(t.ends_with('…'));
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    /// What: Host extraction handles paths, queries, and bad input
    ///
    /// - Input: Full URL, URL with query, bare string
    /// - Output: Host or `None`
    fn url_host_extracts() {
        assert_eq!(
            url_host("https://cdn.dummyjson.com/products/1/thumbnail.png"),
            Some("cdn.dummyjson.com")
        );
        assert_eq!(url_host("http://img.test?x=1"), Some("img.test"));
        assert_eq!(url_host("thumbnail.png"), None);
    }
}
