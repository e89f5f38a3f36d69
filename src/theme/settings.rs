use std::path::Path;

use tracing::{debug, warn};

use crate::sources::DEFAULT_ENDPOINT;
use crate::state::PriceBucket;
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty, strip_inline_comment};

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Product-listing endpoint.
    pub catalog_endpoint: String,
    /// Overall HTTP timeout for the catalog request, in seconds.
    pub request_timeout_secs: u64,
    /// How long a toast stays visible, in milliseconds.
    pub toast_duration_ms: u64,
    /// Number of card columns in the grid (1 to 4).
    pub grid_columns: u16,
    /// Symbol printed before prices.
    pub currency_symbol: String,
    /// Bucket applied at startup.
    pub initial_bucket: PriceBucket,
    /// Whether the keybind footer is shown.
    pub show_keybinds_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 30,
            toast_duration_ms: 2000,
            grid_columns: 2,
            currency_symbol: "₹".to_string(),
            initial_bucket: PriceBucket::All,
            show_keybinds_footer: true,
        }
    }
}

/// Largest accepted column count.
const MAX_COLUMNS: u16 = 4;

/// What: Parse settings from `settings.conf` content into `settings`.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Mutable settings pre-filled with defaults
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys are treated as `_`.
/// - Invalid values keep the previous value and log a warning; unknown keys are logged
///   and skipped.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = parse_key_value(line) else {
            warn!(line = %line.trim(), "settings line without '='; skipped");
            continue;
        };
        let key = raw_key.to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(&raw_val);
        match key.as_str() {
            "catalog_endpoint" | "endpoint" => {
                if val.starts_with("http://") || val.starts_with("https://") {
                    settings.catalog_endpoint = val.to_string();
                } else {
                    warn!(value = %val, "catalog_endpoint must be an http(s) URL; keeping default");
                }
            }
            "request_timeout_secs" | "timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.request_timeout_secs = v,
                _ => warn!(value = %val, "invalid request_timeout_secs"),
            },
            "toast_duration_ms" => match val.parse::<u64>() {
                Ok(v) => settings.toast_duration_ms = v,
                Err(_) => warn!(value = %val, "invalid toast_duration_ms"),
            },
            "grid_columns" | "columns" => match val.parse::<u16>() {
                Ok(v) if (1..=MAX_COLUMNS).contains(&v) => settings.grid_columns = v,
                _ => warn!(value = %val, max = MAX_COLUMNS, "invalid grid_columns"),
            },
            "currency_symbol" | "currency" => {
                settings.currency_symbol = val.trim_matches('"').to_string();
            }
            "default_bucket" | "initial_bucket" => match PriceBucket::parse(val) {
                Some(b) => settings.initial_bucket = b,
                None => warn!(value = %val, "unknown price bucket"),
            },
            "show_keybinds_footer" => match parse_bool(val) {
                Some(b) => settings.show_keybinds_footer = b,
                None => warn!(value = %val, "invalid show_keybinds_footer"),
            },
            _ => debug!(key = %key, "unknown settings key ignored"),
        }
    }
}

/// What: Load settings from `settings.conf` when present.
///
/// Inputs:
/// - `path`: Explicit file to read; when `None`, [`super::resolve_settings_config_path`] is used
///
/// Output:
/// - Parsed settings, or `Settings::default()` when no file exists or it cannot be read.
#[must_use]
pub fn load_settings(path: Option<&Path>) -> Settings {
    let mut out = Settings::default();
    let resolved = path
        .map(Path::to_path_buf)
        .or_else(super::resolve_settings_config_path);
    let Some(p) = resolved else {
        debug!("no settings.conf found; using defaults");
        return out;
    };
    match std::fs::read_to_string(&p) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            debug!(path = %p.display(), "settings loaded");
        }
        Err(e) => warn!(path = %p.display(), error = %e, "failed to read settings.conf"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Valid keys override defaults, comments and aliases are honored
    ///
    /// - Input: Mixed-case keys, inline comments, alias spellings
    /// - Output: Every field updated
    fn parse_settings_reads_all_keys() {
        let content = "\
# pricegrid settings
Catalog-Endpoint = https://example.test/products  # local mirror
request_timeout_secs = 5
toast_duration_ms = 1500
columns = 3
currency_symbol = \"$\"
default_bucket = 100-500
show_keybinds_footer = off
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.catalog_endpoint, "https://example.test/products");
        assert_eq!(s.request_timeout_secs, 5);
        assert_eq!(s.toast_duration_ms, 1500);
        assert_eq!(s.grid_columns, 3);
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.initial_bucket, PriceBucket::From100To500);
        assert!(!s.show_keybinds_footer);
    }

    #[test]
    /// What: Invalid values keep defaults
    ///
    /// - Input: Non-URL endpoint, zero timeout, 9 columns, unknown bucket, junk line
    /// - Output: Defaults unchanged
    fn parse_settings_rejects_invalid_values() {
        let content = "endpoint = ftp://nope\ntimeout_secs = 0\ngrid_columns = 9\ndefault_bucket = 1-2\njunk\n";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Explicit settings file is read from disk
    ///
    /// - Input: Temp file with `grid_columns = 1`
    /// - Output: Loaded settings reflect the file
    fn load_settings_from_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "grid_columns = 1\n").expect("write");
        let s = load_settings(Some(&path));
        assert_eq!(s.grid_columns, 1);
    }
}
