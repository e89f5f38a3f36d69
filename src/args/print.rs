//! Non-interactive print mode (`--print`).

use std::fmt::Write as _;
use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use crate::logic::{display_list, selection_notice};
use crate::sources::{build_client, fetch_catalog};
use crate::state::{LoadState, Product};
use crate::theme::Settings;
use crate::util::{capitalize_words, format_price, truncate_to_width};

/// Widest title column printed before truncation.
const TITLE_COLS: usize = 40;

/// What: Render products as a plain-text table.
///
/// Inputs:
/// - `products`: Display list (already filtered and sorted)
/// - `currency`: Currency symbol for the price column
///
/// Output:
/// - One header line plus one line per product; `(no products)` when empty.
#[must_use]
pub fn render_table(products: &[&Product], currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<TITLE_COLS$}  {:>10}  {:>6}", "ID", "TITLE", "PRICE", "RATING");
    if products.is_empty() {
        out.push_str("(no products)\n");
        return out;
    }
    for p in products {
        let title = truncate_to_width(&capitalize_words(&p.title), TITLE_COLS);
        let pad = TITLE_COLS.saturating_sub(UnicodeWidthStr::width(title.as_str()));
        let _ = writeln!(
            out,
            "{:>5}  {}{}  {:>10}  {:>6.2}",
            p.id,
            title,
            " ".repeat(pad),
            format_price(p.price, currency),
            p.rating
        );
    }
    out
}

/// What: Fetch the catalog once and print the display list to stdout.
///
/// Inputs:
/// - `settings`: Resolved settings (endpoint, timeout, bucket, currency)
///
/// Output:
/// - Process exit code: `0` on success, `1` when the fetch failed.
///
/// Details:
/// - Failures are printed to stderr and logged; there is no retry in print mode.
pub async fn run_print(settings: &Settings) -> i32 {
    let client = build_client(Duration::from_secs(settings.request_timeout_secs));
    tracing::info!(endpoint = %settings.catalog_endpoint, "print mode requested from CLI");
    match fetch_catalog(&client, &settings.catalog_endpoint).await {
        Ok(catalog) => {
            let load = LoadState::Ready(catalog);
            let list = display_list(&load, settings.initial_bucket);
            println!("{}", selection_notice(settings.initial_bucket));
            print!("{}", render_table(&list, &settings.currency_symbol));
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "error fetching catalog");
            eprintln!("pricegrid: could not load catalog: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Table rows carry capitalized titles and formatted prices
    ///
    /// - Input: One product
    /// - Output: Header plus a row with `Red Lipstick` and `₹12.99`
    fn render_table_rows() {
        let p = Product {
            id: 4,
            title: "red lipstick".into(),
            price: 12.99,
            rating: 4.36,
            thumbnail: String::new(),
            brand: None,
            category: None,
            description: None,
        };
        let out = render_table(&[&p], "₹");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("TITLE"));
        assert!(lines[1].contains("Red Lipstick"));
        assert!(lines[1].contains("₹12.99"));
        assert!(lines[1].contains("4.36"));
    }

    #[test]
    /// What: Empty display lists print a placeholder row
    ///
    /// - Input: No products
    /// - Output: `(no products)`
    fn render_table_empty() {
        assert!(render_table(&[], "₹").contains("(no products)"));
    }
}
