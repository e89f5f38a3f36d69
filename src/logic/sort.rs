use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

use crate::state::Product;

thread_local! {
    /// Root-locale collator at secondary strength: accents count, case does not.
    static TITLE_COLLATOR: Option<CollatorBorrowed<'static>> = build_collator();
}

/// What: Build the title collator from the compiled-in root collation data.
///
/// Output:
/// - `Some(collator)`, or `None` (logged) when the data cannot be loaded.
fn build_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(CollatorPreferences::default(), options)
        .inspect_err(|e| {
            tracing::warn!(error = %e, "title collator unavailable; using lowercase comparison");
        })
        .ok()
}

/// What: Compare two titles locale-aware and case-insensitively.
///
/// Inputs:
/// - `a`, `b`: Titles to compare
///
/// Output:
/// - Root-locale collation order, ignoring case differences.
///
/// Details:
/// - Accented letters sort next to their base letter (`éclair` between `apple` and `zebra`).
/// - Titles that differ only in case compare `Equal`, so a stable sort keeps their
///   original relative order.
/// - Falls back to comparing Unicode-lowercased characters if the collator failed to load.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| {
        collator.as_ref().map_or_else(
            || {
                a.chars()
                    .flat_map(char::to_lowercase)
                    .cmp(b.chars().flat_map(char::to_lowercase))
            },
            |c| c.compare(a, b),
        )
    })
}

/// What: Sort products ascending by title.
///
/// Inputs:
/// - `products`: Product references in any order
///
/// Output:
/// - The same references, sorted by [`compare_titles`].
///
/// Details:
/// - Stable (`sort_by` is a merge sort), so equal titles keep their input order and
///   sorting an already sorted list leaves it unchanged.
#[must_use]
pub fn sort_by_title(mut products: Vec<&Product>) -> Vec<&Product> {
    products.sort_by(|a, b| compare_titles(&a.title, &b.title));
    products
}
