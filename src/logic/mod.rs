//! Core non-UI logic: the fetch/sort/filter pipeline and the state transitions around it.

pub mod filter;
pub mod load;
pub mod selection;
pub mod sort;

pub use filter::{filter_by_bucket, select_bucket, selection_notice};
pub use load::{apply_load_result, begin_retry};
pub use selection::{ensure_visible, move_rows, move_selection};
pub use sort::{compare_titles, sort_by_title};

use crate::state::{LoadState, PriceBucket, Product};

/// What: Derive the display list from the load state and the applied bucket.
///
/// Inputs:
/// - `load`: Catalog fetch state
/// - `selection`: Applied price bucket
///
/// Output:
/// - `Sort(Filter(selection, original))`; empty while loading or after a failure.
///
/// Details:
/// - Pure: the same inputs always yield the same list, and nothing is cached.
#[must_use]
pub fn display_list(load: &LoadState, selection: PriceBucket) -> Vec<&Product> {
    load.catalog().map_or_else(Vec::new, |catalog| {
        sort_by_title(filter_by_bucket(selection, catalog))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Catalog;

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.into(),
            price,
            rating: 4.0,
            thumbnail: String::new(),
            brand: None,
            category: None,
            description: None,
        }
    }

    #[test]
    /// What: Display list filters first, then sorts by title
    ///
    /// - Input: Three products, bucket 10-50 excluding one
    /// - Output: Remaining two in title order
    fn display_filters_then_sorts() {
        let load = LoadState::Ready(Catalog::new(vec![
            product(1, "zebra mug", 20.0),
            product(2, "Anchor", 700.0),
            product(3, "apple tray", 45.0),
        ]));
        let ids: Vec<u64> = display_list(&load, PriceBucket::From10To50)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    /// What: Loading and failed states never display products
    ///
    /// - Input: `Loading` and `Failed`
    /// - Output: Empty lists
    fn display_empty_without_catalog() {
        assert!(display_list(&LoadState::Loading, PriceBucket::All).is_empty());
        assert!(display_list(&LoadState::Failed("x".into()), PriceBucket::All).is_empty());
    }
}
