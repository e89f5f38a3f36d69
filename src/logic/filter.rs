use crate::state::{AppState, Catalog, Modal, PriceBucket, Product};

/// What: Select the products of `catalog` that fall inside `bucket`.
///
/// Inputs:
/// - `bucket`: Applied price bucket
/// - `catalog`: The original, unfiltered catalog
///
/// Output:
/// - References in original catalog order; every product for `PriceBucket::All`.
///
/// Details:
/// - Bounds are inclusive on both ends.
/// - Always reads the original catalog, so consecutive selections never compound.
#[must_use]
pub fn filter_by_bucket(bucket: PriceBucket, catalog: &Catalog) -> Vec<&Product> {
    match bucket.bounds() {
        None => catalog.products().iter().collect(),
        Some((min, max)) => {
            let (min, max) = (f64::from(min), f64::from(max));
            catalog
                .products()
                .iter()
                .filter(|p| p.price >= min && p.price <= max)
                .collect()
        }
    }
}

/// What: Toast text announcing an applied bucket.
///
/// Output:
/// - `"All Options selected"` or `"Price {min} to {max} has been selected!"`.
#[must_use]
pub fn selection_notice(bucket: PriceBucket) -> String {
    bucket.bounds().map_or_else(
        || "All Options selected".to_string(),
        |(min, max)| format!("Price {min} to {max} has been selected!"),
    )
}

/// What: Apply a bucket chosen in the filter panel.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `bucket`: Bucket the user picked
///
/// Output:
/// - Updates `app.selection`, resets the grid cursor, shows the toast, closes the panel.
///
/// Details:
/// - `All` always applies and toasts.
/// - A price bucket picked while no catalog is loaded is ignored: the panel closes and
///   `selection` is left as it was, so the catalog shows unfiltered once it arrives.
pub fn select_bucket(app: &mut AppState, bucket: PriceBucket) {
    app.modal = Modal::None;
    if bucket != PriceBucket::All && app.catalog().is_none() {
        tracing::info!(
            bucket = %bucket.label(),
            "price bucket ignored; catalog not loaded"
        );
        return;
    }
    app.selection = bucket;
    app.selected = 0;
    app.scroll_row = 0;
    app.show_toast(selection_notice(bucket));
    tracing::info!(
        bucket = %bucket.label(),
        shown = app.display().len(),
        "price bucket selected"
    );
}
