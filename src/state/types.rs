//! Core value types used by pricegrid state.

use serde::Deserialize;

/// Single product entry as returned by the catalog endpoint.
///
/// Products are immutable once decoded; the pipeline only ever hands out
/// shared references into the [`Catalog`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Display title; the sort key.
    pub title: String,
    /// Non-negative price in the catalog's currency.
    pub price: f64,
    /// Average rating (0.0 to 5.0 on the reference endpoint).
    #[serde(default)]
    pub rating: f64,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Brand name when the endpoint provides one.
    #[serde(default)]
    pub brand: Option<String>,
    /// Category slug when the endpoint provides one.
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form description when the endpoint provides one.
    #[serde(default)]
    pub description: Option<String>,
}

/// What: The full, unfiltered product collection from one successful fetch.
///
/// Details:
/// - Order is the order the endpoint returned.
/// - There is no mutable accessor: once built, the catalog never changes, so every
///   filter selection starts again from the same original sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    /// Products in endpoint order.
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap a decoded product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Products in their original order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// What: Fixed price-range filter options offered in the filter panel.
///
/// Details:
/// - Every non-`All` bucket is a closed interval; both bounds are inclusive.
/// - The set is closed on purpose: there is no way to build an arbitrary range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    /// No price restriction.
    #[default]
    All,
    /// Price 10 to 50.
    From10To50,
    /// Price 50 to 100.
    From50To100,
    /// Price 100 to 500.
    From100To500,
    /// Price 500 to 2000.
    From500To2000,
}

impl PriceBucket {
    /// All buckets in the order the filter panel lists them.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::From10To50,
        Self::From50To100,
        Self::From100To500,
        Self::From500To2000,
    ];

    /// What: Return the inclusive `(min, max)` bounds of this bucket.
    ///
    /// Output:
    /// - `None` for [`PriceBucket::All`]; `Some((min, max))` otherwise.
    #[must_use]
    pub const fn bounds(self) -> Option<(u32, u32)> {
        match self {
            Self::All => None,
            Self::From10To50 => Some((10, 50)),
            Self::From50To100 => Some((50, 100)),
            Self::From100To500 => Some((100, 500)),
            Self::From500To2000 => Some((500, 2000)),
        }
    }

    /// Label shown in the filter panel (e.g. `10 - 50`).
    #[must_use]
    pub fn label(self) -> String {
        self.bounds()
            .map_or_else(|| "All".to_string(), |(min, max)| format!("{min} - {max}"))
    }

    /// Position of this bucket in [`PriceBucket::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    /// Bucket at `index` in [`PriceBucket::ALL`], if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// What: Parse a bucket from its CLI/settings spelling.
    ///
    /// Inputs:
    /// - `s`: `all`, or `min-max` matching one of the fixed buckets (spaces allowed around `-`)
    ///
    /// Output:
    /// - `Some(bucket)` when `s` names a known bucket; `None` otherwise.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        let (lo, hi) = t.split_once('-')?;
        let lo: u32 = lo.trim().parse().ok()?;
        let hi: u32 = hi.trim().parse().ok()?;
        Self::ALL
            .into_iter()
            .find(|b| b.bounds() == Some((lo, hi)))
    }
}

/// What: Lifecycle of the single catalog fetch.
///
/// Details:
/// - `Loading` until the loader reports back, then `Ready` or `Failed`.
/// - `Failed` may return to `Loading` only through an explicit retry.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Fetch succeeded.
    Ready(Catalog),
    /// Fetch failed; holds the user-facing error message.
    Failed(String),
}

impl LoadState {
    /// Loaded catalog, when the fetch has succeeded.
    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(c) => Some(c),
            _ => None,
        }
    }

    /// Whether a fetch is currently outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Top-level JSON body returned by the catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    /// Products in endpoint order.
    pub products: Vec<Product>,
}
