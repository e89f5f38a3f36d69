//! Modal dialog state for the UI.

use crate::state::types::PriceBucket;

/// What: Overlay currently shown above the product grid.
///
/// - Input: Set by key handlers (`f` opens the filter panel, `Esc` closes it).
/// - Output: Tells the renderer which overlay to draw and routes key events.
/// - Details: Only one overlay is visible at a time; `None` means the grid has focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay; keys go to the grid.
    #[default]
    None,
    /// Price filter panel listing every [`PriceBucket`].
    PriceFilter {
        /// Highlighted row in [`PriceBucket::ALL`].
        cursor: usize,
    },
}

impl Modal {
    /// What: Build the filter panel with the cursor on the active bucket.
    ///
    /// Inputs:
    /// - `active`: Currently applied bucket
    ///
    /// Output:
    /// - `Modal::PriceFilter` whose cursor points at `active`.
    #[must_use]
    pub fn price_filter(active: PriceBucket) -> Self {
        Self::PriceFilter {
            cursor: active.index(),
        }
    }

    /// Whether the filter panel is open.
    #[must_use]
    pub const fn is_filter_open(&self) -> bool {
        matches!(self, Self::PriceFilter { .. })
    }
}
