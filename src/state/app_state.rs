//! Central mutable application state owned by the event loop.

use std::time::{Duration, Instant};

use crate::state::modal::Modal;
use crate::state::types::{Catalog, LoadState, PriceBucket, Product};
use crate::theme::Settings;

/// What: Everything the UI needs to render a frame and react to input.
///
/// Details:
/// - Exactly one owner (the runtime loop) mutates this; background tasks only send
///   messages back through channels.
/// - The display list is not stored. It is derived from `load` and `selection` on demand
///   via [`AppState::display`], so it can never drift from the original catalog.
#[derive(Debug)]
pub struct AppState {
    /// Catalog fetch lifecycle and, once ready, the original catalog.
    pub load: LoadState,
    /// Applied price bucket.
    pub selection: PriceBucket,
    /// Active overlay.
    pub modal: Modal,
    /// Index of the highlighted card within the display list.
    pub selected: usize,
    /// First grid row currently scrolled into view.
    pub scroll_row: usize,
    /// Transient toast message (bottom-right).
    pub toast_message: Option<String>,
    /// Deadline (Instant) after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,
    /// How long a toast stays visible.
    pub toast_duration: Duration,
    /// Catalog endpoint URL, kept for retries and the header.
    pub endpoint: String,
    /// Number of card columns in the grid.
    pub grid_columns: u16,
    /// Currency symbol printed before prices.
    pub currency_symbol: String,
    /// Whether the keybind footer is rendered.
    pub show_keybinds_footer: bool,
    /// Tick counter driving the loading spinner.
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AppState {
    /// What: Build a fresh state in the `Loading` phase from user settings.
    ///
    /// Inputs:
    /// - `settings`: Resolved settings (file values plus CLI overrides)
    ///
    /// Output:
    /// - State with no catalog, `All` selected, and no overlay.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            load: LoadState::Loading,
            selection: settings.initial_bucket,
            modal: Modal::None,
            selected: 0,
            scroll_row: 0,
            toast_message: None,
            toast_expires_at: None,
            toast_duration: Duration::from_millis(settings.toast_duration_ms),
            endpoint: settings.catalog_endpoint.clone(),
            grid_columns: settings.grid_columns,
            currency_symbol: settings.currency_symbol.clone(),
            show_keybinds_footer: settings.show_keybinds_footer,
            spinner_frame: 0,
        }
    }

    /// What: Derive the list the grid renders right now.
    ///
    /// Output:
    /// - Sorted, bucket-filtered references into the original catalog; empty while
    ///   loading or after a failure.
    #[must_use]
    pub fn display(&self) -> Vec<&Product> {
        crate::logic::display_list(&self.load, self.selection)
    }

    /// Original catalog once the fetch has succeeded.
    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        self.load.catalog()
    }

    /// What: Show a toast for the configured duration.
    ///
    /// Inputs:
    /// - `message`: Text to display
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + self.toast_duration);
    }

    /// What: Keep `selected` and `scroll_row` inside the current display list.
    ///
    /// Details:
    /// - Called after every transition that can shrink the list (filter change, load result).
    pub fn clamp_selection(&mut self) {
        let len = self.display().len();
        if len == 0 {
            self.selected = 0;
            self.scroll_row = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        let cols = usize::from(self.grid_columns.max(1));
        let row = self.selected / cols;
        if row < self.scroll_row {
            self.scroll_row = row;
        }
    }
}
