//! Event handling layer for the pricegrid TUI.
//!
//! `handle_event` routes key presses to the filter panel when it is open and to
//! the product grid otherwise.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::AppState;

mod filter;
mod grid;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Mutable application state
/// - `catalog_req_tx`: Loader request channel, used only for manual retries
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    catalog_req_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if app.modal.is_filter_open() {
        filter::handle_filter_key(ke.code, app);
        return false;
    }
    grid::handle_grid_key(ke.code, app, catalog_req_tx)
}
