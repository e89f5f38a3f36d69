use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use crate::logic::{begin_retry, move_rows, move_selection};
use crate::state::{AppState, Modal};

/// What: Handle a key press while the product grid has focus.
///
/// Inputs:
/// - `code`: Pressed key
/// - `app`: Mutable application state
/// - `catalog_req_tx`: Loader request channel for retries
///
/// Output:
/// - `true` when the key asks to quit.
///
/// Details:
/// - `r` only does something in the failed state; the request is sent after the state is
///   back to `Loading`, so a second `r` cannot queue another fetch.
pub(super) fn handle_grid_key(
    code: KeyCode,
    app: &mut AppState,
    catalog_req_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('f') => app.modal = Modal::price_filter(app.selection),
        KeyCode::Char('r') => {
            if begin_retry(app) && catalog_req_tx.send(app.endpoint.clone()).is_err() {
                tracing::error!("catalog worker unavailable; retry dropped");
                app.load = crate::state::LoadState::Failed("catalog worker stopped".into());
            }
        }
        KeyCode::Left | KeyCode::Char('h') => move_selection(app, -1),
        KeyCode::Right | KeyCode::Char('l') => move_selection(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_rows(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_rows(app, 1),
        KeyCode::Home | KeyCode::Char('g') => app.selected = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected = app.display().len().saturating_sub(1);
        }
        _ => {}
    }
    false
}
