use crossterm::event::KeyCode;

use crate::logic::select_bucket;
use crate::state::{AppState, Modal, PriceBucket};

/// What: Handle a key press while the price filter panel is open.
///
/// Inputs:
/// - `code`: Pressed key
/// - `app`: Mutable application state
///
/// Details:
/// - `Esc` closes without changing the selection.
/// - `Enter` applies the highlighted bucket; `0`..`4` apply a bucket directly.
pub(super) fn handle_filter_key(code: KeyCode, app: &mut AppState) {
    let Modal::PriceFilter { cursor } = app.modal else {
        return;
    };
    let last = PriceBucket::ALL.len() - 1;
    match code {
        KeyCode::Esc | KeyCode::Char('f') => app.modal = Modal::None,
        KeyCode::Up | KeyCode::Char('k') => {
            app.modal = Modal::PriceFilter {
                cursor: cursor.saturating_sub(1),
            };
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.modal = Modal::PriceFilter {
                cursor: (cursor + 1).min(last),
            };
        }
        KeyCode::Enter => {
            if let Some(b) = PriceBucket::from_index(cursor) {
                select_bucket(app, b);
            }
        }
        KeyCode::Char(c) => {
            if let Some(b) = c
                .to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .and_then(PriceBucket::from_index)
            {
                select_bucket(app, b);
            }
        }
        _ => {}
    }
}
