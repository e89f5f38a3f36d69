use std::time::Instant;

use crate::state::AppState;

/// What: Handle a periodic tick.
///
/// Inputs:
/// - `app`: Application state
///
/// Details:
/// - Hides the toast once its deadline has passed.
/// - Advances the loading spinner while a fetch is outstanding.
pub fn handle_tick(app: &mut AppState) {
    handle_tick_at(app, Instant::now());
}

/// Tick body with an explicit clock, so expiry can be tested without sleeping.
pub fn handle_tick_at(app: &mut AppState, now: Instant) {
    if app.load.is_loading() {
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
    }
    if let Some(deadline) = app.toast_expires_at
        && now >= deadline
    {
        app.toast_message = None;
        app.toast_expires_at = None;
    }
}
