use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::tick_handler::handle_tick;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for and processes a single message from any channel.
/// - Catalog results are merged in one step through `apply_load_result`.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, &channels.catalog_req_tx)
        }
        Some(result) = channels.catalog_res_rx.recv() => {
            crate::logic::apply_load_result(app, result);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering the UI and processing channel messages.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (`None` in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Details:
/// - Exits when an event handler returns `true` (quit) or every channel has closed.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "frame draw failed");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
