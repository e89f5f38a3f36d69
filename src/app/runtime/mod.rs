use std::io::Stdout;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::sources::build_client;
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod tick_handler;
mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use workers::{spawn_catalog_worker, spawn_event_thread, spawn_tick_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Enter raw mode and the alternate screen, then build the ratatui terminal.
///
/// # Errors
/// - Terminal setup or backend creation failures
fn open_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    setup_terminal()?;
    build_or_restore(
        || Terminal::new(CrosstermBackend::new(std::io::stdout())),
        restore_terminal,
    )
}

/// What: Run `build`; if it fails, undo terminal setup with `restore` before returning the error.
///
/// Details:
/// - A failing `restore` is logged; the build error is the one returned.
///
/// # Errors
/// - The error returned by `build`
fn build_or_restore<T, E>(
    build: impl FnOnce() -> std::result::Result<T, E>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    build().map_err(|e| {
        if let Err(restore_err) = restore() {
            tracing::warn!(error = %restore_err, "failed to restore terminal");
        }
        e.into()
    })
}

/// What: Run the pricegrid TUI end-to-end: set up the terminal, start the catalog loader,
/// drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Resolved settings (file values plus CLI overrides)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - The catalog is requested exactly once at startup; later fetches only happen when the
///   user asks for a retry after a failure.
/// - `PRICEGRID_TEST_HEADLESS=1` skips terminal setup and input so tests can drive the loop.
///
/// # Errors
/// - Terminal setup, backend creation, or restoration failures
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var("PRICEGRID_TEST_HEADLESS").ok().as_deref() == Some("1");
    let mut terminal = if headless {
        None
    } else {
        Some(open_terminal()?)
    };

    let mut app = AppState::from_settings(&settings);
    tracing::info!(
        endpoint = %app.endpoint,
        bucket = %app.selection.label(),
        columns = app.grid_columns,
        headless,
        "runtime starting"
    );

    let (mut channels, worker_ends) = Channels::new();
    let client = build_client(Duration::from_secs(settings.request_timeout_secs));
    spawn_catalog_worker(client, worker_ends.catalog_req_rx, worker_ends.catalog_res_tx);
    spawn_tick_worker(&channels.tick_tx);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    // One-shot initial load
    if channels.catalog_req_tx.send(app.endpoint.clone()).is_err() {
        tracing::error!("catalog worker unavailable at startup");
    }

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    tracing::debug!("runtime stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    /// What: A failed terminal build restores the terminal and returns the build error
    ///
    /// - Input: Build closure returning an io error
    /// - Output: `Err` with that message; restore called once
    fn build_failure_restores_terminal() {
        let restored = Cell::new(0);
        let result: Result<()> = build_or_restore(
            || Err(std::io::Error::other("no tty")),
            || {
                restored.set(restored.get() + 1);
                Ok(())
            },
        );
        assert_eq!(result.err().map(|e| e.to_string()).as_deref(), Some("no tty"));
        assert_eq!(restored.get(), 1);
    }

    #[test]
    /// What: A successful build leaves the terminal set up
    ///
    /// - Input: Build closure returning `Ok`
    /// - Output: Value passed through; restore never called
    fn build_success_skips_restore() {
        let restored = Cell::new(false);
        let result = build_or_restore(
            || Ok::<_, std::io::Error>(7),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result.ok(), Some(7));
        assert!(!restored.get());
    }
}
