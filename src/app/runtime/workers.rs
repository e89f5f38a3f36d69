use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::sources::fetch_catalog;

use super::channels::CatalogResult;

/// What: Spawn the catalog loader.
///
/// Inputs:
/// - `client`: HTTP client shared by every fetch
/// - `req_rx`: Endpoint URLs to fetch (startup request, then manual retries)
/// - `res_tx`: Where each fetch result is sent
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Requests are handled strictly one at a time, so two fetches are never in flight.
/// - Exits when either channel closes.
pub fn spawn_catalog_worker(
    client: reqwest::Client,
    mut req_rx: mpsc::UnboundedReceiver<String>,
    res_tx: mpsc::UnboundedSender<CatalogResult>,
) {
    tokio::spawn(async move {
        while let Some(url) = req_rx.recv().await {
            let result = fetch_catalog(&client, &url).await;
            if res_tx.send(result).is_err() {
                break;
            }
        }
        tracing::debug!("catalog worker stopped");
    });
}

/// What: Spawn the tick worker that sends tick events every 200ms.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
///
/// Details:
/// - Ticks drive toast expiry and the loading spinner.
pub fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the terminal input thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Where crossterm events are forwarded
/// - `cancelled`: Shutdown flag checked between polls
///
/// Details:
/// - Polls with a 50ms timeout so shutdown is noticed promptly.
/// - Transient read errors are ignored.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
