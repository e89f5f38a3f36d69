use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::FetchError;
use crate::state::Catalog;

/// Outcome of one catalog fetch as delivered to the event loop.
pub type CatalogResult = Result<Catalog, FetchError>;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all senders and receivers used between the event loop and its workers.
/// - `catalog_req_tx` carries endpoint URLs to the loader; each request yields exactly one
///   message on `catalog_res_rx`.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Fetch requests (endpoint URL) for the catalog worker.
    pub catalog_req_tx: mpsc::UnboundedSender<String>,
    /// Fetch results from the catalog worker.
    pub catalog_res_rx: mpsc::UnboundedReceiver<CatalogResult>,
    /// Periodic tick used for toast expiry and redraws.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiver side of `tick_tx`.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

/// What: Worker-side halves handed to [`super::workers`].
pub struct WorkerEnds {
    /// Requests the catalog worker consumes.
    pub catalog_req_rx: mpsc::UnboundedReceiver<String>,
    /// Where the catalog worker reports results.
    pub catalog_res_tx: mpsc::UnboundedSender<CatalogResult>,
}

impl Channels {
    /// What: Create every runtime channel.
    ///
    /// Output:
    /// - The loop-side `Channels` plus the `WorkerEnds` to move into spawned tasks.
    #[must_use]
    pub fn new() -> (Self, WorkerEnds) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (catalog_req_tx, catalog_req_rx) = mpsc::unbounded_channel();
        let (catalog_res_tx, catalog_res_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        (
            Self {
                event_tx,
                event_rx,
                event_thread_cancelled: Arc::new(AtomicBool::new(false)),
                catalog_req_tx,
                catalog_res_rx,
                tick_tx,
                tick_rx,
            },
            WorkerEnds {
                catalog_req_rx,
                catalog_res_tx,
            },
        )
    }
}
