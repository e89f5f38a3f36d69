use crate::sources::FetchError;
use crate::state::{AppState, Catalog, LoadState};

/// What: Merge the loader's single result into application state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `result`: Outcome of the catalog fetch
///
/// Output:
/// - `LoadState::Ready` on success; `LoadState::Failed` with the error text otherwise.
///
/// Details:
/// - The whole catalog is swapped in at once, so no partially loaded state is ever rendered.
/// - Failures are logged here and never propagate further.
/// - Results arriving when no fetch is outstanding are ignored.
pub fn apply_load_result(app: &mut AppState, result: Result<Catalog, FetchError>) {
    if !app.load.is_loading() {
        tracing::debug!("ignoring catalog result with no fetch outstanding");
        return;
    }
    match result {
        Ok(catalog) => {
            tracing::info!(products = catalog.len(), "catalog ready");
            app.load = LoadState::Ready(catalog);
        }
        Err(e) => {
            tracing::error!(error = %e, endpoint = %app.endpoint, "error fetching catalog");
            app.load = LoadState::Failed(e.to_string());
        }
    }
    app.clamp_selection();
}

/// What: Move a failed load back to `Loading` so the caller can refetch.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when a retry was started; `false` if the state was not `Failed`.
///
/// Details:
/// - Only the failed state accepts a retry, which keeps at most one fetch in flight.
pub fn begin_retry(app: &mut AppState) -> bool {
    if matches!(app.load, LoadState::Failed(_)) {
        tracing::info!(endpoint = %app.endpoint, "retrying catalog fetch");
        app.load = LoadState::Loading;
        true
    } else {
        false
    }
}
