//! Application state: value types, overlays, and the owned `AppState`.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{Catalog, CatalogResponse, LoadState, PriceBucket, Product};
