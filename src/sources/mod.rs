//! Network data retrieval.

mod catalog;

pub use catalog::{DEFAULT_ENDPOINT, FetchError, build_client, decode_catalog, fetch_catalog};
