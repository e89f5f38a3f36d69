//! Product catalog fetcher.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::state::{Catalog, CatalogResponse};

/// Default product-listing endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products";

/// What: Every way the one-shot catalog fetch can fail.
///
/// Details:
/// - All variants are the same user-facing failure ("the catalog could not be loaded");
///   they only differ in what gets logged and shown in the error banner.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, timeout, or body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Server answered with a non-success status.
    #[error("catalog endpoint returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// Body was not a `{ "products": [...] }` document.
    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What: Build the HTTP client used for catalog requests.
///
/// Inputs:
/// - `timeout`: Overall request timeout
///
/// Output:
/// - Configured `reqwest::Client`; falls back to `reqwest::Client::new()` if the builder fails.
#[must_use]
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .timeout(timeout)
        .user_agent(format!("pricegrid/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "failed to build configured HTTP client; using defaults");
            reqwest::Client::new()
        })
}

/// What: Decode a catalog endpoint body.
///
/// Inputs:
/// - `body`: Raw JSON text
///
/// Output:
/// - `Ok(Catalog)` in endpoint order; `Err(FetchError::Decode)` on malformed JSON.
///
/// # Errors
/// - Returns `Err` when the body is not valid JSON or lacks a `products` array
pub fn decode_catalog(body: &str) -> Result<Catalog, FetchError> {
    let resp: CatalogResponse = serde_json::from_str(body)?;
    Ok(Catalog::new(resp.products))
}

/// What: Fetch the full product catalog with a single `GET`.
///
/// Inputs:
/// - `client`: HTTP client (see [`build_client`])
/// - `url`: Catalog endpoint
///
/// Output:
/// - `Ok(Catalog)` on success; `Err(FetchError)` on network, status, or decode failure.
///
/// # Errors
/// - Network failures and timeouts
/// - Non-success HTTP status
/// - JSON decode failures
///
/// Details:
/// - No query parameters, extra headers, or pagination: the endpoint's first page is the
///   whole catalog.
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Catalog, FetchError> {
    debug!(url = %url, "requesting catalog");
    let resp = client.get(url).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    info!(
        status = status.as_u16(),
        bytes = body.len(),
        "fetched catalog"
    );
    if !status.is_success() {
        let preview: String = body.chars().take(300).collect();
        warn!(
            status = status.as_u16(),
            preview = preview,
            "catalog endpoint returned non-success status"
        );
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }
    decode_catalog(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Well-formed bodies decode in endpoint order
    ///
    /// - Input: Two products
    /// - Output: Catalog with both, ids in order
    fn decode_catalog_keeps_order() {
        let body = r#"{"products":[
            {"id":7,"title":"b","price":1,"rating":1,"thumbnail":"t"},
            {"id":3,"title":"a","price":2,"rating":2,"thumbnail":"t"}
        ]}"#;
        let c = decode_catalog(body).expect("decode");
        let ids: Vec<u64> = c.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    /// What: Bodies without a product array are decode failures
    ///
    /// - Input: HTML error page, and JSON missing `products`
    /// - Output: `FetchError::Decode` for both
    fn decode_catalog_rejects_malformed() {
        assert!(matches!(
            decode_catalog("<html>busy</html>"),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_catalog(r#"{"items":[]}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    /// What: Status errors render a readable message
    ///
    /// - Input: `FetchError::Status { status: 503 }`
    /// - Output: Message names the status code
    fn status_error_message() {
        let e = FetchError::Status { status: 503 };
        assert_eq!(e.to_string(), "catalog endpoint returned HTTP 503");
    }
}
