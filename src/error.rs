use thiserror::Error;

/// What can go wrong between issuing the top-rated request and having a
/// decoded page in hand. Fetch failures never become error responses:
/// the catalog publishes them as `CatalogStatus::Failed` and pages render
/// the reason next to a retry control.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("empty response body")]
    EmptyBody,
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
