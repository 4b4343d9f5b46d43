//! Feed retrieval errors.

/// Why a feed could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("unable to build client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to execute request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to get body from response: {0}")]
    Body(#[source] reqwest::Error),
    #[error("unable to parse feed as atom, rss, or json feed:{reasons}")]
    Parse { reasons: String },
}
