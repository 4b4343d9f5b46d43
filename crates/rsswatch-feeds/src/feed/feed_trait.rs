//! Feed trait.

use super::*;

/// What defines a feed.
#[feed_trait]
pub trait Feed: std::fmt::Debug + Send + Sync + 'static {
    /// Fetch entries from the feed, in the order the feed lists them.
    async fn fetch(&self) -> Result<Vec<Entry>, FetchError>;
}
