//! Feed retrieval.

use super::*;

mod feed_trait;
mod fetch_error;
mod standard_syndication;

pub use feed_trait::*;
pub use fetch_error::*;
pub use standard_syndication::*;
