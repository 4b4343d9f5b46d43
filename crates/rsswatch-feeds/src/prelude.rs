use super::*;

pub use async_trait::async_trait as feed_trait;
pub use datetime::*;
pub use entry::*;
pub use feed::*;
pub use sanitize::strip_markup;
pub use select::*;

pub(crate) mod internal {
    pub use regex::Regex;
    pub use serde::Deserialize;
}
