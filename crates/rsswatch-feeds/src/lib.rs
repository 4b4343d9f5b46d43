//! rsswatch feed handling.

mod datetime;
mod entry;
mod feed;
pub mod prelude;
pub mod sanitize;
mod select;


use prelude::internal::*;
use prelude::*;
