use super::*;

pub use checkpoint::*;
pub use cli::*;
pub use config::*;
pub use logging::*;
pub use notify::*;
pub use run::*;

pub(crate) mod internal {
    pub use std::path::{Path, PathBuf};

    pub use anyhow::{Context, Result, bail};
    pub use clap::Parser;
    pub use regex::Regex;
    pub use rsswatch_feeds::prelude::{self as feeds};
    pub use serde::Deserialize;
}
