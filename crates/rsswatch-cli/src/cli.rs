//! CLI.

use super::*;

/// Watch a feed and send a notification for the first new entry whose title
/// matches a pattern.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Url of the feed.
    #[arg(long, value_name = "URL")]
    pub url: String,
    /// Pattern to search for in entry titles.
    #[arg(long, value_name = "REGEX", value_parser = parse_pattern)]
    pub pattern: Regex,
    /// Path to write logs.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG_PATH)]
    pub logpath: String,
    /// Path of the checkpoint file.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_STATE_PATH)]
    pub state: PathBuf,
    /// Path of the pushover settings file.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CREDENTIALS_PATH)]
    pub credentials: PathBuf,
    /// How long fetching the feed or sending the notification may take.
    #[arg(
        long,
        value_name = "DURATION",
        default_value = DEFAULT_TIMEOUT,
        value_parser = humantime::parse_duration,
    )]
    pub timeout: std::time::Duration,
    /// User agent used to fetch the feed.
    #[arg(long, value_name = "AGENT")]
    pub user_agent: Option<String>,
    /// Log debug information, also to stderr.
    #[arg(short, long)]
    pub debug: bool,
    /// Log everything, also to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Compile a title pattern.
fn parse_pattern(pattern: &str) -> std::result::Result<Regex, String> {
    if pattern.is_empty() {
        return Err("pattern should not be empty".into());
    }
    Regex::new(pattern)
        .map_err(|e| format!("pattern should be a valid regex: {e}"))
}
