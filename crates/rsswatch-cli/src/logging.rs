//! Logging.

use super::*;

use std::sync::Mutex;

use tracing::{Level, level_filters::LevelFilter};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;

/// Setup logging.
/// Everything goes to the log file; debug and verbose runs also log to stderr.
pub fn setup_logging(cli: &Cli) -> Result<()> {
    let level = match cli.verbose {
        true => Level::TRACE,
        false => match cli.debug {
            true => Level::DEBUG,
            false => Level::INFO,
        },
    };
    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("rsswatch", level)
        .with_target("rsswatch_feeds", level);

    // CLI layer (to stderr).
    let cli_logger = match cli.debug || cli.verbose {
        true => Some(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_filter(filter.clone()),
        ),
        false => None,
    };

    // File layer.
    let file = open_log_file(&cli.logpath)?;
    let file_logger = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(filter);

    let subscriber = tracing_subscriber::Registry::default()
        .with(cli_logger)
        .with(file_logger);

    // Set this logger as global.
    if let Err(_) = tracing::subscriber::set_global_default(subscriber) {
        bail!("Unable to initialize logging.");
    }

    Ok(())
}

/// Open the log file for appending, creating it and its directory if needed.
fn open_log_file(log_file: &str) -> Result<std::fs::File> {
    let filename = shellexpand::full(log_file)
        .with_context(|| format!("Unable to expand log file {}", log_file))?
        .into_owned();
    let path = PathBuf::from(&filename);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(parent_dir).with_context(|| {
                format!("Unable to initialize path for {}", filename)
            })?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", filename))?;
    Ok(file)
}
