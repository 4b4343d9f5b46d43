//! rsswatch.

mod checkpoint;
mod cli;
mod config;
mod logging;
mod notify;
pub mod prelude;
mod run;


use prelude::internal::*;
use prelude::*;

const DEFAULT_LOG_PATH: &str = "rsswatch.log";
const DEFAULT_STATE_PATH: &str = "state";
const DEFAULT_CREDENTIALS_PATH: &str = "pushover.json";
const DEFAULT_TIMEOUT: &str = "30s";

/// Entry point for rsswatch.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initial setup.
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let config = match WatchConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e:#}");
            bail!("Invalid configuration: {e:#}");
        }
    };

    tracing::info!("Start");
    let feed = feeds::StandardSyndication::new(
        config.url.clone(),
        config.user_agent.clone(),
        feeds::Duration::from_std(config.timeout),
    );
    let store = CheckpointStore::new(&config.state);
    let notifier = Pushover::new(config.pushover.clone(), config.timeout);

    match run(&config, feed.as_ref(), &store, &notifier).await {
        Ok(outcome) => {
            tracing::debug!("Finished: {:?}", outcome);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{e:#}");
            Err(e)
        }
    }
}
