//! A single watcher run.
//!
//! A run loads the checkpoint, fetches the feed, and selects at most one new
//! matching entry. On a match the checkpoint is advanced before the
//! notification is sent: a failure in between loses that notification rather
//! than repeating it on the next run.

use super::*;

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A matching entry was found and a notification attempted.
    Notified {
        /// Publication date of the entry, now the checkpoint.
        published: feeds::DateTime,
    },
    /// Nothing new matched.
    Idle,
}

/// Perform one run.
/// Only fetching the feed can fail the run.
pub async fn run(
    config: &WatchConfig,
    feed: &dyn feeds::Feed,
    store: &CheckpointStore,
    notifier: &dyn Notifier,
) -> Result<RunOutcome> {
    let since = store.read();
    tracing::debug!("Looking for entries newer than {}", since);

    let entries = match tokio::time::timeout(config.timeout, feed.fetch()).await
    {
        Ok(Ok(entries)) => entries,
        Ok(Err(e)) => bail!("Unable to get feed from {}: {}", config.url, e),
        Err(_) => bail!(
            "Unable to get feed from {}: timed out after {}",
            config.url,
            humantime::format_duration(config.timeout)
        ),
    };
    tracing::debug!("Fetched {} entries from {}", entries.len(), config.url);

    let criteria = feeds::MatchCriteria::new(config.pattern.clone(), since);
    let Some((entry, published)) = criteria.select(&entries) else {
        tracing::info!("Nothing was found");
        return Ok(RunOutcome::Idle);
    };
    tracing::info!(
        "Found \"{}\" published {} (after {})",
        entry.title(),
        published.to_iso8601(),
        since.to_iso8601()
    );
    if let Some(link) = entry.link() {
        tracing::debug!("Entry link: {}", link);
    }

    if let Err(e) = store.write(&published) {
        tracing::error!("Unable to save checkpoint {}: {:#}", published, e);
    }

    let notification = Notification::from_entry(entry);
    match tokio::time::timeout(config.timeout, notifier.send(&notification))
        .await
    {
        Ok(Ok(())) => {
            tracing::info!("Sent notification \"{}\"", notification.title)
        }
        Ok(Err(e)) => tracing::warn!(
            "Failed to send notification \"{}\": {}",
            notification.title,
            e
        ),
        Err(_) => tracing::warn!(
            "Failed to send notification \"{}\": timed out after {}",
            notification.title,
            humantime::format_duration(config.timeout)
        ),
    }

    Ok(RunOutcome::Notified { published })
}
