//! Checkpoint persistence.
//!
//! The checkpoint is the publication date of the last entry notified on,
//! stored as a single `YYYY-MM-DD HH:MM:SS` line with no offset.

use super::*;

/// Text format of a persisted checkpoint.
pub const CHECKPOINT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How far back a missing or unreadable checkpoint looks.
const DEFAULT_LOOKBACK_DAYS: u64 = 7;

/// File-backed checkpoint.
#[derive(Clone, Debug)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    /// Create a store backed by a file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the checkpoint file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The checkpoint used when none can be read.
    pub fn fallback() -> feeds::DateTime {
        feeds::DateTime::now()
            - feeds::Duration::from_days(DEFAULT_LOOKBACK_DAYS)
    }

    /// Read the checkpoint.
    /// This never fails: a missing or corrupt checkpoint yields the fallback.
    pub fn read(&self) -> feeds::DateTime {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "No checkpoint at {:?}, looking back {} days.",
                    self.path,
                    DEFAULT_LOOKBACK_DAYS
                );
                return CheckpointStore::fallback();
            }
            Err(e) => {
                tracing::warn!(
                    "Unable to read checkpoint {:?}: {}. Looking back {} days.",
                    self.path,
                    e,
                    DEFAULT_LOOKBACK_DAYS
                );
                return CheckpointStore::fallback();
            }
        };

        match parse_checkpoint(&data) {
            Some(checkpoint) => checkpoint,
            None => {
                tracing::warn!(
                    "Checkpoint {:?} is corrupt ({:?}). Looking back {} days.",
                    self.path,
                    data,
                    DEFAULT_LOOKBACK_DAYS
                );
                CheckpointStore::fallback()
            }
        }
    }

    /// Persist a checkpoint, replacing the previous one.
    /// Sub-second precision is dropped.
    pub fn write(&self, checkpoint: &feeds::DateTime) -> Result<()> {
        // Write beside the checkpoint and move it into place.
        // Readers only ever see a complete value.
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, format_checkpoint(checkpoint)).with_context(
            || format!("Unable to write checkpoint to {:?}", temp),
        )?;
        std::fs::rename(&temp, &self.path).with_context(|| {
            format!("Unable to move checkpoint into {:?}", self.path)
        })?;

        tracing::debug!("Saved checkpoint {} to {:?}", checkpoint, self.path);
        Ok(())
    }
}

/// Format a checkpoint for storage.
pub fn format_checkpoint(checkpoint: &feeds::DateTime) -> String {
    checkpoint
        .to_naive_utc()
        .format(CHECKPOINT_FORMAT)
        .to_string()
}

/// Parse a stored checkpoint. Surrounding whitespace is ignored.
pub fn parse_checkpoint(text: &str) -> Option<feeds::DateTime> {
    chrono::NaiveDateTime::parse_from_str(text.trim(), CHECKPOINT_FORMAT)
        .ok()
        .map(feeds::DateTime::from_naive_utc)
}
