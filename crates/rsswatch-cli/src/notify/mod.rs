//! Notifications.

use super::*;

mod pushover;

pub use pushover::*;

pub use async_trait::async_trait as notifier_trait;

/// A notification about a feed entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Entry title, verbatim.
    pub title: String,
    /// Entry description with markup stripped.
    pub body: String,
}

impl Notification {
    /// Build a notification from an entry.
    pub fn from_entry(entry: &feeds::Entry) -> Self {
        Self {
            title: entry.title().clone(),
            body: feeds::strip_markup(entry.description()),
        }
    }
}

/// Something that can deliver notifications.
#[notifier_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification once, without retrying.
    async fn send(
        &self,
        notification: &Notification,
    ) -> Result<(), NotifyError>;
}

/// Why a notification was not delivered.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("unable to build client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to execute request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("rejected with {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}
