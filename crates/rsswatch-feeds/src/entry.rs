//! Feed entry.

use super::*;

/// An entry from a feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Entry title.
    title: String,
    /// Entry description. This may contain markup.
    description: String,
    /// Entry publication date.
    /// This is absent when the feed provides no date, or one we cannot parse.
    published: Option<DateTime>,
    /// Entry source link.
    link: Option<String>,
}

impl Entry {
    /// Get entry title.
    pub fn title(&self) -> &String {
        &self.title
    }

    /// Get entry description.
    pub fn description(&self) -> &String {
        &self.description
    }

    /// Get entry publication date.
    pub fn published(&self) -> Option<&DateTime> {
        self.published.as_ref()
    }

    /// Get source link.
    pub fn link(&self) -> Option<&str> {
        match &self.link {
            Some(link) => Some(link.as_str()),
            None => None,
        }
    }

    /// Check if the entry was published strictly after a point in time.
    /// Entries without a publication date never are.
    ///
    /// Both sides are compared at whole-second resolution, the resolution
    /// checkpoints are persisted at.
    pub fn published_after(&self, since: &DateTime) -> bool {
        match &self.published {
            Some(published) => {
                published.truncate_to_seconds() > since.truncate_to_seconds()
            }
            None => false,
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            title: "".into(),
            description: "".into(),
            published: None,
            link: None,
        }
    }
}

/// Builder helper for entries.
pub struct EntryBuilder {
    title: Option<String>,
    description: Option<String>,
    published: Option<DateTime>,
    link: Option<String>,
}

impl EntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            published: None,
            link: None,
        }
    }

    /// Set the title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Set the publication date.
    pub fn published(&mut self, published: DateTime) -> &mut Self {
        self.published = Some(published);
        self
    }

    /// Set the source link.
    pub fn link(&mut self, url: impl Into<String>) -> &mut Self {
        self.link = Some(url.into());
        self
    }

    /// Build into an entry.
    pub fn build(&self) -> Entry {
        Entry {
            title: self.title.clone().unwrap_or_else(|| "".to_string()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| "".to_string()),
            published: self.published,
            link: self.link.clone(),
        }
    }
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<EntryBuilder> for Entry {
    fn from(value: EntryBuilder) -> Self {
        value.build()
    }
}
