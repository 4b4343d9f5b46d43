//! Entry selection.

use super::*;

/// What makes an entry worth acting on.
#[derive(Clone, Debug)]
pub struct MatchCriteria {
    /// Pattern searched for in entry titles.
    pattern: Regex,
    /// Entries must be published strictly after this.
    since: DateTime,
}

impl MatchCriteria {
    /// Create new criteria.
    pub fn new(pattern: Regex, since: DateTime) -> Self {
        Self { pattern, since }
    }

    /// Get the title pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Get the threshold time.
    pub fn since(&self) -> &DateTime {
        &self.since
    }

    /// Check if an entry qualifies.
    /// The pattern may match anywhere in the title.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.pattern.is_match(entry.title())
            && entry.published_after(&self.since)
    }

    /// Find the first qualifying entry, in the order given, along with its
    /// publication date. At most one entry is ever selected.
    pub fn select<'a, I>(&self, entries: I) -> Option<(&'a Entry, DateTime)>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries.into_iter().find_map(|entry| {
            let published = *entry.published()?;
            self.matches(entry).then_some((entry, published))
        })
    }
}

/// Find the first entry whose title matches `pattern` and which was
/// published strictly after `since`.
pub fn select<'a>(
    entries: &'a [Entry],
    pattern: &Regex,
    since: &DateTime,
) -> Option<&'a Entry> {
    MatchCriteria::new(pattern.clone(), *since)
        .select(entries)
        .map(|(entry, _)| entry)
}
