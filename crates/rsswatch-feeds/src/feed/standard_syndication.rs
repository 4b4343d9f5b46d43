//! Standard syndication (atom, rss, and json feed).

use super::*;

/// A reference to an RSS, Atom, or JSON Feed.
#[derive(Clone, Debug)]
pub struct StandardSyndication {
    /// The url of the feed.
    url: String,
    /// The user agent used to fetch the feed.
    /// If this is not set, no user agent is used.
    user_agent: Option<String>,
    /// How long the request may take.
    timeout: Duration,
}

impl StandardSyndication {
    /// Create a new standard syndication.
    pub fn new(
        url: impl Into<String>,
        user_agent: Option<String>,
        timeout: Duration,
    ) -> Box<Self> {
        return Box::new(Self {
            url: url.into(),
            user_agent,
            timeout,
        });
    }

    /// Get the url of the feed.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parse a feed from the body text.
    /// Atom is attempted first, then rss, then json feed.
    pub fn parse(body: &str) -> Result<Vec<Entry>, FetchError> {
        let mut reasons = String::new();

        // Try to parse as atom.
        match body.parse::<atom_syndication::Feed>() {
            Ok(atom_feed) => {
                tracing::trace!("Parsed feed as atom");
                return Ok(atom_feed
                    .entries()
                    .iter()
                    .map(StandardSyndication::parse_atom)
                    .collect());
            }
            Err(e) => {
                reasons.push_str(&format!("\n\tatom: {}", e));
            }
        }

        // Try to parse as rss.
        match body.parse::<rss::Channel>() {
            Ok(rss_feed) => {
                tracing::trace!("Parsed feed as rss");
                return Ok(rss_feed
                    .items()
                    .iter()
                    .map(StandardSyndication::parse_rss)
                    .collect());
            }
            Err(e) => {
                reasons.push_str(&format!("\n\trss: {}", e));
            }
        }

        // Try to parse as json feed.
        match serde_json::from_str::<JsonFeed>(body) {
            Ok(json_feed) if json_feed.is_json_feed() => {
                tracing::trace!("Parsed feed as json feed");
                return Ok(json_feed
                    .items
                    .iter()
                    .map(StandardSyndication::parse_json_feed)
                    .collect());
            }
            Ok(json_feed) => {
                reasons.push_str(&format!(
                    "\n\tjson feed: unknown version `{}`",
                    json_feed.version
                ));
            }
            Err(e) => {
                reasons.push_str(&format!("\n\tjson feed: {}", e));
            }
        }

        Err(FetchError::Parse { reasons })
    }

    /// Parse an atom entry.
    fn parse_atom(atom_entry: &atom_syndication::Entry) -> Entry {
        let mut parsed = EntryBuilder::new();
        parsed
            .title(atom_entry.title().value.clone())
            .description(match atom_entry.summary() {
                Some(summary) => summary.value.clone(),
                None => match atom_entry.content() {
                    Some(content) => content.value().unwrap_or("").to_string(),
                    None => "".into(),
                },
            });

        // Prefer the publication date, falling back to the last update.
        let published = match atom_entry.published() {
            Some(published) => published.to_utc(),
            None => atom_entry.updated().to_utc(),
        };
        parsed.published(DateTime::from_chrono(published));

        if let Some(link) = atom_entry.links().first() {
            parsed.link(link.href());
        }

        parsed.build()
    }

    /// Parse an rss entry.
    fn parse_rss(rss_entry: &rss::Item) -> Entry {
        let mut parsed = EntryBuilder::new();
        parsed
            .title(rss_entry.title().unwrap_or(""))
            .description(match rss_entry.description() {
                Some(desc) => desc,
                None => rss_entry.content().unwrap_or(""),
            });

        let published = 'date: {
            if let Some(pub_date) = rss_entry.pub_date() {
                if let Ok(dt) = DateTime::try_from(pub_date) {
                    break 'date Some(dt);
                }
                tracing::debug!("Unable to parse rss pubDate `{}`", pub_date);
            }
            if let Some(dc) = rss_entry.dublin_core_ext() {
                for date in dc.dates() {
                    if let Ok(dt) = DateTime::try_from(date) {
                        break 'date Some(dt);
                    }
                }
            }
            None
        };
        if let Some(published) = published {
            parsed.published(published);
        }

        if let Some(link) = rss_entry.link() {
            parsed.link(link);
        }

        parsed.build()
    }

    /// Parse a json feed item.
    fn parse_json_feed(item: &JsonFeedItem) -> Entry {
        let mut parsed = EntryBuilder::new();
        parsed.title(item.title.as_deref().unwrap_or("")).description(
            item.summary
                .as_deref()
                .or(item.content_html.as_deref())
                .or(item.content_text.as_deref())
                .unwrap_or(""),
        );

        // Prefer the publication date, falling back to the last update.
        let published = [&item.date_published, &item.date_modified]
            .into_iter()
            .flatten()
            .find_map(|date| DateTime::try_from(date).ok());
        if let Some(published) = published {
            parsed.published(published);
        }

        if let Some(link) = item.url.as_ref().or(item.external_url.as_ref()) {
            parsed.link(link);
        }

        parsed.build()
    }
}

/// Prefix of every json feed version url.
const JSON_FEED_VERSION_PREFIX: &str = "https://jsonfeed.org/version/";

/// The parts of a json feed (https://jsonfeed.org) we read.
#[derive(Clone, Debug, Deserialize)]
struct JsonFeed {
    version: String,
    #[serde(default)]
    items: Vec<JsonFeedItem>,
}

impl JsonFeed {
    /// Check the version marks this as a json feed, not arbitrary json.
    fn is_json_feed(&self) -> bool {
        self.version.starts_with(JSON_FEED_VERSION_PREFIX)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct JsonFeedItem {
    title: Option<String>,
    summary: Option<String>,
    content_html: Option<String>,
    content_text: Option<String>,
    date_published: Option<String>,
    date_modified: Option<String>,
    url: Option<String>,
    external_url: Option<String>,
}

#[feed_trait]
impl Feed for StandardSyndication {
    async fn fetch(&self) -> Result<Vec<Entry>, FetchError> {
        // Generate request.
        let mut client_builder =
            reqwest::ClientBuilder::new().timeout(self.timeout.to_std());

        if let Some(user_agent) = &self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        }

        let client = client_builder.build().map_err(FetchError::Client)?;

        // Execute request and parse.
        tracing::debug!("Fetching {}", self);
        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Request)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.text().await.map_err(FetchError::Body)?;

        let entries = StandardSyndication::parse(&body)?;
        tracing::debug!("Parsed {} entries from {}", entries.len(), self);
        Ok(entries)
    }
}

impl std::fmt::Display for StandardSyndication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<StandardSyndication url={}>", &self.url)
    }
}
