//! rsswatch configuration.

use super::*;

/// Configuration for one watcher run.
/// This is built once at startup and never changes.
#[derive(Clone, Debug)]
pub struct WatchConfig {
    /// Url of the watched feed.
    pub url: String,
    /// Pattern searched for in entry titles.
    pub pattern: Regex,
    /// Checkpoint file.
    pub state: PathBuf,
    /// Timeout for fetching and notifying.
    pub timeout: std::time::Duration,
    /// User agent used to fetch the feed.
    pub user_agent: Option<String>,
    /// Notification credentials.
    pub pushover: PushoverSettings,
}

impl WatchConfig {
    /// Build the configuration from the command line, reading credentials.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let pushover = PushoverSettings::read(&cli.credentials)?;
        Ok(Self {
            url: cli.url.clone(),
            pattern: cli.pattern.clone(),
            state: cli.state.clone(),
            timeout: cli.timeout,
            user_agent: cli.user_agent.clone(),
            pushover,
        })
    }
}

/// Pushover credentials.
/// This is parsed from the json settings file.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct PushoverSettings {
    /// Application token.
    #[serde(alias = "Token")]
    pub token: String,
    /// Recipient user (or group) key.
    #[serde(alias = "User")]
    pub user: String,
}

impl PushoverSettings {
    /// Read settings from a file.
    pub fn read(path: &Path) -> Result<Self> {
        // Read file.
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                bail!("Unable to read pushover settings {:?}: {}.", path, e);
            }
        };

        // Parse.
        let settings = match serde_json::from_str::<PushoverSettings>(&data) {
            Ok(settings) => settings,
            Err(e) => {
                bail!("Pushover settings {:?} are not valid: {}.", path, e);
            }
        };
        if settings.token.trim().is_empty() {
            bail!("Pushover settings {:?} have an empty token.", path);
        }
        if settings.user.trim().is_empty() {
            bail!("Pushover settings {:?} have an empty user.", path);
        }

        Ok(settings)
    }
}

impl std::fmt::Debug for PushoverSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("PushoverSettings")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}
