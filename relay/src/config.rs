use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SUBREDDIT: &str = "shitredditsays";
pub const DEFAULT_SUBREDDIT_DISPLAY: &str = "ShitRedditSays";
pub const DEFAULT_ICON_URL: &str = "https://i.imgur.com/3NtinwD.png";
pub const DEFAULT_EMBED_COLOR: &str = "16763904";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_WEBHOOK_BASE_URL: &str = "https://discordapp.com/api/v7/webhooks/";
pub const DEFAULT_REDDIT_AUTH_URL: &str = "https://www.reddit.com";
pub const DEFAULT_REDDIT_API_URL: &str = "https://oauth.reddit.com";

/// Reddit script-app credentials for the password grant
#[derive(Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for RedditCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditCredentials")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub reddit: RedditCredentials,
    /// Base URL for the OAuth token endpoint
    pub reddit_auth_url: String,
    /// Base URL for authenticated API calls
    pub reddit_api_url: String,
    pub user_agent: String,
    /// Subreddit name as used in API paths
    pub subreddit: String,
    /// Subreddit name as shown in the notification title
    pub subreddit_display: String,
    pub webhook_base_url: String,
    pub webhook_client: String,
    pub webhook_secret: String,
    pub icon_url: String,
    pub embed_color: String,
    pub poll_interval: Duration,
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let reddit = RedditCredentials {
            client_id: required("REDDIT_CLIENT")?,
            client_secret: required("REDDIT_SECRET")?,
            username: required("REDDIT_USERNAME")?,
            password: required("REDDIT_PASSWORD")?,
        };
        let webhook_client = required("DISCORD_WEBHOOK_CLIENT")?;
        let webhook_secret = required("DISCORD_WEBHOOK_SECRET")?;

        let (subreddit, subreddit_display) = match get("RELAY_SUBREDDIT") {
            Some(name) => {
                let display = get("RELAY_SUBREDDIT_DISPLAY").unwrap_or_else(|| name.clone());
                (name, display)
            }
            None => (
                DEFAULT_SUBREDDIT.to_string(),
                get("RELAY_SUBREDDIT_DISPLAY")
                    .unwrap_or_else(|| DEFAULT_SUBREDDIT_DISPLAY.to_string()),
            ),
        };

        let embed_color =
            get("RELAY_EMBED_COLOR").unwrap_or_else(|| DEFAULT_EMBED_COLOR.to_string());
        if embed_color.parse::<u32>().is_err() {
            return Err(ConfigError::Invalid {
                var: "RELAY_EMBED_COLOR",
                message: format!("expected a decimal color, got {:?}", embed_color),
            });
        }

        let poll_secs = match get("RELAY_POLL_INTERVAL_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "RELAY_POLL_INTERVAL_SECS",
                        message: format!("expected a positive number of seconds, got {:?}", raw),
                    })
                }
            },
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            reddit,
            reddit_auth_url: get("REDDIT_AUTH_URL")
                .unwrap_or_else(|| DEFAULT_REDDIT_AUTH_URL.to_string()),
            reddit_api_url: get("REDDIT_API_URL")
                .unwrap_or_else(|| DEFAULT_REDDIT_API_URL.to_string()),
            user_agent: get("REDDIT_USER_AGENT")
                .unwrap_or_else(|| format!("postrelay/{}", env!("CARGO_PKG_VERSION"))),
            subreddit,
            subreddit_display,
            webhook_base_url: get("DISCORD_WEBHOOK_BASE_URL")
                .unwrap_or_else(|| DEFAULT_WEBHOOK_BASE_URL.to_string()),
            webhook_client,
            webhook_secret,
            icon_url: get("RELAY_ICON_URL").unwrap_or_else(|| DEFAULT_ICON_URL.to_string()),
            embed_color,
            poll_interval: Duration::from_secs(poll_secs),
        })
    }

    /// Full webhook URL: `<base>/<client>/<secret>`
    pub fn webhook_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.webhook_base_url.trim_end_matches('/'),
            self.webhook_client,
            self.webhook_secret
        )
    }
}
