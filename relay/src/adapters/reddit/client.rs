//! Reddit API client implementation
//!
//! Logs in with the OAuth password grant (script apps) and reads the
//! subreddit's "new" listing with the resulting bearer token.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use urlencoding::encode;

use crate::config::RedditCredentials;
use crate::domain::entities::FeedItem;
use crate::domain::ports::{FeedSource, ListingOptions};
use crate::error::FeedError;

/// Prefix for turning a listing's relative permalink into a link
const PERMALINK_BASE: &str = "https://www.reddit.com";

/// Tokens are refreshed this long before Reddit says they expire
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Implementation of the Reddit feed client
pub struct RedditClientImpl {
    http: Client,
    auth_url: String,
    api_url: String,
    subreddit: String,
    credentials: RedditCredentials,
    token: Mutex<Option<AccessToken>>,
}

impl RedditClientImpl {
    pub fn new(
        credentials: RedditCredentials,
        auth_url: &str,
        api_url: &str,
        user_agent: &str,
        subreddit: &str,
    ) -> Result<Self, FeedError> {
        let http = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            auth_url: auth_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            subreddit: subreddit.to_string(),
            credentials,
            token: Mutex::new(None),
        })
    }

    fn listing_url(&self) -> String {
        format!("{}/r/{}/new", self.api_url, encode(&self.subreddit))
    }

    /// Run the password grant and store the resulting token
    async fn login(&self) -> Result<String, FeedError> {
        let response = self
            .http
            .post(format!("{}/api/v1/access_token", self.auth_url))
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[
                ("grant_type", "password"),
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(FeedError::Auth("client credentials rejected".to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Reddit reports a bad username/password as 200 with an `error` field
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))?;
        let value = match (token.access_token, token.error) {
            (Some(value), None) => value,
            (_, Some(error)) => return Err(FeedError::Auth(error)),
            (None, None) => {
                return Err(FeedError::Auth(
                    "token response carried no access_token".to_string(),
                ))
            }
        };

        let lifetime = Duration::from_secs(token.expires_in.unwrap_or(3600));
        let expires_at = Instant::now() + lifetime.saturating_sub(EXPIRY_MARGIN);
        *self.token.lock().await = Some(AccessToken {
            value: value.clone(),
            expires_at,
        });

        tracing::debug!(
            username = %self.credentials.username,
            expires_in_secs = lifetime.as_secs(),
            "Reddit session established"
        );
        Ok(value)
    }

    /// Current token, logging in again when it is missing or stale
    async fn bearer(&self) -> Result<String, FeedError> {
        {
            let token = self.token.lock().await;
            if let Some(token) = token.as_ref().filter(|t| t.is_fresh()) {
                return Ok(token.value.clone());
            }
        }
        tracing::debug!("Reddit access token missing or expired, logging in");
        self.login().await
    }
}

/// Response types from the Reddit API
#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Thing>,
}

#[derive(Deserialize)]
struct Thing {
    data: Submission,
}

#[derive(Deserialize)]
struct Submission {
    name: String,
    title: String,
    permalink: String,
    url: String,
    author: String,
    #[serde(default)]
    thumbnail: Option<String>,
}

impl From<Submission> for FeedItem {
    fn from(s: Submission) -> Self {
        // "self", "default", "nsfw" and "" mark posts without a thumbnail
        let thumbnail = s.thumbnail.filter(|t| t.starts_with("http"));
        FeedItem {
            id: s.name,
            title: s.title,
            permalink: format!("{}{}", PERMALINK_BASE, s.permalink),
            url: s.url,
            author: s.author,
            thumbnail,
        }
    }
}

#[async_trait]
impl FeedSource for RedditClientImpl {
    async fn authenticate(&self) -> Result<(), FeedError> {
        self.login().await.map(|_| ())
    }

    async fn list_new(&self, options: &ListingOptions) -> Result<Vec<FeedItem>, FeedError> {
        let token = self.bearer().await?;

        let mut query: Vec<(&str, String)> = vec![("raw_json", "1".to_string())];
        if let Some(limit) = options.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(before) = &options.before {
            query.push(("before", before.to_string()));
        }

        let response = self
            .http
            .get(self.listing_url())
            .header(reqwest::header::AUTHORIZATION, format!("bearer {}", token))
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let listing: Listing = response
                .json()
                .await
                .map_err(|e| FeedError::Deserialization(e.to_string()))?;
            Ok(listing
                .data
                .children
                .into_iter()
                .map(|thing| thing.data.into())
                .collect())
        } else if status.as_u16() == 401 {
            self.token.lock().await.take();
            Err(FeedError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(FeedError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(FeedError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn community(&self) -> &str {
        &self.subreddit
    }
}
