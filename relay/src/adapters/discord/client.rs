//! Discord webhook client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use crate::domain::entities::WebhookPayload;
use crate::domain::ports::Notifier;
use crate::error::WebhookError;

/// Posts payloads to a single, statically configured webhook URL
pub struct DiscordWebhookClient {
    http: Client,
    endpoint: String,
}

impl DiscordWebhookClient {
    pub fn new(endpoint: String) -> Result<Self, WebhookError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl Notifier for DiscordWebhookClient {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<String, WebhookError> {
        let body = serde_json::to_string(payload)?;
        tracing::debug!(payload = %body, "Sending webhook payload");

        let response = self.http.post(&self.endpoint).body(body).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(WebhookError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
