//! Notifier port trait

use async_trait::async_trait;

use crate::domain::entities::WebhookPayload;
use crate::error::WebhookError;

/// Delivers a formatted notification to its destination
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one payload, returning the raw response body
    async fn deliver(&self, payload: &WebhookPayload) -> Result<String, WebhookError>;
}
