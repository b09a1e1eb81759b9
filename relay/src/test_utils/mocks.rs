//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{FeedItem, WebhookPayload};
use crate::domain::ports::{FeedSource, ListingOptions, Notifier};
use crate::error::{FeedError, WebhookError};

// ============================================================================
// In-Memory Feed Source
// ============================================================================

/// A feed held newest-first that answers listings the way Reddit does:
/// `before = X, limit = N` returns the N items immediately newer than X.
#[derive(Default)]
pub struct InMemoryFeedSource {
    items: Arc<RwLock<Vec<FeedItem>>>,
    should_fail: Arc<RwLock<bool>>,
    auth_fails: Arc<RwLock<bool>>,
    auth_count: Arc<RwLock<usize>>,
    requests: Arc<RwLock<Vec<ListingOptions>>>,
}

impl InMemoryFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every listing call fails
    pub fn failing() -> Self {
        let source = Self::default();
        source.set_failing(true);
        source
    }

    /// Pre-populate with items, newest first
    pub fn with_items(self, items: Vec<FeedItem>) -> Self {
        *self.items.write().unwrap() = items;
        self
    }

    pub fn with_auth_failure(self) -> Self {
        *self.auth_fails.write().unwrap() = true;
        self
    }

    /// Simulate a post arriving after everything already in the feed
    pub fn push_new(&self, item: FeedItem) {
        self.items.write().unwrap().insert(0, item);
    }

    pub fn set_failing(&self, failing: bool) {
        *self.should_fail.write().unwrap() = failing;
    }

    pub fn auth_count(&self) -> usize {
        *self.auth_count.read().unwrap()
    }

    /// Listing options seen so far, in call order
    pub fn requests(&self) -> Vec<ListingOptions> {
        self.requests.read().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.write().unwrap().clear();
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn authenticate(&self) -> Result<(), FeedError> {
        *self.auth_count.write().unwrap() += 1;
        if *self.auth_fails.read().unwrap() {
            return Err(FeedError::Auth("invalid_grant".to_string()));
        }
        Ok(())
    }

    async fn list_new(&self, options: &ListingOptions) -> Result<Vec<FeedItem>, FeedError> {
        self.requests.write().unwrap().push(options.clone());
        if *self.should_fail.read().unwrap() {
            return Err(FeedError::Api {
                status: 503,
                message: "Mock failure".to_string(),
            });
        }

        let items = self.items.read().unwrap();
        let newer: &[FeedItem] = match &options.before {
            Some(cursor) => match items.iter().position(|i| i.id == cursor.as_str()) {
                Some(pos) => &items[..pos],
                None => &[],
            },
            None => &items[..],
        };

        let page = match options.limit {
            Some(limit) if options.before.is_some() => {
                &newer[newer.len().saturating_sub(limit as usize)..]
            }
            Some(limit) => &newer[..newer.len().min(limit as usize)],
            None => newer,
        };
        Ok(page.to_vec())
    }

    fn community(&self) -> &str {
        "test"
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// A notifier that keeps every payload it was asked to deliver
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Arc<RwLock<Vec<WebhookPayload>>>,
    should_fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            delivered: Arc::new(RwLock::new(Vec::new())),
            should_fail: true,
        }
    }

    pub fn delivered(&self) -> Vec<WebhookPayload> {
        self.delivered.read().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<String, WebhookError> {
        if self.should_fail {
            return Err(WebhookError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }
        self.delivered.write().unwrap().push(payload.clone());
        Ok(String::new())
    }
}
