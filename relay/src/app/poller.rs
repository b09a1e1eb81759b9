//! Feed poller
//!
//! Queries the feed source relative to the cursor. Errors are returned as-is;
//! the relay decides how to treat them.

use std::sync::Arc;

use crate::domain::entities::{Cursor, FeedItem};
use crate::domain::ports::{FeedSource, ListingOptions};
use crate::error::FeedError;

pub struct FeedPoller<F>
where
    F: FeedSource,
{
    feed: Arc<F>,
}

impl<F> FeedPoller<F>
where
    F: FeedSource,
{
    pub fn new(feed: Arc<F>) -> Self {
        Self { feed }
    }

    /// Items strictly newer than `cursor`, newest first, capped at `limit`.
    ///
    /// With `limit = Some(1)` this is the single item right after the cursor.
    pub async fn fetch_since(
        &self,
        cursor: &Cursor,
        limit: Option<u32>,
    ) -> Result<Vec<FeedItem>, FeedError> {
        self.feed
            .list_new(&ListingOptions::since(cursor, limit))
            .await
    }

    /// Number of items still waiting behind `cursor`
    pub async fn count_backlog(&self, cursor: &Cursor) -> Result<usize, FeedError> {
        self.fetch_since(cursor, None).await.map(|items| items.len())
    }

    pub fn source(&self) -> &F {
        &self.feed
    }
}
