//! Feed source port trait
//!
//! Defines the interface for reading a community's "new" listing.

use async_trait::async_trait;

use crate::domain::entities::{Cursor, FeedItem};
use crate::error::FeedError;

/// Options for a "new" listing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Maximum number of items; `None` leaves the page size to the source
    pub limit: Option<u32>,
    /// Only return items newer than this one
    pub before: Option<Cursor>,
}

impl ListingOptions {
    /// The single most recent item
    pub fn newest() -> Self {
        Self {
            limit: Some(1),
            before: None,
        }
    }

    /// Items newer than `cursor`, capped at `limit`
    pub fn since(cursor: &Cursor, limit: Option<u32>) -> Self {
        Self {
            limit,
            before: Some(cursor.clone()),
        }
    }
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Establish an authenticated session
    async fn authenticate(&self) -> Result<(), FeedError>;

    /// List the newest items of the feed, newest first
    async fn list_new(&self, options: &ListingOptions) -> Result<Vec<FeedItem>, FeedError>;

    /// Name of the community this source reads
    fn community(&self) -> &str;
}
