//! Cursor tracker
//!
//! Holds the id of the most recently delivered post. Starts at the newest
//! post present at launch so the historical backlog is never replayed.

use crate::domain::entities::Cursor;
use crate::domain::ports::{FeedSource, ListingOptions};
use crate::error::RelayError;

#[derive(Debug, Default)]
pub struct CursorTracker {
    current: Option<Cursor>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the cursor at the feed's newest item.
    ///
    /// An empty feed leaves nothing to anchor on and is an error, as is a
    /// failed listing.
    pub async fn initialize<F: FeedSource + ?Sized>(
        &mut self,
        feed: &F,
    ) -> Result<&Cursor, RelayError> {
        let items = feed.list_new(&ListingOptions::newest()).await?;
        let newest = items.into_iter().next().ok_or_else(|| RelayError::EmptyFeed {
            community: feed.community().to_string(),
        })?;

        tracing::debug!(cursor = %newest.id, "Cursor initialized");
        Ok(&*self.current.insert(newest.cursor()))
    }

    /// Overwrite the cursor. Callers guarantee `id` is newer.
    pub fn advance(&mut self, id: Cursor) {
        self.current = Some(id);
    }

    pub fn current(&self) -> Option<&Cursor> {
        self.current.as_ref()
    }
}
