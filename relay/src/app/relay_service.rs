//! Relay Service
//!
//! Owns the main loop: poll the feed on a fixed timer, deliver at most one
//! new post per tick, then advance the cursor.
//!
//! State machine: `Starting -> Polling -> (Idle | Processing) -> Polling -> ...`
//!
//! One post per tick is the pacing policy. A burst of N posts drains over N
//! intervals; the lookahead query only reports how many are still waiting.

use std::sync::Arc;

use chrono::Utc;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use crate::app::{CursorTracker, FeedPoller, NotificationFormatter};
use crate::domain::entities::Cursor;
use crate::domain::ports::{FeedSource, Notifier};
use crate::error::RelayError;

/// Where the relay is in its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Starting,
    Polling,
    Idle,
    Processing,
}

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing newer than the cursor (or the fetch failed)
    Idle,
    /// One post was delivered; `backlog` more are waiting behind it
    Delivered { id: Cursor, backlog: usize },
}

/// Service driving the poll -> format -> deliver loop
pub struct RelayService<F, N>
where
    F: FeedSource,
    N: Notifier,
{
    poller: FeedPoller<F>,
    notifier: Arc<N>,
    formatter: NotificationFormatter,
    cursor: CursorTracker,
    poll_interval: Duration,
    state: RelayState,
}

impl<F, N> RelayService<F, N>
where
    F: FeedSource,
    N: Notifier,
{
    pub fn new(
        feed: Arc<F>,
        notifier: Arc<N>,
        formatter: NotificationFormatter,
        poll_interval: Duration,
    ) -> Self {
        Self {
            poller: FeedPoller::new(feed),
            notifier,
            formatter,
            cursor: CursorTracker::new(),
            poll_interval,
            state: RelayState::Starting,
        }
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.current()
    }

    /// Authenticate and anchor the cursor on the newest post.
    ///
    /// Every error here is fatal.
    pub async fn start(&mut self) -> Result<(), RelayError> {
        self.state = RelayState::Starting;
        let feed = self.poller.source();

        feed.authenticate().await?;
        tracing::info!(community = feed.community(), "Feed session established");

        let cursor = self.cursor.initialize(feed).await?;
        tracing::info!(cursor = %cursor, "Starting from newest post");

        self.state = RelayState::Polling;
        Ok(())
    }

    /// One timer tick.
    ///
    /// Fetch failures count as "no new posts". A delivery failure is returned
    /// with the cursor left on the previous post.
    pub async fn tick(&mut self) -> Result<TickOutcome, RelayError> {
        let cursor = self.cursor.current().cloned().ok_or(RelayError::NotStarted)?;
        self.state = RelayState::Polling;

        let items = match self.poller.fetch_since(&cursor, Some(1)).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch new submissions");
                Vec::new()
            }
        };

        let Some(item) = items.into_iter().next() else {
            tracing::debug!("No new submissions. Continuing.");
            self.state = RelayState::Idle;
            return Ok(TickOutcome::Idle);
        };

        self.state = RelayState::Processing;
        tracing::debug!(
            id = %item.id,
            thumbnail = item.thumbnail.as_deref().unwrap_or(""),
            "New submission"
        );

        let payload = self.formatter.format(&item);
        let response = self.notifier.deliver(&payload).await?;
        tracing::info!(id = %item.id, response = %response, "Post delivered");

        let id = item.cursor();
        self.cursor.advance(id.clone());

        let backlog = match self.poller.count_backlog(&id).await {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!(error = %e, "Backlog lookahead failed");
                0
            }
        };
        if backlog > 0 {
            tracing::warn!(backlog, "{} submissions left to process", backlog);
        }

        self.state = RelayState::Polling;
        Ok(TickOutcome::Delivered { id, backlog })
    }

    /// Tick forever at the poll interval, first tick one interval from now.
    ///
    /// Only returns on a fatal error.
    pub async fn run(&mut self) -> Result<(), RelayError> {
        let mut ticker = interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            tracing::debug!(now = %Utc::now(), "Tick");
            self.tick().await?;
        }
    }
}
