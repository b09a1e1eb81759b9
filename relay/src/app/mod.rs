//! Application layer
//!
//! Contains the relay's use cases.
//! Services coordinate between domain entities, ports, and external systems.

pub mod cursor;
pub mod formatter;
pub mod poller;
pub mod relay_service;

pub use cursor::CursorTracker;
pub use formatter::NotificationFormatter;
pub use poller::FeedPoller;
#[allow(unused_imports)]
pub use relay_service::{RelayService, RelayState, TickOutcome};
