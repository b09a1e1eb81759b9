//! Domain ports (traits)
//!
//! Port traits define interfaces that the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_source;
pub mod notifier;

pub use feed_source::{FeedSource, ListingOptions};
pub use notifier::Notifier;
#[cfg(test)]
pub use notifier::MockNotifier;
