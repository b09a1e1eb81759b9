//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod discord;
pub mod reddit;

pub use discord::DiscordWebhookClient;
pub use reddit::RedditClientImpl;
