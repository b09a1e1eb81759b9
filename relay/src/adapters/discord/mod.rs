//! Discord adapter

pub mod client;

pub use client::DiscordWebhookClient;
