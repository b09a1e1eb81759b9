//! postrelay
//!
//! Watches a subreddit's "new" listing and relays each new post to a Discord
//! webhook as an embed, one post per poll interval.
//! Uses hexagonal (ports & adapters) architecture so the loop runs against
//! in-memory sources in tests.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use adapters::{DiscordWebhookClient, RedditClientImpl};
use app::{NotificationFormatter, RelayService};
use config::Config;
use error::RelayError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,postrelay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting postrelay...");

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Relay stopped");
        return Err(e.into());
    }
    Ok(())
}

async fn run() -> Result<(), RelayError> {
    let config = Config::from_env()?;
    tracing::info!(
        subreddit = %config.subreddit,
        poll_interval_secs = config.poll_interval.as_secs(),
        "Configuration loaded"
    );

    let reddit = Arc::new(RedditClientImpl::new(
        config.reddit.clone(),
        &config.reddit_auth_url,
        &config.reddit_api_url,
        &config.user_agent,
        &config.subreddit,
    )?);
    let discord = Arc::new(DiscordWebhookClient::new(config.webhook_url())?);

    let mut relay = RelayService::new(
        reddit,
        discord,
        NotificationFormatter::from_config(&config),
        config.poll_interval,
    );

    relay.start().await?;

    tokio::select! {
        result = relay.run() => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received Ctrl-C, shutting down...");
            Ok(())
        }
    }
}
