//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::collections::HashMap;

use crate::app::NotificationFormatter;
use crate::config::Config;
use crate::domain::entities::FeedItem;

/// Create a test post with the given id
pub fn test_item(id: &str) -> FeedItem {
    FeedItem {
        id: id.to_string(),
        title: format!("Post {}", id),
        permalink: format!("https://www.reddit.com/r/test/comments/{}/", id),
        url: format!("https://example.com/{}", id),
        author: "test-author".to_string(),
        thumbnail: None,
    }
}

/// Create posts in the given (newest-first) order
pub fn test_items(ids: &[&str]) -> Vec<FeedItem> {
    ids.iter().map(|id| test_item(id)).collect()
}

pub fn test_formatter() -> NotificationFormatter {
    NotificationFormatter::new("Test", "16763904", "https://i.imgur.com/3NtinwD.png")
}

/// Config pointing every external URL at `base_url`
pub fn test_config(base_url: &str) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        ("REDDIT_CLIENT", "client-id".to_string()),
        ("REDDIT_SECRET", "client-secret".to_string()),
        ("REDDIT_USERNAME", "relaybot".to_string()),
        ("REDDIT_PASSWORD", "hunter2".to_string()),
        ("DISCORD_WEBHOOK_CLIENT", "1234".to_string()),
        ("DISCORD_WEBHOOK_SECRET", "s3cr3t".to_string()),
        ("RELAY_SUBREDDIT", "test".to_string()),
        ("RELAY_SUBREDDIT_DISPLAY", "Test".to_string()),
        ("REDDIT_AUTH_URL", base_url.to_string()),
        ("REDDIT_API_URL", base_url.to_string()),
        ("DISCORD_WEBHOOK_BASE_URL", format!("{}/webhooks/", base_url)),
    ]);
    Config::from_vars(|key| vars.get(key).cloned()).unwrap()
}
