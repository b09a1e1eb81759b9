//! Notification formatter
//!
//! Maps one feed item to one webhook payload. Item text is passed through
//! verbatim; the destination is responsible for truncation.

use crate::config::Config;
use crate::domain::entities::{Embed, EmbedAuthor, EmbedField, FeedItem, WebhookPayload};

const PROFILE_URL_BASE: &str = "https://www.reddit.com/user";

#[derive(Debug, Clone)]
pub struct NotificationFormatter {
    community_display: String,
    color: String,
    icon_url: String,
}

impl NotificationFormatter {
    pub fn new(community_display: &str, color: &str, icon_url: &str) -> Self {
        Self {
            community_display: community_display.to_string(),
            color: color.to_string(),
            icon_url: icon_url.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.subreddit_display, &config.embed_color, &config.icon_url)
    }

    pub fn format(&self, item: &FeedItem) -> WebhookPayload {
        WebhookPayload {
            embeds: vec![Embed {
                title: format!("New post to r/{}", self.community_display),
                url: item.permalink.clone(),
                color: self.color.clone(),
                description: None,
                fields: vec![EmbedField {
                    name: item.title.clone(),
                    value: item.url.clone(),
                    inline: false,
                }],
                author: EmbedAuthor {
                    name: item.author.clone(),
                    url: profile_url(&item.author),
                    icon_url: self.icon_url.clone(),
                },
            }],
        }
    }
}

fn profile_url(author: &str) -> String {
    format!("{}/{}/", PROFILE_URL_BASE, author)
}
