//! Domain entities

mod feed_item;
mod notification;

pub use feed_item::{Cursor, FeedItem};
pub use notification::{Embed, EmbedAuthor, EmbedField, WebhookPayload};
