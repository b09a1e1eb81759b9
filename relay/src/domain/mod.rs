//! Domain layer
//!
//! Contains the relay's data model with no external dependencies.
//! - `entities`: Feed items, the cursor, and the webhook payload
//! - `ports`: Trait definitions for the feed source and the notifier

pub mod entities;
pub mod ports;
