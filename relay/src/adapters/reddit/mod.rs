//! Reddit adapter
//!
//! Implementation of the feed source over the Reddit OAuth API.

pub mod client;

pub use client::RedditClientImpl;
