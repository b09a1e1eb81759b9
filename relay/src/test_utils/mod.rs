//! Test utilities
//!
//! Manual mock implementations, test fixtures, and a fake HTTP server.
//!
//! The feed source mock is hand-written because its listing semantics
//! (`before` + `limit`) need real state; `Notifier` also has a mockall
//! `MockNotifier` for expectation-style tests.

pub mod fixtures;
pub mod mocks;

pub use fake_server::*;
pub use fixtures::*;
pub use mocks::*;
