//! Common utilities for integration tests.
//!
//! Sample message bodies as delivered by SNS and S3 event notifications.

pub mod fixtures;

pub use fixtures::{decoder, s3_event_notification, sns_notification};
