//! Integration tests for queuepath.
//!
//! These exercise the decoder end to end through its public API, with the
//! message bodies real publishers put on the queue.
//!
//! ```bash
//! cargo test -p integration-tests
//! ```

mod common;
mod concurrency_test;
mod decode_test;
