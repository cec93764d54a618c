//! Statistics for decode runs.

use crate::decoder::Resolved;
use chrono::{DateTime, Duration, Utc};
use qp_error::ParseError;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by workers decoding messages with one decoder.
///
/// Updates are lock-free; any number of threads can record outcomes
/// through a shared reference.
#[derive(Debug)]
pub struct DecodeStats {
    /// When counting started
    started_at: DateTime<Utc>,

    /// Payloads resolved to a path that passed the filter
    accepted: AtomicU64,

    /// Payloads resolved to a path rejected by the filter
    skipped: AtomicU64,

    /// Payloads that failed to decode
    failed: AtomicU64,
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            accepted: AtomicU64::new(0),
            skipped: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Record the outcome of resolving one payload.
    pub fn record(&self, outcome: &Result<Resolved, ParseError>) {
        let counter = match outcome {
            Ok(Resolved::Accepted(_)) => &self.accepted,
            Ok(Resolved::Skipped(_)) => &self.skipped,
            Err(_) => &self.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a point-in-time copy of the counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            started_at: self.started_at,
            taken_at: Utc::now(),
            accepted: self.accepted.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of [`DecodeStats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub started_at: DateTime<Utc>,
    pub taken_at: DateTime<Utc>,
    pub accepted: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl StatsSnapshot {
    /// Total payloads seen.
    pub fn total(&self) -> u64 {
        self.accepted + self.skipped + self.failed
    }

    /// Time elapsed between start and snapshot.
    pub fn duration(&self) -> Duration {
        self.taken_at - self.started_at
    }

    /// Returns true if any payload failed to decode.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
