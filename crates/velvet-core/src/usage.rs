//! Usage tracking collaborator.
//!
//! The presentation layer polls a read-only snapshot of daily request usage
//! to render counters and the rate-limit indicator. The profile core never
//! mutates usage; recording requests is the collaborator's concern.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Read-only view of today's request usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Requests made so far today
    pub requests_today: u32,
    /// Daily request allowance
    pub daily_limit: u32,
    /// True once the allowance is exhausted
    pub is_rate_limited: bool,
}

/// Collaborator exposing usage snapshots.
///
/// Implementations own the counting and reset policy; consumers only read.
pub trait UsageTracker: Send + Sync {
    /// Returns the current usage snapshot.
    fn snapshot(&self) -> UsageSnapshot;
}

/// In-process tracker with a fixed daily allowance.
///
/// Suitable for a single user session; the count resets with the process.
#[derive(Debug)]
pub struct InMemoryUsageTracker {
    requests: AtomicU32,
    daily_limit: u32,
}

impl InMemoryUsageTracker {
    pub fn new(daily_limit: u32) -> Self {
        Self {
            requests: AtomicU32::new(0),
            daily_limit,
        }
    }

    /// Records one request.
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for InMemoryUsageTracker {
    fn default() -> Self {
        Self::new(50)
    }
}

impl UsageTracker for InMemoryUsageTracker {
    fn snapshot(&self) -> UsageSnapshot {
        let requests_today = self.requests.load(Ordering::Relaxed);
        UsageSnapshot {
            requests_today,
            daily_limit: self.daily_limit,
            is_rate_limited: requests_today >= self.daily_limit,
        }
    }
}
