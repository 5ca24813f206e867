//! Time-bounded cache state for discovery results.

use std::time::{Duration, Instant};

use super::types::CameraDevice;

/// Source of "now" for cache-age decisions.
///
/// Production uses [`SystemClock`]; tests substitute a manual clock so
/// expiry can be exercised without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Clock backed by `Instant::now()`.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// One complete sweep result plus the instant it was produced.
///
/// An entry always reflects a full sweep; it is replaced wholesale on
/// refresh, never merged or partially updated.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub devices: Vec<CameraDevice>,
    pub fetched_at: Instant,
}

impl CacheEntry {
    /// Whether this entry is still usable at `now` under the given TTL.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}
