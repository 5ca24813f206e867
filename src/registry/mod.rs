//! Camera discovery with time-bounded caching and parallel probing.
//!
//! This module answers "which camera devices are usable right now" cheaply:
//! - Device probing via [`CameraProbe`] (production backend: [`NokhwaProbe`])
//! - Parallel sweeps over a bounded index range
//! - Sweep results cached for a configurable TTL via [`CameraRegistry`]

mod cache;
mod probe;
mod sweep;
mod types;

pub use cache::{CacheEntry, Clock, SystemClock};
pub use probe::{CameraProbe, NokhwaProbe};
pub use types::{CameraDevice, CameraListResponse};

use std::sync::Mutex;
use std::time::Duration;

use sweep::sweep;

/// Default upper bound (exclusive) on probed device indices.
pub const DEFAULT_MAX_INDEX: u32 = 3;

/// Default time a cached sweep result stays valid.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Camera discovery registry.
///
/// Holds the last complete sweep result and the clock used to age it, so
/// hardware is probed only when the cached result has expired. The cache
/// entry is the only shared mutable state and is replaced as a single unit:
/// readers see either the old complete entry or the new complete entry.
pub struct CameraRegistry<P, C = SystemClock> {
    probe: P,
    clock: C,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl CameraRegistry<NokhwaProbe, SystemClock> {
    /// Registry with the production probe and clock.
    /// This is the preferred constructor for production use.
    pub fn with_defaults() -> Self {
        Self::new(NokhwaProbe, SystemClock, DEFAULT_CACHE_TTL)
    }
}

impl<P: CameraProbe, C: Clock> CameraRegistry<P, C> {
    /// Create a registry with an explicit probe, clock, and cache TTL.
    pub fn new(probe: P, clock: C, ttl: Duration) -> Self {
        Self {
            probe,
            clock,
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// The cache TTL this registry was built with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The probe backing this registry.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// The clock backing this registry.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// List the camera devices that are currently openable.
    ///
    /// Returns the cached sweep result verbatim while it is younger than the
    /// TTL; otherwise probes every index in `[0, max_index)` in parallel,
    /// replaces the cached entry wholesale, and returns the fresh result.
    ///
    /// Never errors: an empty list means no cameras answered, which is
    /// indistinguishable from none being connected. Two callers that both
    /// observe an expired entry will both sweep; probing is idempotent, so
    /// the last complete entry wins.
    pub fn list_available_cameras(&self, max_index: u32) -> Vec<CameraDevice> {
        let now = self.clock.now();

        if let Ok(guard) = self.entry.lock() {
            if let Some(entry) = guard.as_ref() {
                if entry.is_fresh(now, self.ttl) {
                    log::debug!("Camera cache hit ({} device(s))", entry.devices.len());
                    return entry.devices.clone();
                }
            }
        }

        log::info!("Camera cache miss, sweeping indices [0, {})", max_index);
        let devices = sweep(&self.probe, max_index);

        if let Ok(mut guard) = self.entry.lock() {
            *guard = Some(CacheEntry {
                devices: devices.clone(),
                fetched_at: self.clock.now(),
            });
        }

        devices
    }
}
