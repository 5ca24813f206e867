//! Parallel probe sweep over a device index range.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;

use super::probe::CameraProbe;
use super::types::CameraDevice;

/// Probe every index in `[0, max_index)` and collect the openable ones.
///
/// One thread per index: each probe owns its open/release cycle end to end,
/// since a capture handle cannot be assumed shareable across concurrent
/// probes. All probes are joined before aggregation, and the output is
/// sorted ascending by index regardless of completion order.
///
/// Probe failure of any kind, a `false` return or a panic inside the probe,
/// excludes that index silently; one misbehaving driver must not take down
/// the sweep. An all-failed sweep yields an empty list, which is a valid
/// result, not an error.
pub fn sweep<P: CameraProbe>(probe: &P, max_index: u32) -> Vec<CameraDevice> {
    let (tx, rx) = mpsc::channel();

    // thread::scope joins every probe thread before returning, so no
    // partial result is observable past this block.
    thread::scope(|s| {
        for index in 0..max_index {
            let tx = tx.clone();
            s.spawn(move || {
                // A panic inside the probe counts as a failed open; left
                // uncaught it would re-raise out of thread::scope and abort
                // the whole sweep.
                let opened = catch_unwind(AssertUnwindSafe(|| probe.is_openable(index)))
                    .unwrap_or(false);
                if opened {
                    let _ = tx.send(CameraDevice::at_index(index));
                }
            });
        }
    });
    drop(tx);

    let mut devices: Vec<CameraDevice> = rx.iter().collect();
    devices.sort_by_key(|d| d.index);

    log::debug!(
        "Probe sweep over [0, {}) found {} device(s)",
        max_index,
        devices.len()
    );

    devices
}
