//! Camera probe capability.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

/// Attempt to open a capture handle for a device index.
///
/// A probe must acquire and immediately release the handle; it never holds
/// the device open past the call. Any open failure is reported as `false`,
/// not as an error.
pub trait CameraProbe: Send + Sync {
    /// Returns true if a capture handle could be opened for `index`.
    fn is_openable(&self, index: u32) -> bool;
}

/// Production probe backed by nokhwa.
///
/// The `Camera` handle is opened inside the probing thread and dropped
/// before returning, which releases the device on every exit path.
#[derive(Debug, Default)]
pub struct NokhwaProbe;

impl CameraProbe for NokhwaProbe {
    fn is_openable(&self, index: u32) -> bool {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);

        match Camera::new(CameraIndex::Index(index), requested) {
            Ok(_camera) => true,
            Err(e) => {
                log::debug!("Camera {} not openable: {}", index, e);
                false
            }
        }
    }
}
