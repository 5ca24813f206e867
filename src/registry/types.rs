//! Camera registry types and data structures.

use std::fmt;

use serde::Serialize;

/// A capture device slot that answered a probe as openable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CameraDevice {
    /// Human-readable device name, derived from the index
    pub label: String,
    /// Device index for selection
    pub index: u32,
}

impl CameraDevice {
    /// Build the descriptor for an openable index.
    pub fn at_index(index: u32) -> Self {
        Self {
            label: format!("Camera {}", index),
            index,
        }
    }
}

impl fmt::Display for CameraDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.label)
    }
}

/// Wire shape returned by the query surfaces (CLI `--json` and `GET /cameras`).
#[derive(Debug, Clone, Serialize)]
pub struct CameraListResponse {
    pub cameras: Vec<CameraDevice>,
}
