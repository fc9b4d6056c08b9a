//! Probe point slot.

use serde::{Deserialize, Serialize};

use crate::status::ProbeStatus;

/// One slot of the registry: a sampled bed position and what is known about it.
///
/// `z` is only meaningful while [`ProbeStatus::Z_SET`] is present; use
/// [`height`](Self::height) to read it safely.
///
/// # Examples
///
/// ```
/// use bedcomp_probe::{ProbePoint, ProbeStatus};
///
/// let point = ProbePoint::UNSET;
/// assert_eq!(point.status, ProbeStatus::empty());
/// assert!(point.height().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbePoint {
    /// Bed X coordinate in mm.
    pub x: f32,
    /// Bed Y coordinate in mm.
    pub y: f32,
    /// Measured height error in mm.
    pub z: f32,
    /// Which of the fields above are valid.
    pub status: ProbeStatus,
}

impl ProbePoint {
    /// An empty slot. Z is zeroed so that reports of unprobed slots look tidy.
    pub const UNSET: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        status: ProbeStatus::empty(),
    };

    /// Both XY and Z have been recorded.
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Complete and probed without error.
    pub fn is_good(&self) -> bool {
        self.status.is_good()
    }

    /// The probe flagged this measurement as failed.
    pub fn has_probe_error(&self) -> bool {
        self.status.contains(ProbeStatus::PROBE_ERROR)
    }

    /// The probe corrected X and Y for its offset.
    pub fn was_xy_corrected(&self) -> bool {
        self.status.contains(ProbeStatus::XY_CORRECTED)
    }

    /// The recorded height, if one has been set since the last clear.
    pub fn height(&self) -> Option<f32> {
        self.status.contains(ProbeStatus::Z_SET).then_some(self.z)
    }
}

impl Default for ProbePoint {
    fn default() -> Self {
        Self::UNSET
    }
}
