//! Per-slot status flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Facts recorded about a single probe point slot.
    ///
    /// `XY_SET` and `Z_SET` are independent: the coordinates of a point are
    /// normally given well before it is probed.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ProbeStatus: u8 {
        /// X and Y coordinates have been recorded
        const XY_SET       = 0b0000_0001;

        /// A Z height has been recorded
        const Z_SET        = 0b0000_0010;

        /// The probe adjusted X and Y for its offset when measuring
        const XY_CORRECTED = 0b0000_0100;

        /// The Z measurement is known to be invalid
        const PROBE_ERROR  = 0b0000_1000;
    }
}

impl ProbeStatus {
    /// Both coordinates and height are present.
    pub const COMPLETE: Self = Self::XY_SET.union(Self::Z_SET);

    /// True when both `XY_SET` and `Z_SET` are present, whatever the error flag says.
    pub fn is_complete(self) -> bool {
        self.contains(Self::COMPLETE)
    }

    /// True when the slot is complete and was probed without error.
    pub fn is_good(self) -> bool {
        self.is_complete() && !self.contains(Self::PROBE_ERROR)
    }
}
