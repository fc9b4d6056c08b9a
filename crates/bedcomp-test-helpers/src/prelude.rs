//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use bedcomp_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_some};

#[cfg(feature = "tracking")]
pub use crate::tracking::{AllocationWindow, TrackingAllocator, track};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    PRINTER_BED_QUAD, RAISED_CORNER_QUAD, Sample, TILTED_TRIANGLE, load, registry_with,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
