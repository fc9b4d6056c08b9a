//! Manual bed probe points and 3/4-point bed compensation
//!
//! This crate stores a small, fixed number of manually probed bed points and
//! fits a low-order correction surface through them:
//!
//! - **3 points**: a plane
//! - **4 points**: a ruled bilinear surface over a clockwise quad
//!
//! The probing driver records coordinates with
//! [`ProbePointRegistry::set_xy`] and measured heights with
//! [`ProbePointRegistry::set_z`]; a command handler then calls
//! [`ProbePointRegistry::fit`]. Motion code queries the correction with
//! [`ProbePointRegistry::interpolated_height_error`].
//!
//! # RT Safety
//!
//! `interpolated_height_error` is constant time and allocation free. The
//! registry is a fixed-size value with no heap storage; text reports only
//! allocate when rendered.
//!
//! # Example
//!
//! ```
//! use bedcomp_probe::{BedFit, ProbePointRegistry};
//!
//! let mut registry = ProbePointRegistry::new();
//! let corners = [(0.0, 0.0, 0.0), (0.0, 10.0, 1.0), (10.0, 10.0, 0.0), (10.0, 0.0, 0.0)];
//! for (i, (x, y, z)) in corners.into_iter().enumerate() {
//!     registry.set_xy(i, x, y)?;
//!     registry.set_z(i, z, false, false)?;
//! }
//!
//! let summary = registry.fit(4)?;
//! assert!(matches!(summary.fit(), BedFit::Bilinear { .. }));
//! assert!((registry.interpolated_height_error(5.0, 5.0) - 0.25).abs() < 1e-4);
//! # Ok::<(), bedcomp_probe::ProbeError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod fit;
pub mod object_model;
pub mod point;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod status;

pub use error::{ProbeError, ProbeResult};
pub use fit::BedFit;
pub use object_model::ObjectModel;
pub use point::ProbePoint;
pub use registry::{MAX_PROBE_POINTS, ProbePointRegistry};
pub use report::{
    DEPRECATION_NOTICE, DebugOffsetsReport, FitSummary, HeightStatistics, ProbeHeightsReport,
};
pub use status::ProbeStatus;
