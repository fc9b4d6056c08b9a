//! Convenience re-exports.
//!
//! ```
//! use bedcomp_probe::prelude::*;
//!
//! let registry = ProbePointRegistry::new();
//! assert_eq!(registry.capacity(), MAX_PROBE_POINTS);
//! ```

pub use crate::error::{ProbeError, ProbeResult};
pub use crate::fit::BedFit;
pub use crate::object_model::ObjectModel;
pub use crate::point::ProbePoint;
pub use crate::registry::{MAX_PROBE_POINTS, ProbePointRegistry};
pub use crate::report::{FitSummary, HeightStatistics};
pub use crate::status::ProbeStatus;
