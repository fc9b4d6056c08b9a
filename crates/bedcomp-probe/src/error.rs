//! Error types for probe point registry operations.
//!
//! Every variant is `Copy` and carries only plain numbers, so reporting a
//! rejected fit never allocates. The `Display` text is the reply shown to the
//! operator.

/// Error type for probe point registry operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ProbeError {
    /// The probe points are not clockwise starting near minimum X and Y.
    #[error(
        "Probe points P0 to P{last_index} must be in clockwise order starting near minimum X and Y"
    )]
    OrderingViolation {
        /// Index of the last point that took part in the ordering check.
        last_index: usize,
    },

    /// Only 3-point and 4-point compensation is supported.
    #[error("Bed calibration: {count} points provided but only 3 and 4 points supported")]
    UnsupportedPointCount {
        /// Number of points requested.
        count: usize,
    },

    /// The three plane points are colinear in XY and do not define a plane.
    #[error(
        "Bed calibration: probe points P0 to P2 are colinear in XY and do not define a plane (normal z {cross_z})"
    )]
    DegenerateGeometry {
        /// Z component of the normal vector that was rejected.
        cross_z: f32,
    },

    /// The 4-point quad has no usable width or height, so it cannot be mapped
    /// onto the unit square.
    #[error(
        "Bed calibration: probe points P0, P1 and P3 do not span a quad (width {width}, height {height})"
    )]
    DegenerateQuad {
        /// `x3 - x0`
        width: f32,
        /// `y1 - y0`
        height: f32,
    },

    /// A coordinate or height that is NaN or infinite.
    #[error("Probe point {index} has a non-finite coordinate or height")]
    NonFiniteValue {
        /// Slot the value was written to.
        index: usize,
    },

    /// A slot index past the end of the registry.
    #[error("Probe point index {index} is out of range, only {capacity} points can be stored")]
    IndexOutOfRange {
        /// Requested slot index.
        index: usize,
        /// Number of slots in the registry.
        capacity: usize,
    },
}

impl ProbeError {
    /// Stable numeric code for log sinks that cannot carry text.
    ///
    /// ```
    /// use bedcomp_probe::ProbeError;
    ///
    /// assert_eq!(ProbeError::UnsupportedPointCount { count: 5 }.code(), 2);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            Self::OrderingViolation { .. } => 1,
            Self::UnsupportedPointCount { .. } => 2,
            Self::DegenerateGeometry { .. } => 3,
            Self::IndexOutOfRange { .. } => 4,
            Self::DegenerateQuad { .. } => 5,
            Self::NonFiniteValue { .. } => 6,
        }
    }

    /// Whether the operator can fix this by re-probing or re-ordering points.
    ///
    /// An out-of-range index is a bug in the caller, not bad probe data.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Result alias for probe point registry operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_message_names_point_range() {
        let err = ProbeError::OrderingViolation { last_index: 3 };
        assert_eq!(
            err.to_string(),
            "Probe points P0 to P3 must be in clockwise order starting near minimum X and Y"
        );
    }

    #[test]
    fn test_unsupported_count_message() {
        let err = ProbeError::UnsupportedPointCount { count: 5 };
        assert_eq!(
            err.to_string(),
            "Bed calibration: 5 points provided but only 3 and 4 points supported"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            ProbeError::OrderingViolation { last_index: 1 },
            ProbeError::UnsupportedPointCount { count: 2 },
            ProbeError::DegenerateGeometry { cross_z: 0.0 },
            ProbeError::IndexOutOfRange {
                index: 40,
                capacity: 32,
            },
            ProbeError::DegenerateQuad {
                width: 0.0,
                height: 10.0,
            },
            ProbeError::NonFiniteValue { index: 0 },
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in errors.iter().skip(i + 1) {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_recoverability() {
        assert!(ProbeError::DegenerateGeometry { cross_z: 0.0 }.is_recoverable());
        assert!(ProbeError::NonFiniteValue { index: 2 }.is_recoverable());
        assert!(
            !ProbeError::IndexOutOfRange {
                index: 40,
                capacity: 32
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err = ProbeError::UnsupportedPointCount { count: 0 };
        let _: &dyn std::error::Error = &err;
    }
}
