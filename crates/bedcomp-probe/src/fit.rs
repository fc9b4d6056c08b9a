//! Low-order bed correction surfaces.
//!
//! Two surfaces are supported, selected by the number of probe points:
//!
//! - **3 points**: a plane through the points, stored as
//!   `z = a_x·x + a_y·y + a_const`.
//! - **4 points**: a ruled (bilinear) surface through the corners of a quad
//!   laid out clockwise from the bottom left:
//!
//! ```text
//!   ^  [1]      [2]
//!   |
//!   Y
//!   |
//!   |  [0]      [3]
//!      -----X---->
//! ```
//!
//! The bilinear variant keeps only the mapping of XY into the unit square;
//! the corner heights stay in the registry and are read at query time.

use serde::{Deserialize, Serialize};

use crate::error::{ProbeError, ProbeResult};
use crate::point::ProbePoint;

/// Relative size below which the XY cross product of the plane points is
/// treated as zero.
///
/// Compared against the larger of the two products that make up the cross
/// product, so it tracks f32 cancellation rather than bed size.
pub const PLANE_DEGENERACY_TOLERANCE: f32 = 1.0e-5;

/// The active correction surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BedFit {
    /// No compensation.
    #[default]
    None,
    /// Plane through probe points 0, 1 and 2.
    Plane {
        /// Height change per mm of X.
        a_x: f32,
        /// Height change per mm of Y.
        a_y: f32,
        /// Height at the origin.
        a_const: f32,
    },
    /// Ruled surface through probe points 0 to 3.
    Bilinear {
        /// X of corner 0.
        origin_x: f32,
        /// Y of corner 0.
        origin_y: f32,
        /// `1 / (x3 - x0)`
        inv_width: f32,
        /// `1 / (y1 - y0)`
        inv_height: f32,
    },
}

impl BedFit {
    /// Fits a plane through three points using the cross product of the two
    /// edge vectors from `p0`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::DegenerateGeometry`] if the points are colinear
    /// when projected onto XY, which would make the plane vertical.
    pub fn plane(p0: &ProbePoint, p1: &ProbePoint, p2: &ProbePoint) -> ProbeResult<Self> {
        let x10 = p1.x - p0.x;
        let y10 = p1.y - p0.y;
        let z10 = p1.z - p0.z;
        let x20 = p2.x - p0.x;
        let y20 = p2.y - p0.y;
        let z20 = p2.z - p0.z;

        let a = y10 * z20 - z10 * y20;
        let b = z10 * x20 - x10 * z20;
        let xy = x10 * y20;
        let yx = y10 * x20;
        let c = xy - yx;

        if !c.is_finite() || c.abs() <= PLANE_DEGENERACY_TOLERANCE * xy.abs().max(yx.abs()) {
            return Err(ProbeError::DegenerateGeometry { cross_z: c });
        }

        let d = -(p1.x * a + p1.y * b + p1.z * c);
        let fit = Self::Plane {
            a_x: -a / c,
            a_y: -b / c,
            a_const: -d / c,
        };

        if fit.is_finite() {
            Ok(fit)
        } else {
            Err(ProbeError::DegenerateGeometry { cross_z: c })
        }
    }

    /// Maps the quad `p0` (bottom left), `p1` (top left), `p3` (bottom right)
    /// onto the unit square. The top right corner only contributes its height.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::DegenerateQuad`] if the width or height is so
    /// small (or non-finite) that the mapping overflows.
    pub fn bilinear(p0: &ProbePoint, p1: &ProbePoint, p3: &ProbePoint) -> ProbeResult<Self> {
        let width = p3.x - p0.x;
        let height = p1.y - p0.y;
        let fit = Self::Bilinear {
            origin_x: p0.x,
            origin_y: p0.y,
            inv_width: 1.0 / width,
            inv_height: 1.0 / height,
        };

        if fit.is_finite() {
            Ok(fit)
        } else {
            Err(ProbeError::DegenerateQuad { width, height })
        }
    }

    /// Number of registry points feeding this surface: 0, 3 or 4.
    pub fn num_points(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Plane { .. } => 3,
            Self::Bilinear { .. } => 4,
        }
    }

    /// Height error at `(x, y)`.
    ///
    /// `corner_heights` are the Z values of probe points 0 to 3 and are only
    /// read by the bilinear surface. Points outside the probed quad are
    /// extrapolated.
    #[inline]
    pub fn height_error(&self, x: f32, y: f32, corner_heights: [f32; 4]) -> f32 {
        match *self {
            Self::None => 0.0,
            Self::Plane { a_x, a_y, a_const } => a_x * x + a_y * y + a_const,
            Self::Bilinear {
                origin_x,
                origin_y,
                inv_width,
                inv_height,
            } => {
                let u = (x - origin_x) * inv_width;
                let v = (y - origin_y) * inv_height;
                bilinear_blend(u, v, corner_heights)
            }
        }
    }

    fn is_finite(&self) -> bool {
        match *self {
            Self::None => true,
            Self::Plane { a_x, a_y, a_const } => {
                a_x.is_finite() && a_y.is_finite() && a_const.is_finite()
            }
            Self::Bilinear {
                origin_x,
                origin_y,
                inv_width,
                inv_height,
            } => {
                origin_x.is_finite()
                    && origin_y.is_finite()
                    && inv_width.is_finite()
                    && inv_height.is_finite()
            }
        }
    }
}

/// Blends the four corner heights at unit-square coordinates `(u, v)`.
#[inline]
fn bilinear_blend(u: f32, v: f32, [z0, z1, z2, z3]: [f32; 4]) -> f32 {
    (1.0 - u) * (1.0 - v) * z0 + u * (1.0 - v) * z3 + (1.0 - u) * v * z1 + u * v * z2
}
