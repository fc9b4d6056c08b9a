//! Fixed-capacity probe point registry.

use tracing::{debug, warn};

use crate::error::{ProbeError, ProbeResult};
use crate::fit::BedFit;
use crate::object_model::ObjectModel;
use crate::point::ProbePoint;
use crate::report::{
    DEPRECATION_NOTICE, DebugOffsetsReport, FitSummary, HeightStatistics, ProbeHeightsReport,
};
use crate::status::ProbeStatus;

/// Number of probe point slots in a registry.
pub const MAX_PROBE_POINTS: usize = 32;

const _: () = assert!(MAX_PROBE_POINTS >= 4, "bilinear fit reads four slots");

/// Stores manually probed bed points and the correction surface fitted to them.
///
/// Points are filled in slot order by the probing driver: XY first, then Z
/// once the point has been measured. [`fit`](Self::fit) derives a plane
/// (3 points) or bilinear surface (4 points), after which
/// [`interpolated_height_error`](Self::interpolated_height_error) can be
/// called from the motion path.
///
/// Writing new heights does not invalidate the active fit; call `fit` again
/// after re-probing.
///
/// # Examples
///
/// ```
/// use bedcomp_probe::ProbePointRegistry;
///
/// let mut registry = ProbePointRegistry::new();
/// for (i, (x, y, z)) in [(0.0, 0.0, 1.0), (0.0, 10.0, 1.2), (10.0, 10.0, 0.8)]
///     .into_iter()
///     .enumerate()
/// {
///     registry.set_xy(i, x, y)?;
///     registry.set_z(i, z, false, false)?;
/// }
///
/// assert!(registry.good_probe_points(3));
/// let summary = registry.fit(3)?;
/// assert_eq!(
///     summary.to_string(),
///     "Bed equation fits points [0.0, 0.0, 1.000] [0.0, 10.0, 1.200] [10.0, 10.0, 0.800]"
/// );
/// assert!((registry.interpolated_height_error(10.0, 10.0) - 0.8).abs() < 1e-4);
/// # Ok::<(), bedcomp_probe::ProbeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProbePointRegistry {
    points: [ProbePoint; MAX_PROBE_POINTS],
    fit: BedFit,
    deprecation_reported: bool,
}

impl ProbePointRegistry {
    /// Creates an empty registry with no active compensation.
    pub const fn new() -> Self {
        Self {
            points: [ProbePoint::UNSET; MAX_PROBE_POINTS],
            fit: BedFit::None,
            deprecation_reported: false,
        }
    }

    /// Number of slots.
    pub const fn capacity(&self) -> usize {
        MAX_PROBE_POINTS
    }

    /// Records the X and Y coordinates of a probe point. Z state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::IndexOutOfRange`] if `index` is not a valid slot
    /// and [`ProbeError::NonFiniteValue`] if either coordinate is NaN or
    /// infinite. The slot is left unchanged on error.
    pub fn set_xy(&mut self, index: usize, x: f32, y: f32) -> ProbeResult<()> {
        let point = self.slot_mut(index)?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(ProbeError::NonFiniteValue { index });
        }
        point.x = x;
        point.y = y;
        point.status.insert(ProbeStatus::XY_SET);
        Ok(())
    }

    /// Records the measured height of a probe point.
    ///
    /// Replaces the correction and error flags of the slot. A slot flagged
    /// with `was_error` still counts as having a height, but is never
    /// reported as good.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::IndexOutOfRange`] if `index` is not a valid slot
    /// and [`ProbeError::NonFiniteValue`] if `z` is NaN or infinite.
    pub fn set_z(
        &mut self,
        index: usize,
        z: f32,
        was_xy_corrected: bool,
        was_error: bool,
    ) -> ProbeResult<()> {
        let point = self.slot_mut(index)?;
        if !z.is_finite() {
            return Err(ProbeError::NonFiniteValue { index });
        }
        point.z = z;
        point.status.insert(ProbeStatus::Z_SET);
        point.status.set(ProbeStatus::XY_CORRECTED, was_xy_corrected);
        point.status.set(ProbeStatus::PROBE_ERROR, was_error);

        if was_error {
            debug!(index, z, "probe point recorded with probing error");
        }
        Ok(())
    }

    /// Number of leading slots that have both XY and Z, stopping at the first gap.
    pub fn number_of_probe_points(&self) -> usize {
        self.points.iter().take_while(|p| p.is_complete()).count()
    }

    /// Forgets every recorded height so old points are not reused.
    ///
    /// Coordinates, correction and error flags are kept, so the same
    /// positions can be probed again.
    pub fn clear_probe_heights(&mut self) {
        for point in &mut self.points {
            point.status.remove(ProbeStatus::Z_SET);
        }
    }

    /// Checks that the first `num_points` points run clockwise from minimum X and Y.
    ///
    /// Only XY coordinates are consulted. Every applicable constraint must
    /// hold strictly:
    ///
    /// - 2+ points: `y1 > y0`
    /// - 3+ points: `x2 > x1`
    /// - 4+ points: `y3 < y2` and `x0 < x3`
    pub fn good_probe_point_ordering(&self, num_points: usize) -> bool {
        let [p0, p1, p2, p3, ..] = &self.points;

        if num_points >= 2 && p1.y <= p0.y {
            return false;
        }
        if num_points >= 3 && p2.x <= p1.x {
            return false;
        }
        if num_points >= 4 && p3.y >= p2.y {
            return false;
        }
        if num_points >= 4 && p0.x >= p3.x {
            return false;
        }
        true
    }

    /// Fits the bed correction surface through the first `num_points` points.
    ///
    /// Readiness of the points is the caller's concern; check
    /// [`good_probe_points`](Self::good_probe_points) first. On error the
    /// previously active fit is left in place.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::OrderingViolation`] if the points are not clockwise
    ///   from minimum X and Y.
    /// - [`ProbeError::DegenerateGeometry`] if three points are colinear in XY.
    /// - [`ProbeError::DegenerateQuad`] if four points have no usable width
    ///   or height.
    /// - [`ProbeError::UnsupportedPointCount`] for anything but 3 or 4 points.
    pub fn fit(&mut self, num_points: usize) -> ProbeResult<FitSummary> {
        if !self.good_probe_point_ordering(num_points) {
            return Err(ProbeError::OrderingViolation {
                last_index: num_points.min(4).saturating_sub(1),
            });
        }

        let corners = self.corners();
        let [p0, p1, p2, p3] = &corners;
        let fit = match num_points {
            3 => BedFit::plane(p0, p1, p2)?,
            4 => BedFit::bilinear(p0, p1, p3)?,
            count => return Err(ProbeError::UnsupportedPointCount { count }),
        };

        self.fit = fit;
        debug!(num_points, ?fit, "bed compensation fitted");

        let deprecation_notice = if self.deprecation_reported {
            None
        } else {
            warn!("{DEPRECATION_NOTICE}");
            self.deprecation_reported = true;
            Some(DEPRECATION_NOTICE)
        };

        Ok(FitSummary::new(fit, corners, deprecation_notice))
    }

    /// Height error of the bed at `(x, y)` under the active fit.
    ///
    /// Returns 0 when no fit is active. Constant time and allocation free.
    #[inline]
    pub fn interpolated_height_error(&self, x: f32, y: f32) -> f32 {
        let [p0, p1, p2, p3] = self.corners();
        self.fit.height_error(x, y, [p0.z, p1.z, p2.z, p3.z])
    }

    /// True if each of the first `num_points` slots has XY and Z and no probe error.
    ///
    /// Always false if `num_points` exceeds the capacity.
    pub fn good_probe_points(&self, num_points: usize) -> bool {
        num_points <= MAX_PROBE_POINTS
            && self.points.iter().take(num_points).all(ProbePoint::is_good)
    }

    /// Probe heights of the first `num_points` slots with their mean and deviation.
    ///
    /// Render with `to_string()` for the operator reply.
    pub fn report_probe_heights(&self, num_points: usize) -> ProbeHeightsReport<'_> {
        ProbeHeightsReport::new(self.leading(num_points))
    }

    /// Statistics of the heights reply: good slots summed, divided by `num_points`.
    pub fn probe_height_statistics(&self, num_points: usize) -> HeightStatistics {
        self.report_probe_heights(num_points).statistics()
    }

    /// Raw Z values of the first `num_points` slots, whatever their status.
    pub fn debug_report(&self, num_points: usize) -> DebugOffsetsReport<'_> {
        DebugOffsetsReport::new(self.leading(num_points))
    }

    /// Emits [`debug_report`](Self::debug_report) at debug level.
    pub fn log_debug_report(&self, num_points: usize) {
        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!("{}", self.debug_report(num_points));
        }
    }

    /// The active correction surface.
    pub fn active_fit(&self) -> BedFit {
        self.fit
    }

    /// Number of points feeding the active fit: 0, 3 or 4.
    pub fn num_active_points(&self) -> usize {
        self.fit.num_points()
    }

    /// The slot at `index`, if it exists.
    pub fn point(&self, index: usize) -> Option<&ProbePoint> {
        self.points.get(index)
    }

    /// All slots in index order.
    pub fn points(&self) -> &[ProbePoint] {
        &self.points
    }

    /// Snapshot for the diagnostics surface.
    pub fn object_model(&self) -> ObjectModel {
        ObjectModel::new(self.num_active_points(), self.number_of_probe_points())
    }

    fn slot_mut(&mut self, index: usize) -> ProbeResult<&mut ProbePoint> {
        self.points.get_mut(index).ok_or(ProbeError::IndexOutOfRange {
            index,
            capacity: MAX_PROBE_POINTS,
        })
    }

    fn leading(&self, num_points: usize) -> &[ProbePoint] {
        self.points
            .get(..num_points.min(MAX_PROBE_POINTS))
            .unwrap_or_default()
    }

    fn corners(&self) -> [ProbePoint; 4] {
        let [p0, p1, p2, p3, ..] = self.points;
        [p0, p1, p2, p3]
    }
}

impl Default for ProbePointRegistry {
    fn default() -> Self {
        Self::new()
    }
}
