//! Operator-facing text and summary statistics.
//!
//! Field precision is fixed: X and Y to 1 decimal place, Z and the summary
//! statistics to 3. Host tooling parses these lines, so keep the wording
//! stable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fit::BedFit;
use crate::point::ProbePoint;

/// Logged the first time a registry commits a fit.
pub const DEPRECATION_NOTICE: &str = "3/4-point bed compensation is deprecated and will be removed in a future firmware release. Please use G29 mesh bed compensation instead.";

/// Mean and population standard deviation of a set of probe heights.
///
/// # Examples
///
/// ```
/// use bedcomp_probe::HeightStatistics;
///
/// let stats = HeightStatistics::from_heights([1.0, 1.2, 0.8]);
/// assert_eq!(stats.count, 3);
/// assert!((stats.mean - 1.0).abs() < 1e-4);
/// assert!((stats.std_dev - 0.1633).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeightStatistics {
    /// Number of heights summarised.
    pub count: usize,
    /// Arithmetic mean in mm, 0 when `count` is 0.
    pub mean: f32,
    /// Population standard deviation in mm, 0 when `count` is 0.
    pub std_dev: f32,
}

impl HeightStatistics {
    /// Summarises `heights` in a single pass, dividing by their number.
    pub fn from_heights(heights: impl IntoIterator<Item = f32>) -> Self {
        let sums = Sums::accumulate(heights);
        sums.finish(sums.count)
    }

    /// Summarises the heights of `num_slots` slots, of which only the
    /// measured ones are passed in.
    ///
    /// Sums are divided by `num_slots`, so slots without a usable height pull
    /// the mean towards zero. This is the convention of the `G32` heights
    /// reply.
    ///
    /// ```
    /// use bedcomp_probe::HeightStatistics;
    ///
    /// let stats = HeightStatistics::over_slots([0.1, 0.3], 3);
    /// assert_eq!(stats.count, 2);
    /// assert!((stats.mean - 0.1333).abs() < 1e-4);
    /// ```
    pub fn over_slots(heights: impl IntoIterator<Item = f32>, num_slots: usize) -> Self {
        Sums::accumulate(heights).finish(num_slots)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Sums {
    count: usize,
    sum: f32,
    sum_of_squares: f32,
}

impl Sums {
    fn accumulate(heights: impl IntoIterator<Item = f32>) -> Self {
        heights.into_iter().fold(Self::default(), |acc, z| Self {
            count: acc.count.saturating_add(1),
            sum: acc.sum + z,
            sum_of_squares: acc.sum_of_squares + z * z,
        })
    }

    fn finish(self, divisor: usize) -> HeightStatistics {
        if divisor == 0 {
            return HeightStatistics {
                count: self.count,
                ..HeightStatistics::default()
            };
        }

        let n = divisor as f32;
        let mean = self.sum / n;
        // With a single point rounding can leave a tiny negative variance.
        let std_dev = (self.sum_of_squares / n - mean * mean).max(0.0).sqrt();
        HeightStatistics {
            count: self.count,
            mean,
            std_dev,
        }
    }
}

impl fmt::Display for HeightStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:.3}, deviation from mean {:.3}",
            self.mean, self.std_dev
        )
    }
}

/// Confirmation returned by a successful fit.
///
/// Holds copies of the fitted points so it stays valid after the registry is
/// modified. `Display` renders the reply sent back to the operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary {
    fit: BedFit,
    points: [ProbePoint; 4],
    deprecation_notice: Option<&'static str>,
}

impl FitSummary {
    pub(crate) fn new(
        fit: BedFit,
        points: [ProbePoint; 4],
        deprecation_notice: Option<&'static str>,
    ) -> Self {
        Self {
            fit,
            points,
            deprecation_notice,
        }
    }

    /// The surface that was committed.
    pub fn fit(&self) -> BedFit {
        self.fit
    }

    /// The points the surface was fitted through, in slot order.
    pub fn points(&self) -> &[ProbePoint] {
        let len = self.fit.num_points().min(self.points.len());
        self.points.get(..len).unwrap_or_default()
    }

    /// The deprecation notice, present only on the first fit a registry makes.
    pub fn deprecation_notice(&self) -> Option<&'static str> {
        self.deprecation_notice
    }
}

impl fmt::Display for FitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bed equation fits points")?;
        for point in self.points() {
            write!(f, " [{:.1}, {:.1}, {:.3}]", point.x, point.y, point.z)?;
        }
        Ok(())
    }
}

/// Per-slot probe heights followed by their mean and deviation.
///
/// Slots are shown as `not set` when XY or Z is missing and as
/// `probing failed` when flagged as errors. Only good slots contribute to
/// the sums, but the mean and deviation are taken over every listed slot.
#[derive(Debug, Clone, Copy)]
pub struct ProbeHeightsReport<'a> {
    points: &'a [ProbePoint],
}

impl<'a> ProbeHeightsReport<'a> {
    pub(crate) fn new(points: &'a [ProbePoint]) -> Self {
        Self { points }
    }

    /// Statistics as printed: sums of the good slots over every listed slot.
    pub fn statistics(&self) -> HeightStatistics {
        HeightStatistics::over_slots(
            self.points.iter().filter(|p| p.is_good()).map(|p| p.z),
            self.points.len(),
        )
    }
}

impl fmt::Display for ProbeHeightsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("G32 bed probe heights:")?;
        for point in self.points {
            if !point.is_complete() {
                f.write_str(" not set")?;
            } else if point.has_probe_error() {
                f.write_str(" probing failed")?;
            } else {
                write!(f, " {:.3}", point.z)?;
            }
        }
        write!(f, ", {}", self.statistics())
    }
}

/// Every stored Z regardless of status, for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct DebugOffsetsReport<'a> {
    points: &'a [ProbePoint],
}

impl<'a> DebugOffsetsReport<'a> {
    pub(crate) fn new(points: &'a [ProbePoint]) -> Self {
        Self { points }
    }

    /// Statistics over every listed Z, including unset and failed slots.
    pub fn statistics(&self) -> HeightStatistics {
        HeightStatistics::from_heights(self.points.iter().map(|p| p.z))
    }
}

impl fmt::Display for DebugOffsetsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Z probe offsets:")?;
        for point in self.points {
            write!(f, " {:.3}", point.z)?;
        }
        write!(f, ", {}", self.statistics())
    }
}
