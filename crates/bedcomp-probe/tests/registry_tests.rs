//! Scenario tests for the probe point registry.

use bedcomp_probe::prelude::*;
use bedcomp_test_helpers::{assert_all_finite, assert_approx_eq, must, must_err};
use bedcomp_test_helpers::fixtures::{RAISED_CORNER_QUAD, Sample, TILTED_TRIANGLE, registry_with};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn plane_fit_is_exact_at_nodes() -> TestResult {
    let mut registry = registry_with(&TILTED_TRIANGLE)?;
    assert!(registry.good_probe_points(3));
    registry.fit(3)?;

    assert_approx_eq!(registry.interpolated_height_error(0.0, 0.0), 1.0, 1e-4);
    assert_approx_eq!(registry.interpolated_height_error(0.0, 10.0), 1.2, 1e-4);
    assert_approx_eq!(registry.interpolated_height_error(10.0, 10.0), 0.8, 1e-4);
    // Fourth corner of the square lies on the same plane
    assert_approx_eq!(registry.interpolated_height_error(10.0, 0.0), 0.6, 1e-4);
    Ok(())
}

#[test]
fn bilinear_centre_is_corner_average() -> TestResult {
    let mut registry = registry_with(&RAISED_CORNER_QUAD)?;
    registry.fit(4)?;
    assert_approx_eq!(registry.interpolated_height_error(5.0, 5.0), 0.25, 1e-4);
    assert_approx_eq!(registry.interpolated_height_error(0.0, 10.0), 1.0, 1e-6);
    Ok(())
}

#[test]
fn tilted_triangle_height_statistics() -> TestResult {
    let registry = registry_with(&TILTED_TRIANGLE)?;
    let stats = registry.probe_height_statistics(3);
    assert_eq!(stats.count, 3);
    assert_approx_eq!(stats.mean, 1.0, 1e-4);
    assert_approx_eq!(stats.std_dev, 0.1633, 1e-4);
    Ok(())
}

#[test]
fn unprobed_slots_count_towards_heights_mean() -> TestResult {
    let mut registry = registry_with(&[(0.0, 0.0, 0.1), (0.0, 10.0, 0.3)])?;
    registry.set_xy(2, 10.0, 10.0)?;

    assert_eq!(
        registry.report_probe_heights(3).to_string(),
        "G32 bed probe heights: 0.100 0.300 not set, mean 0.133, deviation from mean 0.125"
    );
    let stats = registry.probe_height_statistics(3);
    assert_eq!(stats.count, 2);
    assert_approx_eq!(stats.mean, 0.4 / 3.0, 1e-5);
    Ok(())
}

// --- Ordering: each constraint rejects on its own ---

fn violates(samples: [Sample; 4], num_points: usize) -> TestResult {
    let mut registry = registry_with(&samples)?;
    assert!(!registry.good_probe_point_ordering(num_points));
    let result = registry.fit(num_points).map(|s| s.fit());
    assert_eq!(
        result,
        Err(ProbeError::OrderingViolation {
            last_index: num_points.min(4) - 1
        })
    );
    assert_eq!(registry.active_fit(), BedFit::None);
    Ok(())
}

#[test]
fn ordering_requires_second_point_above_first() -> TestResult {
    let mut samples = RAISED_CORNER_QUAD;
    samples[1].1 = 0.0;
    violates(samples, 2)?;
    violates(samples, 4)
}

#[test]
fn ordering_requires_third_point_right_of_second() -> TestResult {
    let mut samples = RAISED_CORNER_QUAD;
    samples[2].0 = -1.0;
    violates(samples, 3)?;
    violates(samples, 4)
}

#[test]
fn ordering_requires_fourth_point_below_third() -> TestResult {
    let mut samples = RAISED_CORNER_QUAD;
    samples[3].1 = 10.0;
    violates(samples, 4)
}

#[test]
fn ordering_requires_fourth_point_right_of_first() -> TestResult {
    let mut samples = RAISED_CORNER_QUAD;
    samples[3].0 = 0.0;
    violates(samples, 4)
}

#[test]
fn ordering_ignores_points_beyond_count() -> TestResult {
    let mut samples = RAISED_CORNER_QUAD;
    samples[3] = (-5.0, 50.0, 0.0);
    let registry = registry_with(&samples)?;
    assert!(registry.good_probe_point_ordering(3));
    assert!(!registry.good_probe_point_ordering(4));
    Ok(())
}

#[test]
fn only_clockwise_from_bottom_left_permutation_is_accepted() -> TestResult {
    let mut accepted = Vec::new();
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let order = [a, b, c, d];
                    let distinct = (0..4).all(|i| order.contains(&i));
                    if !distinct {
                        continue;
                    }
                    let samples = order.map(|i| RAISED_CORNER_QUAD[i]);
                    if registry_with(&samples)?.good_probe_point_ordering(4) {
                        accepted.push(order);
                    }
                }
            }
        }
    }
    assert_eq!(accepted, vec![[0, 1, 2, 3]]);
    Ok(())
}

// --- Readiness ---

#[test]
fn good_probe_points_requires_xy() -> TestResult {
    let mut registry = ProbePointRegistry::new();
    registry.set_z(0, 0.1, false, false)?;
    assert!(!registry.good_probe_points(1));
    Ok(())
}

#[test]
fn good_probe_points_requires_z() -> TestResult {
    let mut registry = registry_with(&TILTED_TRIANGLE)?;
    registry.set_xy(3, 10.0, 0.0)?;
    assert!(registry.good_probe_points(3));
    assert!(!registry.good_probe_points(4));
    Ok(())
}

#[test]
fn good_probe_points_rejects_probe_errors() -> TestResult {
    let mut registry = registry_with(&TILTED_TRIANGLE)?;
    registry.set_z(2, 0.8, false, true)?;
    assert!(!registry.good_probe_points(3));
    assert!(registry.good_probe_points(2));

    // A successful retry clears the error
    registry.set_z(2, 0.8, true, false)?;
    assert!(registry.good_probe_points(3));
    Ok(())
}

#[test]
fn good_probe_points_after_clear() -> TestResult {
    let mut registry = registry_with(&TILTED_TRIANGLE)?;
    registry.clear_probe_heights();
    assert!(!registry.good_probe_points(1));
    assert_eq!(registry.number_of_probe_points(), 0);
    Ok(())
}

// --- Fit lifecycle ---

#[test]
fn new_heights_do_not_refit_plane() -> TestResult {
    let mut registry = registry_with(&TILTED_TRIANGLE)?;
    registry.fit(3)?;
    registry.set_z(0, 5.0, false, false)?;
    assert_approx_eq!(registry.interpolated_height_error(0.0, 0.0), 1.0, 1e-4);
    Ok(())
}

#[test]
fn refit_switches_between_plane_and_bilinear() -> TestResult {
    let mut registry = registry_with(&RAISED_CORNER_QUAD)?;
    registry.fit(4)?;
    assert_eq!(registry.num_active_points(), 4);

    registry.fit(3)?;
    assert_eq!(registry.num_active_points(), 3);
    assert!(matches!(registry.active_fit(), BedFit::Plane { .. }));
    assert_eq!(registry.object_model().num_points_probed, 3);
    Ok(())
}

#[test]
fn colinear_plane_points_are_rejected() -> TestResult {
    let mut registry = registry_with(&[(0.0, 0.0, 0.0), (10.0, 10.0, 0.1), (20.0, 20.0, 0.2)])?;
    let err = must_err(registry.fit(3));
    assert!(matches!(err, ProbeError::DegenerateGeometry { .. }));
    assert!(err.is_recoverable());
    assert!(registry.interpolated_height_error(5.0, 5.0).abs() < f32::EPSILON);
    Ok(())
}

#[test]
fn sliver_quad_is_rejected() -> TestResult {
    let mut registry = registry_with(&[
        (0.0, 0.0, 0.0),
        (0.0, 10.0, 0.1),
        (1.0e-39, 10.0, 0.2),
        (1.0e-39, 0.0, 0.3),
    ])?;
    assert!(registry.good_probe_points(4));
    assert!(registry.good_probe_point_ordering(4));

    let err = must_err(registry.fit(4));
    assert!(matches!(err, ProbeError::DegenerateQuad { .. }));
    assert!(err.is_recoverable());
    assert_eq!(registry.active_fit(), BedFit::None);
    assert_all_finite!([
        registry.interpolated_height_error(5.0, 5.0),
        registry.interpolated_height_error(0.0, 0.0),
    ]);
    Ok(())
}

#[test]
fn sliver_quad_keeps_previous_fit() -> TestResult {
    let mut registry = registry_with(&RAISED_CORNER_QUAD)?;
    registry.fit(4)?;
    registry.set_xy(3, 1.0e-39, 0.0)?;

    assert!(matches!(
        registry.fit(4),
        Err(ProbeError::DegenerateQuad { .. })
    ));
    assert!(matches!(registry.active_fit(), BedFit::Bilinear { .. }));
    assert_approx_eq!(registry.interpolated_height_error(5.0, 5.0), 0.25, 1e-4);
    Ok(())
}

#[test]
fn nan_coordinates_never_reach_a_fit() -> TestResult {
    let mut registry = registry_with(&RAISED_CORNER_QUAD)?;
    for index in 0..4 {
        assert_eq!(
            registry.set_xy(index, f32::NAN, f32::NAN),
            Err(ProbeError::NonFiniteValue { index })
        );
    }

    must(registry.fit(4));
    assert_all_finite!(
        [(0.0, 0.0), (5.0, 5.0), (10.0, 10.0), (-20.0, 40.0)]
            .map(|(x, y)| registry.interpolated_height_error(x, y))
    );
    Ok(())
}

#[test]
fn fit_summary_lists_only_fitted_points() -> TestResult {
    let mut registry = registry_with(&RAISED_CORNER_QUAD)?;
    let summary = must(registry.fit(3));
    assert_eq!(summary.points().len(), 3);
    assert!(summary.to_string().starts_with("Bed equation fits points [0.0, 0.0, 0.000]"));
    Ok(())
}

#[test]
fn object_model_reports_counts() -> TestResult {
    let mut registry = registry_with(&RAISED_CORNER_QUAD)?;
    assert_eq!(
        registry.object_model(),
        ObjectModel {
            num_points_probed: 0,
            num_points_ready: 4
        }
    );
    registry.fit(4)?;
    assert_eq!(registry.object_model().num_points_probed, 4);
    Ok(())
}
