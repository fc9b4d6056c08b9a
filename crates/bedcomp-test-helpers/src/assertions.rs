//! Float assertions.

/// Assert that two floating-point values are within `tolerance`.
///
/// ```rust
/// use bedcomp_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(0.25_f32, 0.2501, 1e-3);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that every value in an iterator of floats is finite.
///
/// ```rust
/// use bedcomp_test_helpers::assert_all_finite;
///
/// assert_all_finite!([0.0_f32, -1.5, 3.25]);
/// ```
#[macro_export]
macro_rules! assert_all_finite {
    ($values:expr $(,)?) => {
        for (i, value) in ::core::iter::IntoIterator::into_iter($values).enumerate() {
            if !value.is_finite() {
                panic!("assertion failed: value at index {} is not finite: {:?}", i, value);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_approx_eq_within_tolerance() {
        assert_approx_eq!(1.0_f32, 1.0004, 1e-3);
        assert_approx_eq!(-2.0_f64, -2.0, 0.0, "exact match");
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_approx_eq_outside_tolerance() {
        assert_approx_eq!(1.0_f32, 1.1, 1e-3);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_approx_eq_rejects_nan() {
        assert_approx_eq!(f32::NAN, 0.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "not finite")]
    fn test_all_finite_rejects_infinity() {
        assert_all_finite!([0.0_f32, f32::INFINITY]);
    }
}
