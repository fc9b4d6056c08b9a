//! Unwrap helpers that name the failing value.
//!
//! Use these in tests instead of `unwrap()`/`expect()`; `#[track_caller]`
//! points the panic at the test line.

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with the error value.
///
/// ```rust
/// use bedcomp_test_helpers::must;
///
/// let value = must(Ok::<_, &str>(3));
/// assert_eq!(value, 3);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` if `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap an `Err`, panicking with the success value if the call did not fail.
///
/// # Panics
///
/// Panics if the result is `Ok`.
#[track_caller]
pub fn must_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("must_err: expected Err, got Ok({v:?})"),
        Err(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_ok() {
        assert_eq!(must(Ok::<_, String>(7)), 7);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err_panics() {
        must(Err::<i32, _>("boom"));
    }

    #[test]
    fn test_must_err_returns_error() {
        assert_eq!(must_err(Err::<i32, _>("boom")), "boom");
    }

    #[test]
    #[should_panic(expected = "must_some: missing")]
    fn test_must_some_panics() {
        must_some(None::<u8>, "missing");
    }
}
