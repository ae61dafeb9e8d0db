//! Error types for result accessors.
//!
//! These errors describe programming mistakes at the call site (asking a
//! failure for its success value, observing a poisoned lazy result). They
//! never travel through the success/failure channel of a
//! [`Result`](crate::Result), which is reserved for domain outcomes.

use thiserror::Error;

/// Represents an accessor invoked on a result that cannot satisfy it.
///
/// # Examples
///
/// ```rust
/// use resultant::{ResultError, failure};
///
/// let result = failure::<i32, _>("boom");
/// assert_eq!(result.success_or_error(), Err(ResultError::NotSuccess));
/// assert_eq!(
///     format!("{}", ResultError::NotSuccess),
///     "not a successful result"
/// );
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultError {
    /// A success value was demanded from a failed result.
    #[error("not a successful result")]
    NotSuccess,
    /// A failure value was demanded from a successful result.
    #[error("not a failed result")]
    NotFailure,
    /// The supplier of a lazy result panicked, so no value will ever be available.
    #[error("lazy result supplier panicked; result is poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ResultError::NotSuccess, "not a successful result")]
    #[case(ResultError::NotFailure, "not a failed result")]
    #[case(
        ResultError::Poisoned,
        "lazy result supplier panicked; result is poisoned"
    )]
    fn test_result_error_display(#[case] error: ResultError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_result_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ResultError::Poisoned);
    }
}
