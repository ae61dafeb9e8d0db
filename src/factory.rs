//! Free functions for building and combining results.
//!
//! # Examples
//!
//! ```rust
//! use resultant::{Result, combine, failure, success};
//!
//! let all_good: Result<Vec<i32>, Vec<&str>> = combine([success(1), success(2)]);
//! assert_eq!(all_good, success(vec![1, 2]));
//!
//! let mixed = combine([success(1), failure("x"), success(3), failure("y")]);
//! assert_eq!(mixed, failure(vec!["x", "y"]));
//! ```

use crate::action::LazyAction;
#[cfg(feature = "lazy")]
use crate::lazy::LazyResult;
use crate::result::Result;

// =============================================================================
// Basic Construction
// =============================================================================

/// Creates a successful result holding `value`.
///
/// # Examples
///
/// ```rust
/// use resultant::success;
///
/// let result = success::<_, String>("OK");
/// assert!(result.has_success());
/// ```
#[inline]
pub const fn success<S, F>(value: S) -> Result<S, F> {
    Result::Success(value)
}

/// Creates a failed result holding `value`.
///
/// An absent failure payload is expressed with `Option`:
///
/// ```rust
/// use resultant::failure;
///
/// let result = failure::<i32, _>(None::<&str>);
/// assert!(result.has_failure());
/// ```
#[inline]
pub const fn failure<S, F>(value: F) -> Result<S, F> {
    Result::Failure(value)
}

/// Creates an unresolved [`LazyResult`] backed by `supplier`.
///
/// # Examples
///
/// ```rust
/// use resultant::{lazy, success};
///
/// let result = lazy(|| success::<_, ()>(5));
/// assert!(!result.is_resolved());
/// assert_eq!(result.or_else(0), 5);
/// ```
#[cfg(feature = "lazy")]
#[inline]
pub fn lazy<S, F, P>(supplier: P) -> LazyResult<S, F>
where
    P: FnOnce() -> Result<S, F> + Send + 'static,
{
    LazyResult::new(supplier)
}

/// Marks `action` as compatible with lazy evaluation.
#[inline]
pub const fn lazy_action<A>(action: A) -> LazyAction<A> {
    LazyAction::new(action)
}

// =============================================================================
// Construction Conveniences
// =============================================================================

/// Converts a possibly-absent value into a result with a unit failure.
///
/// # Examples
///
/// ```rust
/// use resultant::{failure, of_nullable, success};
///
/// assert_eq!(of_nullable(Some(1)), success(1));
/// assert_eq!(of_nullable::<i32>(None), failure(()));
/// ```
#[inline]
pub fn of_nullable<S>(value: Option<S>) -> Result<S, ()> {
    of_nullable_with(value, || ())
}

/// Converts a possibly-absent value into a result, producing the failure on demand.
///
/// `failure_supplier` is only called when `value` is `None`.
#[inline]
pub fn of_nullable_with<S, F, P>(value: Option<S>, failure_supplier: P) -> Result<S, F>
where
    P: FnOnce() -> F,
{
    match value {
        Some(value) => Result::Success(value),
        None => Result::Failure(failure_supplier()),
    }
}

/// Converts an `Option` into a result with a unit failure.
#[inline]
pub fn of_optional<S>(optional: Option<S>) -> Result<S, ()> {
    of_nullable(optional)
}

/// Converts an `Option` into a result, producing the failure on demand.
#[inline]
pub fn of_optional_with<S, F, P>(optional: Option<S>, failure_supplier: P) -> Result<S, F>
where
    P: FnOnce() -> F,
{
    of_nullable_with(optional, failure_supplier)
}

/// Runs a fallible task and captures its outcome as a result.
///
/// # Examples
///
/// ```rust
/// use resultant::{of_callable, success};
///
/// let parsed = of_callable(|| "42".parse::<i32>());
/// assert_eq!(parsed, success(42));
///
/// let broken = of_callable(|| "x".parse::<i32>());
/// assert!(broken.has_failure());
/// ```
#[inline]
pub fn of_callable<S, E, T>(task: T) -> Result<S, E>
where
    T: FnOnce() -> std::result::Result<S, E>,
{
    task().into()
}

/// Runs a fallible task and maps its error into a failure value.
///
/// `error_mapper` is only called when the task fails.
///
/// # Examples
///
/// ```rust
/// use resultant::{failure, of_callable_with};
///
/// let result = of_callable_with(|| "x".parse::<u8>(), |error| error.to_string());
/// assert_eq!(result, failure("invalid digit found in string".to_string()));
/// ```
#[inline]
pub fn of_callable_with<S, E, F, T, M>(task: T, error_mapper: M) -> Result<S, F>
where
    T: FnOnce() -> std::result::Result<S, E>,
    M: FnOnce(E) -> F,
{
    of_callable(task).map_failure(error_mapper)
}

// =============================================================================
// Combination and Extraction
// =============================================================================

/// Combines results into a single one.
///
/// Returns every success value in order when all inputs succeed, otherwise
/// every failure value in encounter order. An empty input succeeds with an
/// empty vector.
#[inline]
pub fn combine<S, F, I>(results: I) -> Result<Vec<S>, Vec<F>>
where
    I: IntoIterator<Item = Result<S, F>>,
{
    combine_all(results)
}

/// Combines results into caller-chosen containers.
///
/// # Examples
///
/// ```rust
/// use resultant::{Result, combine_all, failure, success};
/// use std::collections::BTreeSet;
///
/// let combined: Result<BTreeSet<i32>, Vec<&str>> =
///     combine_all([success(3), success(1), success(3)]);
/// assert_eq!(combined, success(BTreeSet::from([1, 3])));
///
/// let combined: Result<Vec<i32>, String> = combine_all([failure("a"), success(1), failure("b")]);
/// assert_eq!(combined, failure("ab".to_string()));
/// ```
pub fn combine_all<S, F, I, SuccessCollection, FailureCollection>(
    results: I,
) -> Result<SuccessCollection, FailureCollection>
where
    I: IntoIterator<Item = Result<S, F>>,
    SuccessCollection: FromIterator<S>,
    FailureCollection: FromIterator<F>,
{
    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for result in results {
        match result {
            Result::Success(value) => {
                if failures.is_empty() {
                    successes.push(value);
                }
            }
            Result::Failure(value) => failures.push(value),
        }
    }

    if failures.is_empty() {
        Result::Success(successes.into_iter().collect())
    } else {
        Result::Failure(failures.into_iter().collect())
    }
}

/// Returns the success value of `result`, if any.
#[inline]
pub fn to_optional<S, F>(result: Result<S, F>) -> Option<S> {
    result.get_success()
}

/// Returns the failure value of `result`, if any.
#[inline]
pub fn to_optional_failure<S, F>(result: Result<S, F>) -> Option<F> {
    result.get_failure()
}
