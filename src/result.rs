//! Result type - the outcome of an operation, either a success or a failure.
//!
//! This module provides the `Result<S, F>` type, a value-based sum type that
//! is either a `Success(S)` or a `Failure(F)`. Instead of unwinding on
//! failure, operations return a `Result` and callers compose the outcome
//! with combinators:
//!
//! - Transformation (`map`, `map_success`, `map_failure`)
//! - Chaining (`flat_map`, `flat_map_success`, `flat_map_failure`)
//! - Filtering and recovery (`filter`, `recover`)
//! - Side-effecting inspection (`if_success`, `if_failure`, `if_success_or_else`)
//! - Terminal observation (`or_else`, `or_else_map`, `get_success`, `stream_success`, ...)
//!
//! Every combinator consumes the receiver and produces a new value; nothing
//! is mutated in place. A combinator that does not apply to the current
//! variant hands the same payload back untouched and never calls its
//! function argument.
//!
//! Payloads may themselves be "absent": use `Option<T>` (or `()`) as the
//! success or failure type when an outcome carries no information.
//!
//! # Examples
//!
//! ```rust
//! use resultant::{Result, failure, success};
//!
//! let length = success::<_, String>("OK").map_success(str::len).or_else(0);
//! assert_eq!(length, 2);
//!
//! let recovered = failure::<usize, _>("boom").or_else_map(str::len);
//! assert_eq!(recovered, 4);
//!
//! let result: Result<i32, String> = Result::Success(3);
//! assert_eq!(format!("{result}"), "Success[3]");
//! ```

use std::fmt;

use crate::action::Action;
use crate::error::ResultError;

/// A value that is either a success or a failure.
///
/// Two results are equal when they are the same variant and their payloads
/// are equal; hashing and ordering follow the same rule.
///
/// # Type Parameters
///
/// * `S` - The type of the success value
/// * `F` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use resultant::{Result, success};
///
/// let parsed: Result<i32, String> = success(21);
/// let doubled = parsed.map_success(|value| value * 2);
/// assert_eq!(doubled, Result::Success(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Result` may be a failure, which should be handled"]
pub enum Result<S, F> {
    /// The success variant.
    Success(S),
    /// The failure variant.
    Failure(F),
}

static_assertions::assert_impl_all!(Result<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Result<i32, ()>: Copy);

impl<S, F> Result<S, F> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{failure, success};
    ///
    /// assert!(success::<_, ()>(1).has_success());
    /// assert!(!failure::<(), _>(1).has_success());
    /// ```
    #[inline]
    pub const fn has_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::failure;
    ///
    /// // An absent payload is still a failure.
    /// assert!(failure::<(), Option<&str>>(None).has_failure());
    /// ```
    #[inline]
    pub const fn has_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Alias of [`has_success`](Self::has_success).
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.has_success()
    }

    /// Alias of [`has_failure`](Self::has_failure).
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.has_failure()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, or `other` if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{failure, success};
    ///
    /// assert_eq!(success::<_, ()>(5).or_else(-1), 5);
    /// assert_eq!(failure::<i32, _>("boom").or_else(-1), -1);
    /// ```
    #[inline]
    pub fn or_else(self, other: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => other,
        }
    }

    /// Returns the success value, or maps the failure value into one.
    ///
    /// `mapper` is only called for a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::failure;
    ///
    /// assert_eq!(failure::<usize, _>("boom").or_else_map(str::len), 4);
    /// ```
    #[inline]
    pub fn or_else_map<M>(self, mapper: M) -> S
    where
        M: FnOnce(F) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(value) => mapper(value),
        }
    }

    /// Returns the success value, or computes a fallback ignoring the failure.
    #[inline]
    pub fn or_else_get<M>(self, supplier: M) -> S
    where
        M: FnOnce() -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    /// Returns the success value as an `Option`, consuming the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{failure, success};
    ///
    /// assert_eq!(success::<_, ()>(1).get_success(), Some(1));
    /// assert_eq!(failure::<i32, _>(1).get_success(), None);
    /// ```
    #[inline]
    pub fn get_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure value as an `Option`, consuming the result.
    #[inline]
    pub fn get_failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    /// Converts from `&Result<S, F>` to `Result<&S, &F>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&S, &F> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    /// Returns an iterator yielding the success value, if any.
    ///
    /// The iterator has exactly one element for a success and none for a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{failure, success};
    ///
    /// assert_eq!(success::<_, ()>(3).stream_success().collect::<Vec<_>>(), vec![3]);
    /// assert_eq!(failure::<i32, _>(3).stream_success().count(), 0);
    /// ```
    #[inline]
    pub fn stream_success(self) -> std::option::IntoIter<S> {
        self.get_success().into_iter()
    }

    /// Returns an iterator yielding the failure value, if any.
    #[inline]
    pub fn stream_failure(self) -> std::option::IntoIter<F> {
        self.get_failure().into_iter()
    }

    // =========================================================================
    // Accessors Failing on the Wrong Variant
    // =========================================================================

    /// Returns the success value, or [`ResultError::NotSuccess`] for a failure.
    ///
    /// # Errors
    ///
    /// Returns `ResultError::NotSuccess` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{ResultError, failure, success};
    ///
    /// assert_eq!(success::<_, ()>("AB").success_or_error(), Ok("AB"));
    /// assert_eq!(failure::<(), _>(1).success_or_error(), Err(ResultError::NotSuccess));
    /// ```
    #[inline]
    pub fn success_or_error(self) -> std::result::Result<S, ResultError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(ResultError::NotSuccess),
        }
    }

    /// Returns the failure value, or [`ResultError::NotFailure`] for a success.
    ///
    /// # Errors
    ///
    /// Returns `ResultError::NotFailure` if this is a `Success`.
    #[inline]
    pub fn failure_or_error(self) -> std::result::Result<F, ResultError> {
        match self {
            Self::Success(_) => Err(ResultError::NotFailure),
            Self::Failure(value) => Ok(value),
        }
    }

    /// Returns the success value, or the error produced by `mapper` from the failure.
    ///
    /// # Errors
    ///
    /// Returns `mapper(failure)` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::failure;
    ///
    /// let raised = failure::<i32, _>(404).success_or_raise(|code| format!("status {code}"));
    /// assert_eq!(raised, Err("status 404".to_string()));
    /// ```
    #[inline]
    pub fn success_or_raise<E, M>(self, mapper: M) -> std::result::Result<S, E>
    where
        M: FnOnce(F) -> E,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(value) => Err(mapper(value)),
        }
    }

    /// Returns the success value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Result::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Returns the failure value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Success(_) => panic!("called `Result::unwrap_failure()` on a `Success` value"),
            Self::Failure(value) => value,
        }
    }

    // =========================================================================
    // Side-effecting Inspection
    // =========================================================================

    /// Performs `action` on the success value and returns the same result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::success;
    ///
    /// let mut seen = Vec::new();
    /// let result = success::<_, ()>(7).if_success(|value: &i32| seen.push(*value));
    /// assert_eq!(seen, vec![7]);
    /// assert!(result.has_success());
    /// ```
    #[inline]
    pub fn if_success<A>(self, action: A) -> Self
    where
        A: Action<S>,
    {
        if let Self::Success(value) = &self {
            action.perform(value);
        }
        self
    }

    /// Performs `action` on the failure value and returns the same result.
    #[inline]
    pub fn if_failure<A>(self, action: A) -> Self
    where
        A: Action<F>,
    {
        if let Self::Failure(value) = &self {
            action.perform(value);
        }
        self
    }

    /// Performs `success_action` or `failure_action`, whichever matches, and
    /// returns the same result.
    #[inline]
    pub fn if_success_or_else<A, B>(self, success_action: A, failure_action: B) -> Self
    where
        A: Action<S>,
        B: Action<F>,
    {
        match &self {
            Self::Success(value) => success_action.perform(value),
            Self::Failure(value) => failure_action.perform(value),
        }
        self
    }

    // =========================================================================
    // Filtering and Recovery
    // =========================================================================

    /// Turns a success into a failure when `is_acceptable` rejects its value.
    ///
    /// The rejected value is handed to `mapper` to build the failure. A
    /// failure is returned unchanged and neither function is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{Result, success};
    ///
    /// let even = success(3).filter(|value| value % 2 == 0, |value| format!("{value} is odd"));
    /// assert_eq!(even, Result::Failure("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn filter<P, M>(self, is_acceptable: P, mapper: M) -> Self
    where
        P: FnOnce(&S) -> bool,
        M: FnOnce(S) -> F,
    {
        match self {
            Self::Success(value) => {
                if is_acceptable(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(mapper(value))
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Turns a failure into a success when `is_recoverable` accepts its value.
    ///
    /// The recoverable value is handed to `mapper` to build the success. A
    /// success is returned unchanged and neither function is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{Result, failure};
    ///
    /// let fallback = failure::<usize, _>("missing").recover(|error| *error == "missing", |_| 0);
    /// assert_eq!(fallback, Result::Success(0));
    /// ```
    #[inline]
    pub fn recover<P, M>(self, is_recoverable: P, mapper: M) -> Self
    where
        P: FnOnce(&F) -> bool,
        M: FnOnce(F) -> S,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(value) => {
                if is_recoverable(&value) {
                    Self::Success(mapper(value))
                } else {
                    Self::Failure(value)
                }
            }
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies one of two functions depending on the variant.
    ///
    /// Only the matching function is ever called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{Result, failure};
    ///
    /// let mapped = failure::<i32, _>("e").map(|_: i32| -> i32 { unreachable!() }, str::len);
    /// assert_eq!(mapped, Result::Failure(1));
    /// ```
    #[inline]
    pub fn map<S2, F2, SuccessMapper, FailureMapper>(
        self,
        success_mapper: SuccessMapper,
        failure_mapper: FailureMapper,
    ) -> Result<S2, F2>
    where
        SuccessMapper: FnOnce(S) -> S2,
        FailureMapper: FnOnce(F) -> F2,
    {
        match self {
            Self::Success(value) => Result::Success(success_mapper(value)),
            Self::Failure(value) => Result::Failure(failure_mapper(value)),
        }
    }

    /// Applies a function to the success value if present.
    #[inline]
    pub fn map_success<S2, M>(self, mapper: M) -> Result<S2, F>
    where
        M: FnOnce(S) -> S2,
    {
        match self {
            Self::Success(value) => Result::Success(mapper(value)),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    /// Applies a function to the failure value if present.
    #[inline]
    pub fn map_failure<F2, M>(self, mapper: M) -> Result<S, F2>
    where
        M: FnOnce(F) -> F2,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => Result::Failure(mapper(value)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Replaces this result with the one returned by the matching function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{Result, failure, success};
    ///
    /// let parse = |text: &str| -> Result<i32, String> {
    ///     text.parse().map_or_else(|_| failure(format!("bad: {text}")), success)
    /// };
    /// let chained = success::<_, String>("12").flat_map(parse, failure);
    /// assert_eq!(chained, Result::Success(12));
    /// ```
    #[inline]
    pub fn flat_map<S2, F2, SuccessMapper, FailureMapper>(
        self,
        success_mapper: SuccessMapper,
        failure_mapper: FailureMapper,
    ) -> Result<S2, F2>
    where
        SuccessMapper: FnOnce(S) -> Result<S2, F2>,
        FailureMapper: FnOnce(F) -> Result<S2, F2>,
    {
        match self {
            Self::Success(value) => success_mapper(value),
            Self::Failure(value) => failure_mapper(value),
        }
    }

    /// Chains a computation on the success value (monadic bind).
    #[inline]
    pub fn flat_map_success<S2, M>(self, mapper: M) -> Result<S2, F>
    where
        M: FnOnce(S) -> Result<S2, F>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    /// Chains a computation on the failure value.
    #[inline]
    pub fn flat_map_failure<F2, M>(self, mapper: M) -> Result<S, F2>
    where
        M: FnOnce(F) -> Result<S, F2>,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => mapper(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the result by applying one of two functions.
    #[inline]
    pub fn fold<T, SuccessFunction, FailureFunction>(
        self,
        success_function: SuccessFunction,
        failure_function: FailureFunction,
    ) -> T
    where
        SuccessFunction: FnOnce(S) -> T,
        FailureFunction: FnOnce(F) -> T,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(value) => failure_function(value),
        }
    }

    /// Swaps the variants: a success becomes a failure and vice versa.
    #[inline]
    pub fn swap(self) -> Result<F, S> {
        match self {
            Self::Success(value) => Result::Failure(value),
            Self::Failure(value) => Result::Success(value),
        }
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_std(self) -> std::result::Result<S, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(value) => Err(value),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<S: fmt::Debug, F: fmt::Debug> fmt::Debug for Result<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(value) => formatter.debug_tuple("Failure").field(value).finish(),
        }
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Result<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success[{value}]"),
            Self::Failure(value) => write!(formatter, "Failure[{value}]"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<S, F> From<std::result::Result<S, F>> for Result<S, F> {
    /// `Ok(s)` becomes `Success(s)`, and `Err(f)` becomes `Failure(f)`.
    #[inline]
    fn from(result: std::result::Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(value) => Self::Failure(value),
        }
    }
}

impl<S, F> From<Result<S, F>> for std::result::Result<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        result.into_std()
    }
}

impl<S, F> IntoIterator for Result<S, F> {
    type Item = S;
    type IntoIter = std::option::IntoIter<S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.stream_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_success_is_exclusive() {
        let result: Result<i32, String> = Result::Success(1);
        assert!(result.has_success());
        assert!(!result.has_failure());
    }

    #[rstest]
    fn test_failure_is_exclusive() {
        let result: Result<i32, String> = Result::Failure("e".to_string());
        assert!(result.has_failure());
        assert!(!result.has_success());
    }

    #[rstest]
    fn test_value_equality() {
        let first: Result<String, ()> = Result::Success("x".to_string());
        let second: Result<String, ()> = Result::Success("x".to_string());
        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
        assert_ne!(first, Result::Success("y".to_string()));
    }

    #[rstest]
    fn test_success_differs_from_failure_with_same_payload() {
        let success: Result<i32, i32> = Result::Success(1);
        let failure: Result<i32, i32> = Result::Failure(1);
        assert_ne!(success, failure);
    }

    #[rstest]
    fn test_filter_rejected_value_reaches_mapper() {
        let result: Result<i32, String> = Result::Success(3);
        let filtered = result.filter(|value| *value > 5, |value| format!("too small: {value}"));
        assert_eq!(filtered, Result::Failure("too small: 3".to_string()));
    }

    #[rstest]
    fn test_filter_is_noop_on_failure() {
        let called = Cell::new(false);
        let result: Result<i32, String> = Result::Failure("e".to_string());
        let filtered = result.filter(
            |_| {
                called.set(true);
                false
            },
            |_| String::new(),
        );
        assert_eq!(filtered, Result::Failure("e".to_string()));
        assert!(!called.get());
    }

    #[rstest]
    fn test_recover_keeps_unrecoverable_failure() {
        let result: Result<i32, &str> = Result::Failure("fatal");
        let recovered = result.recover(|error| *error == "transient", |_| 0);
        assert_eq!(recovered, Result::Failure("fatal"));
    }

    #[rstest]
    fn test_if_success_or_else_runs_only_matching_side() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);
        let _ = Result::<i32, i32>::Failure(1).if_success_or_else(
            |_: &i32| successes.set(successes.get() + 1),
            |_: &i32| failures.set(failures.get() + 1),
        );
        assert_eq!((successes.get(), failures.get()), (0, 1));
    }

    #[rstest]
    fn test_display_and_debug() {
        let success: Result<&str, i32> = Result::Success("value");
        let failure: Result<&str, i32> = Result::Failure(7);
        assert_eq!(format!("{success}"), "Success[value]");
        assert_eq!(format!("{failure}"), "Failure[7]");
        assert_eq!(format!("{success:?}"), "Success(\"value\")");
    }

    #[rstest]
    fn test_std_conversion_roundtrip() {
        let ok: std::result::Result<i32, String> = Ok(42);
        let result: Result<i32, String> = ok.into();
        assert_eq!(result, Result::Success(42));
        assert_eq!(result.into_std(), Ok(42));
    }

    #[rstest]
    #[should_panic(expected = "on a `Failure` value")]
    fn test_unwrap_success_on_failure_panics() {
        let _ = Result::<i32, i32>::Failure(1).unwrap_success();
    }

    #[rstest]
    fn test_swap() {
        let result: Result<i32, &str> = Result::Success(1);
        assert_eq!(result.swap(), Result::Failure(1));
    }
}
