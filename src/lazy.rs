//! Thread-safe lazy results with memoization.
//!
//! This module provides the `LazyResult<S, F>` type, a [`Result`] whose
//! value is produced by a supplier on first observation. The supplier runs
//! at most once, even when many threads observe the result concurrently,
//! and the produced `Result` is cached for every later access.
//!
//! # Laziness Forwarding
//!
//! Transforming combinators (`map*`, `flat_map*`, `filter`, `recover`)
//! called on a still-unresolved `LazyResult` do not resolve it. They return
//! a new unresolved `LazyResult` that queues the transformation behind the
//! receiver's pending work, so a whole pipeline stays unevaluated until
//! something observes the end of it. Called on an already-resolved
//! instance, the same combinators are applied to the cached value right away
//! and the outcome comes back as an already-resolved `LazyResult`.
//!
//! Side-effecting handlers (`if_success`, `if_failure`,
//! `if_success_or_else`) are deferred the same way only when every handler
//! is marked with [`LazyAction`](crate::LazyAction). A plain closure forces
//! the receiver immediately and runs at the call site.
//!
//! # Poisoning
//!
//! If the supplier panics, the panic propagates to the observer that
//! triggered resolution and the `LazyResult` becomes **poisoned**: every
//! later `force()` panics and `try_force()` returns
//! [`ResultError::Poisoned`].
//!
//! # Re-entry Warning
//!
//! The resolution lock is not re-entrant. A supplier that observes the very
//! `LazyResult` it is producing deadlocks.
//!
//! # Examples
//!
//! ```rust
//! use resultant::{lazy, success};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//!
//! let pipeline = lazy(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     success::<_, String>("A".to_string())
//! })
//! .map(|value| value + "B", |error| error);
//!
//! assert_eq!(calls.load(Ordering::SeqCst), 0);
//! assert_eq!(pipeline.success_or_error(), Ok("AB".to_string()));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::Mutex;

use crate::action::{Action, DeferredAction};
use crate::error::ResultError;
use crate::result::Result;
use crate::trace::{trace_event, warn_event};

/// State: supplier not yet invoked
const STATE_UNRESOLVED: u8 = 0;
/// State: supplier running under the resolution lock
const STATE_RESOLVING: u8 = 1;
/// State: backing result available
const STATE_RESOLVED: u8 = 2;
/// State: supplier panicked
const STATE_POISONED: u8 = 3;

type Supplier<S, F> = Box<dyn FnOnce() -> Result<S, F> + Send>;

/// A stage output with its type erased.
type Erased = Box<dyn Any + Send>;
type Source = Box<dyn FnOnce() -> Erased + Send>;
type Stage = Box<dyn FnOnce(Erased) -> Erased + Send>;

/// Work still owed by an unresolved lazy result.
enum Pending<S, F> {
    /// The supplier passed to `LazyResult::new`.
    Supplier(Supplier<S, F>),
    /// A source followed by deferred combinator stages, applied in order.
    ///
    /// Stages live side by side in one queue rather than nested inside each
    /// other, so running or dropping a chain takes constant stack depth.
    Pipeline {
        source: Source,
        stages: Vec<Stage>,
        finish: fn(Erased) -> Result<S, F>,
    },
}

impl<S, F> Pending<S, F> {
    fn run(self) -> Result<S, F> {
        match self {
            Self::Supplier(supplier) => supplier(),
            Self::Pipeline {
                source,
                stages,
                finish,
            } => finish(stages.into_iter().fold(source(), |value, stage| stage(value))),
        }
    }
}

/// Recovers the typed result a stage produced.
fn restore<S: 'static, F: 'static>(value: Erased) -> Result<S, F> {
    match value.downcast::<Result<S, F>>() {
        Ok(result) => *result,
        Err(_) => unreachable!("lazy result stage produced an unexpected type"),
    }
}

/// A [`Result`] computed on first observation and memoized.
///
/// # Type Parameters
///
/// * `S` - The type of the success value
/// * `F` - The type of the failure value
///
/// # Thread Safety
///
/// `LazyResult<S, F>` is `Send` and `Sync` when `S` and `F` are. Once
/// resolved, reading the cached value does not take the lock.
///
/// # Equality
///
/// Equality, hashing and `Display` resolve both operands and compare the
/// backing results; suppliers themselves are never compared. Comparing two
/// unresolved instances therefore runs both suppliers, and two lazy results
/// built from different suppliers are equal exactly when they produce equal
/// results. An instance is always equal to itself without resolving.
///
/// # Stack Depth
///
/// Combinators applied to an unresolved instance are queued as flat stages
/// and run in a loop on resolution. Chain length is limited by memory, not
/// by the thread's stack, both when resolving and when dropping.
///
/// # Examples
///
/// ```rust
/// use resultant::{LazyResult, Result};
/// use std::sync::Arc;
/// use std::thread;
///
/// let shared = Arc::new(LazyResult::new(|| Result::<i32, String>::Success(42)));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || shared.force().clone())
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), Result::Success(42));
/// }
/// ```
pub struct LazyResult<S, F> {
    state: AtomicU8,
    pending: Mutex<Option<Pending<S, F>>>,
    backing: OnceLock<Result<S, F>>,
}

static_assertions::assert_impl_all!(LazyResult<i32, String>: Send, Sync);
static_assertions::assert_not_impl_any!(LazyResult<std::rc::Rc<i32>, ()>: Send, Sync);

impl<S, F> LazyResult<S, F> {
    /// Creates an unresolved lazy result. The supplier is not called yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{LazyResult, Result};
    ///
    /// let lazy = LazyResult::new(|| -> Result<i32, String> { panic!("never observed") });
    /// assert!(!lazy.is_resolved());
    /// ```
    #[inline]
    pub fn new<P>(supplier: P) -> Self
    where
        P: FnOnce() -> Result<S, F> + Send + 'static,
    {
        Self::pending(Pending::Supplier(Box::new(supplier)))
    }

    fn pending(pending: Pending<S, F>) -> Self {
        Self {
            state: AtomicU8::new(STATE_UNRESOLVED),
            pending: Mutex::new(Some(pending)),
            backing: OnceLock::new(),
        }
    }

    fn poisoned() -> Self {
        Self {
            state: AtomicU8::new(STATE_POISONED),
            pending: Mutex::new(None),
            backing: OnceLock::new(),
        }
    }

    /// Creates a lazy result that is already resolved to `result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{LazyResult, Result};
    ///
    /// let lazy = LazyResult::resolved(Result::<i32, ()>::Success(1));
    /// assert!(lazy.is_resolved());
    /// ```
    #[inline]
    pub fn resolved(result: Result<S, F>) -> Self {
        Self {
            state: AtomicU8::new(STATE_RESOLVED),
            pending: Mutex::new(None),
            backing: OnceLock::from(result),
        }
    }

    /// Returns whether the backing result is available.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_RESOLVED
    }

    /// Returns whether the supplier panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_POISONED
    }

    /// Returns the backing result if it has been resolved, without resolving.
    #[inline]
    pub fn get(&self) -> Option<&Result<S, F>> {
        self.backing.get()
    }

    /// Resolves the lazy result if needed and returns the backing result.
    ///
    /// Concurrent callers block until the single supplier invocation
    /// finishes and then all observe the same value.
    ///
    /// # Panics
    ///
    /// - If the supplier panics (the panic is propagated)
    /// - If the lazy result is poisoned by an earlier panicking supplier
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{LazyResult, Result};
    ///
    /// let lazy = LazyResult::new(|| Result::<&str, ()>::Success("OK"));
    /// assert_eq!(lazy.force(), &Result::Success("OK"));
    /// assert!(lazy.is_resolved());
    /// ```
    pub fn force(&self) -> &Result<S, F> {
        match self.try_force() {
            Ok(result) => result,
            Err(error) => panic!("LazyResult::force: {error}"),
        }
    }

    /// Resolves the lazy result if needed, reporting poisoning as an error.
    ///
    /// # Errors
    ///
    /// Returns `Err(ResultError::Poisoned)` if an earlier supplier invocation
    /// panicked.
    ///
    /// # Panics
    ///
    /// If the supplier panics during this call, the panic is propagated after
    /// marking the instance as poisoned.
    pub fn try_force(&self) -> std::result::Result<&Result<S, F>, ResultError> {
        if let Some(result) = self.backing.get() {
            return Ok(result);
        }
        self.resolve()
    }

    #[cold]
    fn resolve(&self) -> std::result::Result<&Result<S, F>, ResultError> {
        let mut guard = self.pending.lock();

        // Another thread may have resolved while this one waited for the lock.
        if let Some(result) = self.backing.get() {
            return Ok(result);
        }

        let Some(pending) = guard.take() else {
            return Err(ResultError::Poisoned);
        };

        self.state.store(STATE_RESOLVING, Ordering::Release);
        trace_event!("resolving lazy result");

        match catch_unwind(AssertUnwindSafe(move || pending.run())) {
            Ok(result) => {
                let result = self.backing.get_or_init(|| result);
                self.state.store(STATE_RESOLVED, Ordering::Release);
                trace_event!(success = result.has_success(), "lazy result resolved");
                Ok(result)
            }
            Err(payload) => {
                self.state.store(STATE_POISONED, Ordering::Release);
                warn_event!("lazy result supplier panicked; result is poisoned");
                drop(guard);
                resume_unwind(payload)
            }
        }
    }

    /// Consumes the lazy result and returns the backing result, resolving it if needed.
    ///
    /// # Panics
    ///
    /// - If the supplier panics
    /// - If the lazy result is poisoned
    pub fn into_result(self) -> Result<S, F> {
        match self.try_into_result() {
            Ok(result) => result,
            Err(error) => panic!("LazyResult::into_result: {error}"),
        }
    }

    /// Consumes the lazy result and returns the backing result, resolving it if needed.
    ///
    /// # Errors
    ///
    /// Returns `Err(ResultError::Poisoned)` if an earlier supplier invocation
    /// panicked.
    pub fn try_into_result(self) -> std::result::Result<Result<S, F>, ResultError> {
        let Self {
            pending, backing, ..
        } = self;

        if let Some(result) = backing.into_inner() {
            return Ok(result);
        }

        let pending = pending.into_inner().ok_or(ResultError::Poisoned)?;
        trace_event!("resolving lazy result by value");
        Ok(pending.run())
    }

    // =========================================================================
    // Observation (resolves)
    // =========================================================================

    /// Returns `true` if the backing result is a success. Resolves the receiver.
    #[inline]
    pub fn has_success(&self) -> bool {
        self.force().has_success()
    }

    /// Returns `true` if the backing result is a failure. Resolves the receiver.
    #[inline]
    pub fn has_failure(&self) -> bool {
        self.force().has_failure()
    }

    /// Returns a reference to the success value if present. Resolves the receiver.
    #[inline]
    pub fn success_ref(&self) -> Option<&S> {
        self.force().success_ref()
    }

    /// Returns a reference to the failure value if present. Resolves the receiver.
    #[inline]
    pub fn failure_ref(&self) -> Option<&F> {
        self.force().failure_ref()
    }

    /// Returns the success value, or `other` for a failure.
    #[inline]
    pub fn or_else(self, other: S) -> S {
        self.into_result().or_else(other)
    }

    /// Returns the success value, or maps the failure value into one.
    #[inline]
    pub fn or_else_map<M>(self, mapper: M) -> S
    where
        M: FnOnce(F) -> S,
    {
        self.into_result().or_else_map(mapper)
    }

    /// Returns the success value, or the one produced by `supplier` for a failure.
    #[inline]
    pub fn or_else_get<M>(self, supplier: M) -> S
    where
        M: FnOnce() -> S,
    {
        self.into_result().or_else_get(supplier)
    }

    /// Returns the success value as an `Option`.
    #[inline]
    pub fn get_success(self) -> Option<S> {
        self.into_result().get_success()
    }

    /// Returns the failure value as an `Option`.
    #[inline]
    pub fn get_failure(self) -> Option<F> {
        self.into_result().get_failure()
    }

    /// Returns an iterator yielding the success value, if any.
    #[inline]
    pub fn stream_success(self) -> std::option::IntoIter<S> {
        self.into_result().stream_success()
    }

    /// Returns an iterator yielding the failure value, if any.
    #[inline]
    pub fn stream_failure(self) -> std::option::IntoIter<F> {
        self.into_result().stream_failure()
    }

    /// Returns the success value, or [`ResultError::NotSuccess`] for a failure.
    ///
    /// # Errors
    ///
    /// Returns `ResultError::NotSuccess` if the backing result is a failure.
    #[inline]
    pub fn success_or_error(self) -> std::result::Result<S, ResultError> {
        self.into_result().success_or_error()
    }

    /// Returns the failure value, or [`ResultError::NotFailure`] for a success.
    ///
    /// # Errors
    ///
    /// Returns `ResultError::NotFailure` if the backing result is a success.
    #[inline]
    pub fn failure_or_error(self) -> std::result::Result<F, ResultError> {
        self.into_result().failure_or_error()
    }

    /// Returns the success value, or the error produced by `mapper` from the failure.
    ///
    /// # Errors
    ///
    /// Returns `mapper(failure)` if the backing result is a failure.
    #[inline]
    pub fn success_or_raise<E, M>(self, mapper: M) -> std::result::Result<S, E>
    where
        M: FnOnce(F) -> E,
    {
        self.into_result().success_or_raise(mapper)
    }
}

impl<S, F> LazyResult<S, F>
where
    S: Send + 'static,
    F: Send + 'static,
{
    /// Queues `stage` behind the receiver's pending work, or applies it now
    /// if the receiver is already resolved.
    ///
    /// A poisoned receiver yields a poisoned result.
    fn then<S2, F2, T>(self, stage: T) -> LazyResult<S2, F2>
    where
        S2: Send + 'static,
        F2: Send + 'static,
        T: FnOnce(Result<S, F>) -> Result<S2, F2> + Send + 'static,
    {
        let Self {
            pending, backing, ..
        } = self;

        if let Some(result) = backing.into_inner() {
            return LazyResult::resolved(stage(result));
        }

        let Some(pending) = pending.into_inner() else {
            return LazyResult::poisoned();
        };

        let (source, mut stages) = match pending {
            Pending::Supplier(supplier) => {
                let source: Source = Box::new(move || -> Erased { Box::new(supplier()) });
                (source, Vec::new())
            }
            Pending::Pipeline { source, stages, .. } => (source, stages),
        };
        let queued: Stage = Box::new(move |value: Erased| -> Erased {
            Box::new(stage(restore::<S, F>(value)))
        });
        stages.push(queued);

        LazyResult::pending(Pending::Pipeline {
            source,
            stages,
            finish: restore::<S2, F2>,
        })
    }

    // =========================================================================
    // Side-effecting Inspection
    // =========================================================================

    /// Performs `action` on the success value.
    ///
    /// A [`LazyAction`](crate::LazyAction) on an unresolved receiver is
    /// deferred; any other action resolves the receiver and runs now, so it
    /// may borrow from the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{LazyResult, Result};
    ///
    /// let mut seen = Vec::new();
    ///
    /// let lazy = LazyResult::new(|| Result::<i32, ()>::Success(1));
    /// let result = lazy.if_success(|value: &i32| seen.push(*value));
    ///
    /// assert!(result.is_resolved());
    /// assert_eq!(seen, vec![1]);
    /// ```
    pub fn if_success<A>(self, action: A) -> Self
    where
        A: Action<S>,
    {
        match action.into_deferred() {
            Ok(deferred) => self.then(move |result| result.if_success(deferred)),
            Err(action) => Self::resolved(self.into_result().if_success(action)),
        }
    }

    /// Performs `action` on the failure value.
    ///
    /// A [`LazyAction`](crate::LazyAction) on an unresolved receiver is
    /// deferred; any other action resolves the receiver and runs now.
    pub fn if_failure<A>(self, action: A) -> Self
    where
        A: Action<F>,
    {
        match action.into_deferred() {
            Ok(deferred) => self.then(move |result| result.if_failure(deferred)),
            Err(action) => Self::resolved(self.into_result().if_failure(action)),
        }
    }

    /// Performs `success_action` or `failure_action`, whichever matches.
    ///
    /// The call is deferred only if both actions are
    /// [`LazyAction`](crate::LazyAction)s and the receiver is unresolved.
    pub fn if_success_or_else<A, B>(self, success_action: A, failure_action: B) -> Self
    where
        A: Action<S>,
        B: Action<F>,
    {
        match (success_action.into_deferred(), failure_action.into_deferred()) {
            (Ok(on_success), Ok(on_failure)) => {
                self.then(move |result| result.if_success_or_else(on_success, on_failure))
            }
            (on_success, on_failure) => Self::resolved(
                self.into_result()
                    .if_success_or_else(run_now(on_success), run_now(on_failure)),
            ),
        }
    }

    // =========================================================================
    // Filtering and Recovery
    // =========================================================================

    /// Lazily turns a success into a failure when `is_acceptable` rejects it.
    pub fn filter<P, M>(self, is_acceptable: P, mapper: M) -> Self
    where
        P: FnOnce(&S) -> bool + Send + 'static,
        M: FnOnce(S) -> F + Send + 'static,
    {
        self.then(move |result| result.filter(is_acceptable, mapper))
    }

    /// Lazily turns a failure into a success when `is_recoverable` accepts it.
    pub fn recover<P, M>(self, is_recoverable: P, mapper: M) -> Self
    where
        P: FnOnce(&F) -> bool + Send + 'static,
        M: FnOnce(F) -> S + Send + 'static,
    {
        self.then(move |result| result.recover(is_recoverable, mapper))
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Lazily applies one of two functions depending on the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::{LazyResult, Result};
    ///
    /// let lazy = LazyResult::new(|| -> Result<i32, i32> { panic!("not yet") });
    /// let mapped = lazy.map(|value| value.to_string(), |error| error.to_string());
    /// assert!(!mapped.is_resolved());
    /// ```
    pub fn map<S2, F2, SuccessMapper, FailureMapper>(
        self,
        success_mapper: SuccessMapper,
        failure_mapper: FailureMapper,
    ) -> LazyResult<S2, F2>
    where
        S2: Send + 'static,
        F2: Send + 'static,
        SuccessMapper: FnOnce(S) -> S2 + Send + 'static,
        FailureMapper: FnOnce(F) -> F2 + Send + 'static,
    {
        self.then(move |result| result.map(success_mapper, failure_mapper))
    }

    /// Lazily applies a function to the success value.
    pub fn map_success<S2, M>(self, mapper: M) -> LazyResult<S2, F>
    where
        S2: Send + 'static,
        M: FnOnce(S) -> S2 + Send + 'static,
    {
        self.then(move |result| result.map_success(mapper))
    }

    /// Lazily applies a function to the failure value.
    pub fn map_failure<F2, M>(self, mapper: M) -> LazyResult<S, F2>
    where
        F2: Send + 'static,
        M: FnOnce(F) -> F2 + Send + 'static,
    {
        self.then(move |result| result.map_failure(mapper))
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Lazily replaces the result with the one returned by the matching function.
    pub fn flat_map<S2, F2, SuccessMapper, FailureMapper>(
        self,
        success_mapper: SuccessMapper,
        failure_mapper: FailureMapper,
    ) -> LazyResult<S2, F2>
    where
        S2: Send + 'static,
        F2: Send + 'static,
        SuccessMapper: FnOnce(S) -> Result<S2, F2> + Send + 'static,
        FailureMapper: FnOnce(F) -> Result<S2, F2> + Send + 'static,
    {
        self.then(move |result| result.flat_map(success_mapper, failure_mapper))
    }

    /// Lazily chains a computation on the success value.
    pub fn flat_map_success<S2, M>(self, mapper: M) -> LazyResult<S2, F>
    where
        S2: Send + 'static,
        M: FnOnce(S) -> Result<S2, F> + Send + 'static,
    {
        self.then(move |result| result.flat_map_success(mapper))
    }

    /// Lazily chains a computation on the failure value.
    pub fn flat_map_failure<F2, M>(self, mapper: M) -> LazyResult<S, F2>
    where
        F2: Send + 'static,
        M: FnOnce(F) -> Result<S, F2> + Send + 'static,
    {
        self.then(move |result| result.flat_map_failure(mapper))
    }
}

/// Runs whichever form of an action `into_deferred` handed back.
fn run_now<T, A>(action: std::result::Result<DeferredAction<T>, A>) -> impl FnOnce(&T)
where
    A: Action<T>,
{
    move |value: &T| match action {
        Ok(deferred) => deferred(value),
        Err(action) => action.perform(value),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<S, F> From<Result<S, F>> for LazyResult<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        Self::resolved(result)
    }
}

impl<S: PartialEq, F: PartialEq> PartialEq for LazyResult<S, F> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.force() == other.force()
    }
}

impl<S: Eq, F: Eq> Eq for LazyResult<S, F> {}

impl<S: PartialEq, F: PartialEq> PartialEq<Result<S, F>> for LazyResult<S, F> {
    fn eq(&self, other: &Result<S, F>) -> bool {
        self.force() == other
    }
}

impl<S: Hash, F: Hash> Hash for LazyResult<S, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.force().hash(state);
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for LazyResult<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.force(), formatter)
    }
}

impl<S: fmt::Debug, F: fmt::Debug> fmt::Debug for LazyResult<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.backing.get() {
            Some(result) => formatter.debug_tuple("LazyResult").field(result).finish(),
            None if self.is_poisoned() => formatter.write_str("LazyResult(<poisoned>)"),
            None => formatter.write_str("LazyResult(<unresolved>)"),
        }
    }
}

#[cfg(feature = "serde")]
impl<S, F> serde::Serialize for LazyResult<S, F>
where
    S: serde::Serialize,
    F: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        self.force().serialize(serializer)
    }
}
