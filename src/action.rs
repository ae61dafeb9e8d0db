//! Side-effecting handlers for `if_success` / `if_failure`.
//!
//! Any `FnOnce(&T)` closure is an [`Action`]. Plain closures are *eager*:
//! handing one to a still-unresolved [`LazyResult`](crate::LazyResult)
//! forces the result right away so the effect happens at the call site.
//! Because they run immediately, eager actions may borrow from the caller.
//!
//! Wrapping an action in a [`LazyAction`] opts it into the laziness
//! contract instead, and the effect is postponed until the lazy chain is
//! eventually observed. A deferred action outlives the call, so only
//! `Send + 'static` actions can be marked lazy.
//!
//! The distinction is carried by [`Action::into_deferred`]: eager actions
//! hand themselves back, lazy ones turn into a boxed handler.
//!
//! # Examples
//!
//! ```rust
//! use resultant::{Action, lazy_action};
//!
//! let eager = |value: &i32| println!("{value}");
//! let deferred = lazy_action(|value: &i32| println!("{value}"));
//!
//! assert!(Action::<i32>::into_deferred(eager).is_err());
//! assert!(Action::<i32>::into_deferred(deferred).is_ok());
//! ```

use std::fmt;

/// A handler a lazy result keeps until it resolves.
pub type DeferredAction<T> = Box<dyn FnOnce(&T) + Send>;

/// A one-shot handler applied to a borrowed result value.
pub trait Action<T> {
    /// Runs the action against `value`.
    fn perform(self, value: &T);

    /// Converts the action into a handler that may run later.
    ///
    /// Returns `Err(self)` when the action must run at the call site. Only
    /// [`LazyAction`] overrides this.
    #[inline]
    fn into_deferred(self) -> Result<DeferredAction<T>, Self>
    where
        Self: Sized,
        T: 'static,
    {
        Err(self)
    }
}

impl<T, Function> Action<T> for Function
where
    Function: FnOnce(&T),
{
    #[inline]
    fn perform(self, value: &T) {
        self(value);
    }
}

/// An action explicitly marked as compatible with lazy evaluation.
///
/// Built with [`LazyAction::new`] or [`lazy_action`](crate::lazy_action).
/// The wrapped action must be `Send + 'static` to be usable as an
/// [`Action`], since a lazy result may run it on another thread after the
/// call returns.
///
/// # Examples
///
/// ```rust
/// use resultant::{LazyAction, lazy};
/// use resultant::success;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// let performed = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&performed);
///
/// let pipeline = lazy(|| success::<_, String>(7))
///     .if_success(LazyAction::new(move |_: &i32| flag.store(true, Ordering::SeqCst)));
///
/// assert!(!performed.load(Ordering::SeqCst));
/// assert!(pipeline.has_success());
/// assert!(performed.load(Ordering::SeqCst));
/// ```
#[derive(Clone, Copy)]
pub struct LazyAction<A> {
    action: A,
}

impl<A> LazyAction<A> {
    /// Marks `action` as deferrable.
    #[inline]
    pub const fn new(action: A) -> Self {
        Self { action }
    }

    /// Removes the marker and returns the wrapped action.
    #[inline]
    pub fn into_inner(self) -> A {
        self.action
    }
}

impl<T, A> Action<T> for LazyAction<A>
where
    A: Action<T> + Send + 'static,
{
    #[inline]
    fn perform(self, value: &T) {
        self.action.perform(value);
    }

    #[inline]
    fn into_deferred(self) -> Result<DeferredAction<T>, Self>
    where
        T: 'static,
    {
        let action = self.action;
        Ok(Box::new(move |value: &T| action.perform(value)))
    }
}

impl<A> fmt::Debug for LazyAction<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LazyAction(<action>)")
    }
}
