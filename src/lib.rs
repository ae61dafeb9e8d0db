//! # resultant
//!
//! A success-or-failure result type with a full combinator algebra and a
//! thread-safe lazy variant.
//!
//! ## Overview
//!
//! - **Result**: `Result<S, F>` holds exactly one of `Success(S)` or
//!   `Failure(F)`. Every combinator (`map*`, `flat_map*`, `filter`,
//!   `recover`, `if_*`) consumes the receiver and returns a new value.
//! - **Lazy results**: `LazyResult<S, F>` computes its result on first
//!   observation, exactly once, even under concurrent access. Combinators
//!   called on an unresolved lazy result stay lazy, so an entire pipeline can
//!   be built before anything runs.
//! - **Actions**: side-effecting handlers for `if_success` / `if_failure`.
//!   Wrap one in `LazyAction` to let a lazy result postpone it.
//! - **Factories**: `success`, `failure`, `lazy`, `combine`, and conversions
//!   from `Option` and fallible closures.
//!
//! ## Feature Flags
//!
//! - `lazy` (default): `LazyResult` and the `lazy` factory
//! - `serde`: serialization support
//! - `tracing`: structured trace events from lazy resolution
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use resultant::prelude::*;
//!
//! let greeting = success::<_, String>("hello")
//!     .filter(|value| !value.is_empty(), |_| "empty".to_string())
//!     .map_success(str::to_uppercase);
//!
//! assert_eq!(greeting, success("HELLO".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use resultant::prelude::*;
/// ```
pub mod prelude {
    pub use crate::action::{Action, DeferredAction, LazyAction};
    pub use crate::error::ResultError;
    pub use crate::factory::*;
    pub use crate::result::Result;

    #[cfg(feature = "lazy")]
    pub use crate::lazy::LazyResult;
}

#[cfg(feature = "lazy")]
mod trace;

pub mod action;
pub mod error;
pub mod factory;
pub mod result;

#[cfg(feature = "lazy")]
pub mod lazy;

pub use action::{Action, DeferredAction, LazyAction};
pub use error::ResultError;
pub use factory::{
    combine, combine_all, failure, lazy_action, of_callable, of_callable_with, of_nullable,
    of_nullable_with, of_optional, of_optional_with, success, to_optional, to_optional_failure,
};
pub use result::Result;

#[cfg(feature = "lazy")]
pub use factory::lazy;
#[cfg(feature = "lazy")]
pub use lazy::LazyResult;
