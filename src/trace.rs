//! Structured logging hooks.
//!
//! With the `tracing` feature enabled these forward to the `tracing` macros;
//! otherwise they expand to nothing.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        tracing::trace!(target: "resultant", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! warn_event {
    ($($argument:tt)*) => {
        tracing::warn!(target: "resultant", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_event {
    ($($argument:tt)*) => {};
}

pub(crate) use trace_event;
pub(crate) use warn_event;
