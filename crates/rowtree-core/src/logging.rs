#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Engine code logs through `rowtree_core::debug!`, `trace!` and `warn!`.
//! With the `tracing` feature these are the tracing macros; without it they
//! expand to nothing, so call sites never need their own `cfg` guards.
//!
//! Spans are only opened around reducer transitions, through
//! [`reduce_span`]. Without the feature it returns a `NoopSpan` with the
//! same `enter` shape as `tracing::Span`.

/// Target of the reducer span.
pub const TARGET: &str = "rowtree";

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Discards its arguments (tracing disabled).
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Discards its arguments (tracing disabled).
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Discards its arguments (tracing disabled).
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Span covering one reducer transition, tagged with the action name.
#[cfg(feature = "tracing")]
#[must_use]
pub fn reduce_span(action: &'static str) -> tracing::Span {
    tracing::debug_span!(target: TARGET, "reduce", action)
}

/// Span covering one reducer transition (tracing disabled).
#[cfg(not(feature = "tracing"))]
#[must_use]
pub fn reduce_span(_action: &'static str) -> NoopSpan {
    NoopSpan
}

/// Span stand-in when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns a guard that does nothing on drop.
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_span_can_be_entered_without_a_subscriber() {
        let span = reduce_span("refresh");
        let _guard = span.enter();
        crate::debug!(rows = 0, "inside span");
    }
}
