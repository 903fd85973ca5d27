#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros the table engine uses. Without it, no-op stand-ins with the same
//! names are exported at the crate root so call sites compile unchanged.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// A no-op span for when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the no-op span (does nothing).
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }

    /// Enter the no-op span by value, mirroring `tracing::Span::entered`.
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// A no-op span guard.
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn noop_macros_accept_structured_fields() {
        let width = 12.5;
        crate::debug!(columns = 3, "column set closed");
        crate::trace!(column = 0, width, "column width grew");
        crate::warn!("row discarded");
        let _guard = crate::debug_span!("table_render", rows = 2).entered();
        let span = crate::debug_span!("table_render");
        let _nested = span.enter();
    }
}
