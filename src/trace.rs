//! Tracing hooks that vanish when the `tracing` feature is off.
//!
//! Spans and events are debug level. Field syntax is whatever
//! `tracing::debug_span!` accepts; prefer `?value` for paths, since `%`
//! expands to `tracing::field::display` and collides with `Path::display`.

/// Opens a debug span, or a [`NoopSpan`] without the `tracing` feature.
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {{
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!($name $(, $($field)*)?);
        #[cfg(not(feature = "tracing"))]
        let span = $crate::trace::NoopSpan;
        span
    }};
}

/// Emits a debug event with `key = value` fields.
///
/// Without the `tracing` feature the values are only borrowed, so bindings
/// kept for logging stay warning-free.
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(name: $name, $($key = $value),+);
        #[cfg(not(feature = "tracing"))]
        let _ = ($(&$value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span guard used when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
