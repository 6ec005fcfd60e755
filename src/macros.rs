/// Emit a `tracing` event at trace level when the `tracing` feature is
/// enabled.
macro_rules! log_trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($tt)*);
        }
    };
}

/// Emit a `tracing` event at warn level when the `tracing` feature is enabled.
macro_rules! log_warn {
    ($($tt:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::warn!($($tt)*);
        }
    };
}
