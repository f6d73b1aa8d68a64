//! Logging macros.
//!
//! With the `defmt` feature enabled these forward to the matching `defmt`
//! macros. Without it they expand to nothing, so the driver stays free of
//! formatting code on targets that have no log transport.

/// Log a trace message
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
    }};
}

/// Log a debug message
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}
