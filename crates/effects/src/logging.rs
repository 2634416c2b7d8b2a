//! Log shims: `tracing` events on desktop (`std`), defmt frames on embedded
//! targets (`defmt`), and nothing at all when neither feature is enabled.
//!
//! Arguments must implement both `core::fmt::Display` and `defmt::Format`,
//! and the format string may only use `{}` placeholders.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "defmt")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
        #[cfg(not(any(feature = "std", feature = "defmt")))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
