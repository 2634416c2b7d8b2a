//! Log shims shared by the face modules. Same contract as the engine's:
//! `{}` placeholders only, arguments implement `Display` and `defmt::Format`.

macro_rules! info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);
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
