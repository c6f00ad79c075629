//! Logging abstraction layer.
//!
//! The crate never installs a logger. Every diagnostic goes through one of
//! the macros below, which forward to the [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing) facade depending on the enabled
//! feature, always under the [`LOG_TARGET`](crate::LOG_TARGET) target so the
//! host application can filter redirect chatter independently
//! (`RUST_LOG=nav_resolver=debug`).
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Enable at most one of the two.
//!
//! | Macro        | Used for |
//! |--------------|----------|
//! | `trace_log!` | per-route matching, cache hits and misses |
//! | `debug_log!` | each redirect step and the rule that produced it |
//! | `info_log!`  | route registration, listener fan-out |
//! | `warn_log!`  | redirect cycles cut short |
//! | `error_log!` | exceeded bounds, unmatched redirect targets |
//!
//! ```ignore
//! use nav_resolver::{debug_log, error_log};
//!
//! debug_log!("Redirect #{}: '{}' -> '{}'", step, from, to);
//! error_log!("No route matches redirect target '{}'", target);
//! ```

/// Emit a **trace**-level event under the crate's log target.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: $crate::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!(target: $crate::LOG_TARGET, $($arg)*);
    };
}

/// Emit a **debug**-level event under the crate's log target.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: $crate::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!(target: $crate::LOG_TARGET, $($arg)*);
    };
}

/// Emit an **info**-level event under the crate's log target.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!(target: $crate::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::info!(target: $crate::LOG_TARGET, $($arg)*);
    };
}

/// Emit a **warn**-level event under the crate's log target.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(target: $crate::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!(target: $crate::LOG_TARGET, $($arg)*);
    };
}

/// Emit an **error**-level event under the crate's log target.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!(target: $crate::LOG_TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::error!(target: $crate::LOG_TARGET, $($arg)*);
    };
}
