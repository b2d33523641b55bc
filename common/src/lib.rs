//! # Overwatch Common
//!
//! Shared building blocks for the `overwatch` workspace.
//!
//! * **[`takeover`]**: domain models (signature catalog, targets, verdicts).
//! * **[`network`]**: the port traits the core drives (DNS and HTTP).
//! * **[`config`]**: runtime configuration assembled by the CLI.
//! * **[`error`]**: load-time error types.
//!
//! The logging macros exported here ([`info!`], [`success!`], [`warn!`], [`error!`])
//! wrap `tracing` so every crate logs through the same subscriber.

pub mod config;
pub mod error;
pub mod network;
pub mod takeover;

pub use tracing;

/// Target used for events that should be rendered as a successful step.
pub const SUCCESS_TARGET: &str = "overwatch::success";

/// Target used for events that carry raw, pre-formatted terminal output.
pub const PRINT_TARGET: &str = "overwatch::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "overwatch::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
