//! Shared models and capabilities for the flightdeck workspace.
//!
//! Everything here is plain in-memory data: people, their luggage, the
//! identity tags handed to employees and auditors, and the console macros
//! the other crates report through.

pub mod config;
pub mod identity;
pub mod log;
pub mod people;

#[doc(hidden)]
pub use tracing;

/// Emits a status line on the console channel (rendered as `[+]`).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}

/// Emits a confirmation line on the console channel (rendered as `[✓]`).
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

/// Emits a notice line on the console channel (rendered as `[*]`).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}
