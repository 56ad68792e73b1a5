//! Console channels and the entry-logging capability.
//!
//! All user-facing output flows through `tracing` events on one of the
//! targets below; the cli installs the layers that decide how each channel
//! is rendered. Library code never writes to stdout directly.

/// Report lines: rendered verbatim, no level symbol.
pub const REPORT_TARGET: &str = "flightdeck::report";
/// Status lines: rendered with a level symbol (`[+]`, `[*]`, `[-]`).
pub const STATUS_TARGET: &str = "flightdeck::status";
/// Confirmation lines: rendered as `[✓]`.
pub const SUCCESS_TARGET: &str = "flightdeck::success";

/// Capability for announcing an entity entering the system.
///
/// Any type may claim it independently; the two implementors today are
/// `Employee` and `Auditor`.
pub trait Loggable {
    /// Announces the entity on the console channel. Side effect only.
    fn log_entry(&self);
}

/// Traces a scenario step as "[LOG] <event>" on the report channel.
pub fn log_event(event: &str) {
    tracing::info!(target: REPORT_TARGET, "[LOG] {event}");
}
