use thiserror::Error;

/// Construction misuse the domain refuses outright.
///
/// Everything else in this crate (duplicate enrollment, capacity limits,
/// rejected renames, lookup misses) is an expected outcome, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// A flight without a number could never be looked up again.
    #[error("flight number must not be empty")]
    EmptyFlightNumber,
}
