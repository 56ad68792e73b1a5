//! # Fleet Models
//!
//! Aircraft, the flights that own them, and the airlines that register
//! flights. Flights hold shared handles to people (never owning them) and
//! grow monotonically; no removal operation exists.

mod aircraft;
mod airline;
mod flight;

pub use aircraft::Aircraft;
pub use airline::{Airline, DEFAULT_AIRLINE_NAME};
pub use flight::{EnrollOutcome, Flight, SharedFlight};
