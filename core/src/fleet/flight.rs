//! # Flight Model
//!
//! A route bound to one aircraft, holding the enrolled passengers and crew
//! in enrollment order. Enrollment is the only mutation and reports its
//! outcome to the caller; nothing here prints.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use flightdeck_common::people::{SharedCrew, SharedPassenger};

use crate::error::RosterError;

use super::Aircraft;

/// Handle under which an airline and the driver share one flight.
///
/// Flights are registered first and enrolled into afterwards, so the
/// registry and the caller need the same mutable flight. Single-threaded
/// by design.
pub type SharedFlight = Rc<RefCell<Flight>>;

/// Result of an enrollment attempt. Exactly one branch applies; rejected
/// attempts leave the flight untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// Appended to the end of the member list.
    Enrolled,
    /// The same person is already aboard; checked before capacity.
    AlreadyAboard,
    /// Passenger seats are exhausted. Never returned for crew.
    CapacityReached,
}

impl EnrollOutcome {
    pub fn is_enrolled(self) -> bool {
        matches!(self, Self::Enrolled)
    }
}

#[derive(Debug)]
pub struct Flight {
    number: String,
    origin: String,
    destination: String,
    aircraft: Aircraft,
    passengers: Vec<SharedPassenger>,
    crew: Vec<SharedCrew>,
}

impl Flight {
    pub fn new(
        number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        aircraft: Aircraft,
    ) -> Result<Self, RosterError> {
        let number = number.into();
        if number.is_empty() {
            return Err(RosterError::EmptyFlightNumber);
        }

        Ok(Self {
            number,
            origin: origin.into(),
            destination: destination.into(),
            aircraft,
            passengers: Vec::new(),
            crew: Vec::new(),
        })
    }

    /// Moves the flight behind the shared handle airlines register.
    pub fn into_shared(self) -> SharedFlight {
        Rc::new(RefCell::new(self))
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    /// Enrolls a passenger. Duplicates are checked before capacity; members
    /// are compared by handle identity, not by field equality.
    pub fn enroll_passenger(&mut self, passenger: &SharedPassenger) -> EnrollOutcome {
        if self.passengers.iter().any(|p| Rc::ptr_eq(p, passenger)) {
            return EnrollOutcome::AlreadyAboard;
        }
        if self.passengers.len() >= self.aircraft.capacity() as usize {
            return EnrollOutcome::CapacityReached;
        }
        self.passengers.push(Rc::clone(passenger));
        EnrollOutcome::Enrolled
    }

    /// Registers a crew member. Crew is never capacity-limited.
    pub fn enroll_crew(&mut self, member: &SharedCrew) -> EnrollOutcome {
        if self.crew.iter().any(|c| Rc::ptr_eq(c, member)) {
            return EnrollOutcome::AlreadyAboard;
        }
        self.crew.push(Rc::clone(member));
        EnrollOutcome::Enrolled
    }

    /// Enrollment-order view of the passengers aboard.
    pub fn passengers(&self) -> &[SharedPassenger] {
        &self.passengers
    }

    /// Enrollment-order view of the registered crew.
    pub fn crew(&self) -> &[SharedCrew] {
        &self.crew
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn crew_count(&self) -> usize {
        self.crew.len()
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight {} from {} to {} – {}",
            self.number,
            self.origin,
            self.destination,
            self.aircraft.summary()
        )
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
