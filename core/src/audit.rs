//! # Compliance Audit
//!
//! An auditor reads a flight's membership counts against the aircraft
//! capacity and the minimum-crew policy and produces a report for the
//! presentation layer. Auditing never mutates the flight.

use std::fmt;

use flightdeck_common::identity::IdTag;
use flightdeck_common::info;
use flightdeck_common::log::Loggable;

use crate::fleet::Flight;

/// Verdict of the passenger-count check.
///
/// Enrollment already blocks overflow, so `ExcessPassengers` only shows up
/// when a flight was mutated out-of-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityFinding {
    ExcessPassengers,
    AdequateCapacity,
}

impl fmt::Display for CapacityFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcessPassengers => write!(f, "excess passengers"),
            Self::AdequateCapacity => write!(f, "adequate capacity"),
        }
    }
}

/// Verdict of the minimum-crew check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewFinding {
    NoCrew,
    AdequateMinimumCrew,
}

impl fmt::Display for CrewFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCrew => write!(f, "no crew aboard"),
            Self::AdequateMinimumCrew => write!(f, "adequate minimum crew"),
        }
    }
}

/// Snapshot of one flight's counts at audit time, plus the two verdicts
/// derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    flight_number: String,
    passenger_count: usize,
    capacity: u32,
    crew_count: usize,
}

impl AuditReport {
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn passenger_count(&self) -> usize {
        self.passenger_count
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn crew_count(&self) -> usize {
        self.crew_count
    }

    pub fn capacity_finding(&self) -> CapacityFinding {
        if self.passenger_count > self.capacity as usize {
            CapacityFinding::ExcessPassengers
        } else {
            CapacityFinding::AdequateCapacity
        }
    }

    pub fn crew_finding(&self) -> CrewFinding {
        if self.crew_count == 0 {
            CrewFinding::NoCrew
        } else {
            CrewFinding::AdequateMinimumCrew
        }
    }

    pub fn is_compliant(&self) -> bool {
        self.capacity_finding() == CapacityFinding::AdequateCapacity
            && self.crew_finding() == CrewFinding::AdequateMinimumCrew
    }
}

/// A non-owning actor that inspects flights for compliance.
pub struct Auditor {
    name: String,
    id: IdTag,
}

impl Auditor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: IdTag::mint(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &IdTag {
        &self.id
    }

    /// Reads the flight's current counts into a report.
    pub fn audit_flight(&self, flight: &Flight) -> AuditReport {
        AuditReport {
            flight_number: flight.number().to_string(),
            passenger_count: flight.passenger_count(),
            capacity: flight.aircraft().capacity(),
            crew_count: flight.crew_count(),
        }
    }
}

impl Loggable for Auditor {
    fn log_entry(&self) {
        info!("{} (Auditor) entered the system.", self.name());
    }
}

impl fmt::Display for Auditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Auditor {} (ID: {})", self.name, self.id)
    }
}
