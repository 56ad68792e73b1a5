//! # Airline Registry
//!
//! A named, registration-ordered collection of flights. The airline never
//! owns flight lifetime; it shares handles with whoever built the flights.

use std::rc::Rc;

use super::SharedFlight;

/// Substituted when an airline is constructed with a too-short name.
pub const DEFAULT_AIRLINE_NAME: &str = "Unnamed Airline";

const MIN_NAME_CHARS: usize = 3;

pub struct Airline {
    name: String,
    flights: Vec<SharedFlight>,
}

impl Airline {
    /// Builds an airline, substituting [`DEFAULT_AIRLINE_NAME`] when the
    /// given name is shorter than three characters. Construction never
    /// fails.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if valid_name(&name) {
            name
        } else {
            DEFAULT_AIRLINE_NAME.to_string()
        };
        Self {
            name,
            flights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the airline. Names shorter than three characters are
    /// ignored and the current name kept; returns whether the rename was
    /// applied. Note the asymmetry with construction, which substitutes a
    /// placeholder instead.
    pub fn set_name(&mut self, new_name: impl Into<String>) -> bool {
        let new_name = new_name.into();
        if !valid_name(&new_name) {
            return false;
        }
        self.name = new_name;
        true
    }

    /// Registers a flight. Appends unconditionally; duplicate numbers are
    /// possible and lookup returns the first one registered.
    pub fn add_flight(&mut self, flight: SharedFlight) {
        self.flights.push(flight);
    }

    /// Linear scan in registration order; `None` is the miss signal.
    pub fn find_flight(&self, number: &str) -> Option<SharedFlight> {
        self.flights
            .iter()
            .find(|f| f.borrow().number() == number)
            .map(Rc::clone)
    }

    /// Registration-order view of the flights.
    pub fn flights(&self) -> &[SharedFlight] {
        &self.flights
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }
}

fn valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_CHARS
}
