#![cfg(test)]
use std::rc::Rc;

use flightdeck_core::fleet::{Aircraft, Airline, Flight, DEFAULT_AIRLINE_NAME, SharedFlight};

fn shared_flight(number: &str) -> SharedFlight {
    Flight::new(number, "Lisbon", "Madrid", Aircraft::new("A320", 150))
        .expect("valid flight number")
        .into_shared()
}

/// The naming scenario: "Ka" is too short and falls back to the
/// placeholder at construction, a valid rename sticks, an invalid rename
/// is ignored without touching the name.
#[test]
fn naming_policy_fallback_then_rename() {
    let mut airline = Airline::new("Ka");
    assert_eq!(airline.name(), DEFAULT_AIRLINE_NAME);

    assert!(airline.set_name("Kat"));
    assert_eq!(airline.name(), "Kat");

    assert!(!airline.set_name("Ka"));
    assert_eq!(airline.name(), "Kat");
}

#[test]
fn duplicate_numbers_resolve_to_the_first_registered() {
    let mut airline = Airline::new("Cumulus Air");
    let first = shared_flight("FD200");
    let shadow = shared_flight("FD200");

    airline.add_flight(Rc::clone(&first));
    airline.add_flight(Rc::clone(&shadow));
    assert_eq!(airline.flight_count(), 2, "duplicates are not prevented");

    let found = airline.find_flight("FD200").expect("number is registered");
    assert!(
        Rc::ptr_eq(&found, &first),
        "lookup must return the first registration"
    );
}

#[test]
fn lookup_miss_is_explicit() {
    let mut airline = Airline::new("Cumulus Air");
    airline.add_flight(shared_flight("FD200"));
    assert!(airline.find_flight("FD201").is_none());
}

#[test]
fn an_airline_shares_flights_rather_than_owning_them() {
    let flight = shared_flight("FD200");
    let airline = {
        let mut airline = Airline::new("Cumulus Air");
        airline.add_flight(Rc::clone(&flight));
        drop(airline);
        Airline::new("Kite Atlantic")
    };

    // The first airline is gone; the flight is still alive and usable.
    assert_eq!(flight.borrow().number(), "FD200");
    assert_eq!(airline.flight_count(), 0);
}
