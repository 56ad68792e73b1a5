#![cfg(test)]
use flightdeck_common::people::{Luggage, Passenger};
use flightdeck_core::fleet::{Aircraft, EnrollOutcome, Flight};

/// Walks the single-seat scenario end to end: the first passenger boards,
/// a second distinct passenger bounces off the capacity limit, and
/// re-enrolling the first is reported as a duplicate. The seat count never
/// moves past one.
#[test]
fn single_seat_aircraft_turns_everyone_else_away() {
    let mut flight = Flight::new("FD900", "Lisbon", "Funchal", Aircraft::new("Cessna 208", 1))
        .expect("valid flight number");

    let ana = Passenger::shared("Ana", "1");
    let bruno = Passenger::shared("Bruno", "2");

    assert_eq!(flight.enroll_passenger(&ana), EnrollOutcome::Enrolled);
    assert_eq!(flight.passenger_count(), 1);

    assert_eq!(
        flight.enroll_passenger(&bruno),
        EnrollOutcome::CapacityReached,
        "second distinct passenger must be rejected"
    );
    assert_eq!(flight.passenger_count(), 1);

    assert_eq!(
        flight.enroll_passenger(&ana),
        EnrollOutcome::AlreadyAboard,
        "duplicate must be reported before capacity"
    );
    assert_eq!(flight.passenger_count(), 1);
}

#[test]
fn boarding_order_is_the_roster_order() {
    let mut flight = Flight::new("FD901", "Lisbon", "Paris", Aircraft::new("A320", 150))
        .expect("valid flight number");

    let names = ["Ana", "Bruno", "Clara", "Dinis", "Eva"];
    let passengers: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Passenger::shared(*name, format!("{i}")))
        .collect();
    for passenger in &passengers {
        assert!(flight.enroll_passenger(passenger).is_enrolled());
    }

    let roster: Vec<&str> = flight.passengers().iter().map(|p| p.name()).collect();
    assert_eq!(roster, names);
}

#[test]
fn luggage_accumulates_in_order_while_enrolled() {
    let mut flight = Flight::new("FD902", "Lisbon", "Rome", Aircraft::new("A320", 150))
        .expect("valid flight number");
    let ana = Passenger::shared("Ana", "1");
    flight.enroll_passenger(&ana);

    // Bags attach through the driver's handle after enrollment.
    for (i, desc) in ["Suitcase", "Backpack", "Guitar"].iter().enumerate() {
        ana.add_luggage(Luggage::new(*desc, 5.0 + i as f64));
    }

    assert_eq!(ana.luggage_count(), 3);
    let aboard = &flight.passengers()[0];
    let seen: Vec<String> = aboard
        .luggage()
        .iter()
        .map(|l| l.description().to_string())
        .collect();
    assert_eq!(
        seen,
        ["Suitcase", "Backpack", "Guitar"],
        "flight and driver must observe the same luggage"
    );
}
