#![cfg(test)]
use std::rc::Rc;

use anyhow::Result;

use flightdeck_common::people::{Employee, Luggage, Passenger};
use flightdeck_core::audit::{Auditor, CapacityFinding, CrewFinding};
use flightdeck_core::fleet::{Aircraft, Airline, Flight};

/// The demonstration wiring end to end: airlines register flights first,
/// boarding happens afterwards through handles found in the registry, and
/// the audits read the final state.
#[test]
fn full_fleet_walkthrough() -> Result<()> {
    let mut cumulus = Airline::new("Cumulus Air");
    let mut kite = Airline::new("Ka");

    let atr = Aircraft::new("ATR 72", 2);
    let e195 = Aircraft::new("Embraer E195", 118);

    let fd101 = Flight::new("FD101", "Lisbon", "Porto", atr.clone())?.into_shared();
    let fd205 = Flight::new("FD205", "Porto", "Madrid", e195.clone())?.into_shared();
    let ka330 = Flight::new("KA330", "Faro", "Lyon", e195)?.into_shared();
    let ka777 = Flight::new("KA777", "Lyon", "Faro", atr)?.into_shared();

    cumulus.add_flight(Rc::clone(&fd101));
    cumulus.add_flight(Rc::clone(&fd205));
    kite.add_flight(Rc::clone(&ka330));
    kite.add_flight(Rc::clone(&ka777));

    // Boarding goes through the registry, not the construction handles.
    let boarding = cumulus.find_flight("FD101").expect("registered above");
    assert!(Rc::ptr_eq(&boarding, &fd101));

    let ana = Passenger::shared("Ana Souza", "123.456.789-00");
    let bruno = Passenger::shared("Bruno Lima", "987.654.321-00");
    let carlos = Employee::shared("Carlos Mendes", "111.222.333-44", "Pilot", "M-1042");

    {
        let mut flight = boarding.borrow_mut();
        assert!(flight.enroll_passenger(&ana).is_enrolled());
        assert!(flight.enroll_passenger(&bruno).is_enrolled());
        assert!(flight.enroll_crew(&carlos).is_enrolled());
    }
    ana.add_luggage(Luggage::new("Suitcase", 18.0));

    // The construction handle observes the boarding done via the registry.
    assert_eq!(fd101.borrow().passenger_count(), 2);
    assert_eq!(fd101.borrow().crew_count(), 1);
    assert_eq!(fd101.borrow().passengers()[0].luggage_count(), 1);

    let helena = Auditor::new("Helena Prado");
    let full = helena.audit_flight(&fd101.borrow());
    assert_eq!(full.capacity_finding(), CapacityFinding::AdequateCapacity);
    assert_eq!(full.crew_finding(), CrewFinding::AdequateMinimumCrew);

    let unstaffed = helena.audit_flight(&ka330.borrow());
    assert_eq!(unstaffed.crew_finding(), CrewFinding::NoCrew);

    assert_eq!(cumulus.flight_count(), 2);
    assert_eq!(kite.flight_count(), 2);
    Ok(())
}
