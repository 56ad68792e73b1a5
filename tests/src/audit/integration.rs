#![cfg(test)]
use flightdeck_common::people::{Employee, Passenger};
use flightdeck_core::audit::{Auditor, CrewFinding};
use flightdeck_core::fleet::{Aircraft, Flight};

/// Auditing the same flight before and after crew registration flips the
/// crew finding from "no crew aboard" to "adequate minimum crew".
#[test]
fn crew_finding_clears_once_someone_boards() {
    let auditor = Auditor::new("Helena");
    let mut flight = Flight::new("KA330", "Faro", "Lyon", Aircraft::new("E195", 118))
        .expect("valid flight number");

    let before = auditor.audit_flight(&flight);
    assert_eq!(before.crew_finding(), CrewFinding::NoCrew);
    assert!(!before.is_compliant());

    let carlos = Employee::shared("Carlos", "9", "Pilot", "M-1042");
    flight.enroll_crew(&carlos);

    let after = auditor.audit_flight(&flight);
    assert_eq!(after.crew_finding(), CrewFinding::AdequateMinimumCrew);
    assert!(after.is_compliant());
}

#[test]
fn two_auditors_report_the_same_counts_independently() {
    let helena = Auditor::new("Helena");
    let igor = Auditor::new("Igor");
    assert_ne!(helena.id(), igor.id(), "auditors carry distinct tags");

    let mut flight = Flight::new("FD101", "Lisbon", "Porto", Aircraft::new("ATR 72", 2))
        .expect("valid flight number");
    let ana = Passenger::shared("Ana", "1");
    flight.enroll_passenger(&ana);

    let first = helena.audit_flight(&flight);
    let second = igor.audit_flight(&flight);
    assert_eq!(first, second, "a report depends only on the flight state");
    assert_eq!(first.passenger_count(), 1);
    assert_eq!(first.capacity(), 2);
}
