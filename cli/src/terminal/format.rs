use colored::*;

use flightdeck_core::audit::{AuditReport, CapacityFinding, CrewFinding};
use flightdeck_core::fleet::{EnrollOutcome, Flight};
use flightdeck_common::people::{Employee, Luggage};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn flight_to_details(flight: &Flight) -> Vec<Detail> {
    let seats = format!(
        "{}/{}",
        flight.passenger_count(),
        flight.aircraft().capacity()
    );
    vec![
        (
            String::from("Route"),
            format!("{} → {}", flight.origin(), flight.destination())
                .color(colors::TEXT_DEFAULT),
        ),
        (
            String::from("Aircraft"),
            flight.aircraft().summary().color(colors::TEXT_DEFAULT),
        ),
        (String::from("Seats"), seats.color(colors::ACCENT)),
        (
            String::from("Crew"),
            flight.crew_count().to_string().color(colors::ACCENT),
        ),
    ]
}

pub fn employee_to_details(employee: &Employee) -> Vec<Detail> {
    vec![
        (
            String::from("Role"),
            employee.role().color(colors::TEXT_DEFAULT),
        ),
        (
            String::from("Badge"),
            employee.badge_number().color(colors::TEXT_DEFAULT),
        ),
        (
            String::from("ID"),
            employee.id().to_string().color(colors::ACCENT),
        ),
    ]
}

pub fn audit_to_details(report: &AuditReport) -> Vec<Detail> {
    let capacity_finding = report.capacity_finding();
    let capacity_color = match capacity_finding {
        CapacityFinding::AdequateCapacity => colors::COMPLIANT,
        CapacityFinding::ExcessPassengers => colors::FLAGGED,
    };
    let crew_finding = report.crew_finding();
    let crew_color = match crew_finding {
        CrewFinding::AdequateMinimumCrew => colors::COMPLIANT,
        CrewFinding::NoCrew => colors::FLAGGED,
    };

    vec![
        (
            String::from("Seats"),
            format!(
                "{}/{} – {}",
                report.passenger_count(),
                report.capacity(),
                capacity_finding
            )
            .color(capacity_color),
        ),
        (
            String::from("Crew"),
            format!("{} – {}", report.crew_count(), crew_finding).color(crew_color),
        ),
    ]
}

/// Roster entry, one member per line.
pub fn roster_line(name: &str) -> String {
    format!("- {name}")
}

/// Luggage entry, one item per line.
pub fn luggage_line(item: &Luggage) -> String {
    format!("-- {item}")
}

/// Notice for a rejected passenger enrollment; `None` when it succeeded.
pub fn passenger_notice(outcome: EnrollOutcome, name: &str) -> Option<String> {
    match outcome {
        EnrollOutcome::Enrolled => None,
        EnrollOutcome::AlreadyAboard => Some(format!("{name} is already on this flight")),
        EnrollOutcome::CapacityReached => {
            Some(format!("aircraft capacity reached, {name} not enrolled"))
        }
    }
}

/// Notice for a rejected crew registration; `None` when it succeeded.
pub fn crew_notice(outcome: EnrollOutcome, name: &str) -> Option<String> {
    match outcome {
        EnrollOutcome::Enrolled | EnrollOutcome::CapacityReached => None,
        EnrollOutcome::AlreadyAboard => Some(format!("{name}: crew member already added")),
    }
}
