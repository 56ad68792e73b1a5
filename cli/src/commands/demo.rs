use std::rc::Rc;

use anyhow::Result;

use flightdeck_common::config::Config;
use flightdeck_common::log::{Loggable, log_event};
use flightdeck_common::people::{Employee, Luggage, Passenger, SharedCrew, SharedPassenger};
use flightdeck_common::{info, success, warn};
use flightdeck_core::audit::Auditor;
use flightdeck_core::fleet::{Aircraft, Airline, Flight, SharedFlight};

use crate::fdprint;
use crate::terminal::{format, print};

/// Runs the fixed demonstration scenario: two airlines, two airframes,
/// three passengers, two employees, two auditors, four flights; then every
/// report the system can produce.
pub fn run(cfg: &Config) -> Result<()> {
    // --- Construction ---

    log_event("registering airlines");
    let mut cumulus = Airline::new("Cumulus Air");
    let mut kite = Airline::new("Ka");
    info!("airline named \"Ka\" fell back to \"{}\"", kite.name());

    if !kite.set_name("K") {
        warn!("rename to \"K\" ignored, name stays \"{}\"", kite.name());
    }
    if kite.set_name("Kite Atlantic") {
        success!("airline renamed to \"{}\"", kite.name());
    }

    log_event("building the fleet");
    let atr = Aircraft::new("ATR 72", 2);
    let e195 = Aircraft::new("Embraer E195", 118);

    let fd101 = shared_flight("FD101", "Lisbon", "Porto", atr.clone())?;
    let fd205 = shared_flight("FD205", "Porto", "Madrid", e195.clone())?;
    let ka330 = shared_flight("KA330", "Faro", "Lyon", e195.clone())?;
    let ka777 = shared_flight("KA777", "Lyon", "Faro", atr.clone())?;

    cumulus.add_flight(Rc::clone(&fd101));
    cumulus.add_flight(Rc::clone(&fd205));
    kite.add_flight(Rc::clone(&ka330));
    kite.add_flight(Rc::clone(&ka777));

    log_event("people entering the system");
    let ana = Passenger::shared("Ana Souza", "123.456.789-00");
    let bruno = Passenger::shared("Bruno Lima", "987.654.321-00");
    let clara = Passenger::shared("Clara Reis", "456.123.789-00");

    let carlos = Employee::shared("Carlos Mendes", "111.222.333-44", "Pilot", "M-1042");
    let dora = Employee::shared("Dora Nunes", "555.666.777-88", "Flight Attendant", "M-2188");
    carlos.log_entry();
    dora.log_entry();

    let helena = Auditor::new("Helena Prado");
    let igor = Auditor::new("Igor Matos");
    helena.log_entry();
    igor.log_entry();

    // --- Enrollment ---

    log_event("boarding FD101");
    // Four attempts against two seats: the last two must bounce.
    enroll_passengers(&fd101, &[&ana, &bruno, &ana, &clara]);
    enroll_crew(&fd101, &[&carlos, &carlos, &dora]);

    log_event("boarding KA330");
    enroll_passengers(&ka330, &[&clara]);

    log_event("checking in luggage");
    ana.add_luggage(Luggage::new("Suitcase", 18.0));
    ana.add_luggage(Luggage::new("Guitar", 4.5));
    bruno.add_luggage(Luggage::new("Backpack", 6.0));

    // --- Reports ---

    print::header("crew manifest", cfg.quiet);
    for (idx, employee) in [&carlos, &dora].into_iter().enumerate() {
        print::tree_head(idx, employee.name());
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::employee_to_details(employee));
        }
    }

    print::header("checked luggage", cfg.quiet);
    for passenger in [&ana, &bruno] {
        print::print_status(format!("{passenger}"));
        for item in passenger.luggage().iter() {
            fdprint!(&format::luggage_line(item));
        }
    }

    print::header("flight rosters", cfg.quiet);
    for flight in [&fd101, &ka330] {
        let flight = flight.borrow();
        print::print_status(flight.to_string());
        for passenger in flight.passengers() {
            fdprint!(&format::roster_line(passenger.name()));
        }
        for member in flight.crew() {
            fdprint!(&format::roster_line(member.name()));
        }
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::flight_to_details(&flight));
        }
    }

    print::header("registered flights", cfg.quiet);
    for airline in [&cumulus, &kite] {
        print::print_status(format!(
            "{} ({} flights)",
            airline.name(),
            airline.flight_count()
        ));
        for flight in airline.flights() {
            fdprint!(&flight.borrow().to_string());
        }
    }

    match cumulus.find_flight("FD205") {
        Some(flight) => success!("lookup FD205: {}", flight.borrow()),
        None => warn!("lookup FD205: not found"),
    }
    if cumulus.find_flight("XX000").is_none() {
        warn!("lookup XX000: not found");
    }

    print::header("compliance audit", cfg.quiet);
    audit(&helena, &fd101, cfg);
    audit(&igor, &ka330, cfg);

    print::fat_separator();
    print::centerln("4 flights, 2 airlines, all reports delivered");
    print::end_of_program();

    Ok(())
}

fn shared_flight(
    number: &str,
    origin: &str,
    destination: &str,
    aircraft: Aircraft,
) -> Result<SharedFlight> {
    Ok(Flight::new(number, origin, destination, aircraft)?.into_shared())
}

fn enroll_passengers(flight: &SharedFlight, passengers: &[&SharedPassenger]) {
    let mut flight = flight.borrow_mut();
    for passenger in passengers {
        let outcome = flight.enroll_passenger(passenger);
        match format::passenger_notice(outcome, passenger.name()) {
            Some(notice) => warn!("{notice}"),
            None => success!("{} enrolled on {}", passenger.name(), flight.number()),
        }
    }
}

fn enroll_crew(flight: &SharedFlight, members: &[&SharedCrew]) {
    let mut flight = flight.borrow_mut();
    for member in members {
        let outcome = flight.enroll_crew(member);
        match format::crew_notice(outcome, member.name()) {
            Some(notice) => warn!("{notice}"),
            None => success!("{} registered as crew on {}", member.name(), flight.number()),
        }
    }
}

fn audit(auditor: &Auditor, flight: &SharedFlight, cfg: &Config) {
    let report = auditor.audit_flight(&flight.borrow());
    print::print_status(format!(
        "{} – audit of flight {}",
        auditor,
        report.flight_number()
    ));
    if cfg.quiet < 2 {
        print::as_tree_one_level(format::audit_to_details(&report));
    }
}
