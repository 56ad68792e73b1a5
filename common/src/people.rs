//! # People Models
//!
//! The person hierarchy of the system: a base [`Person`] identity held by
//! composition inside [`Passenger`] and [`Employee`], plus the [`Luggage`]
//! items a passenger accumulates.
//!
//! Flights and airlines never own people; they hold shared handles
//! ([`SharedPassenger`], [`SharedCrew`]) and compare members by handle
//! identity.

mod employee;
mod luggage;
mod passenger;
mod person;

pub use employee::{Employee, SharedCrew};
pub use luggage::Luggage;
pub use passenger::{Passenger, SharedPassenger};
pub use person::Person;
