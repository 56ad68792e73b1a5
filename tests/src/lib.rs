//! Cross-crate scenario tests for the flightdeck workspace.

mod audit;
mod enrollment;
mod registry;
mod scenario;
