//! Data models for routes, duty days, trips and drivers.
//!
//! The scheduling core works on [`RouteMetrics`] and produces [`DayPlan`]
//! records; [`Trip`] and [`DriverProfile`] are the persisted records the
//! storage layer wraps around them. Display implementations live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.

pub mod day;
pub mod driver;
pub mod route;
pub mod trip;

#[cfg(test)]
mod tests;

pub use day::{DayPlan, Stop};
pub use driver::DriverProfile;
pub use route::{Coordinate, RouteMetrics};
pub use trip::{Trip, TripFilter, TripOutcome, TripStatus};
