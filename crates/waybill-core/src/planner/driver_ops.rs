//! Driver operations for the TripPlanner.

use super::TripPlanner;
use crate::{
    error::{Result, WaybillError},
    models::DriverProfile,
    params::{CreateDriver, Id, ResetCycle},
    schedule::HosLimits,
};

impl TripPlanner {
    /// Creates a driver with a full 70-hour cycle.
    pub async fn create_driver(&self, params: &CreateDriver) -> Result<DriverProfile> {
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(WaybillError::invalid_input("name").with_reason("must not be empty"));
        }

        self.with_db(move |db| db.create_driver(&name)).await
    }

    /// Retrieves a driver by ID.
    pub async fn show_driver(&self, params: &Id) -> Result<Option<DriverProfile>> {
        let id = params.id;
        self.with_db(move |db| db.get_driver(id)).await
    }

    /// Lists all drivers.
    pub async fn list_drivers(&self) -> Result<Vec<DriverProfile>> {
        self.with_db(|db| db.list_drivers()).await
    }

    /// Resets a driver's remaining cycle hours, to a full cycle unless
    /// `params.hours` says otherwise.
    pub async fn reset_cycle(&self, params: &ResetCycle) -> Result<Option<DriverProfile>> {
        let cycle_hours = HosLimits::default().cycle_hours;
        let hours = params.hours.unwrap_or(cycle_hours);
        if !hours.is_finite() || !(0.0..=cycle_hours).contains(&hours) {
            return Err(WaybillError::invalid_input("hours")
                .with_reason(format!("must be between 0 and {cycle_hours}")));
        }

        let id = params.driver_id;
        self.with_db(move |db| db.reset_cycle(id, hours)).await
    }
}
