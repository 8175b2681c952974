//! Fixed hours-of-service rule constants.

use serde::{Deserialize, Serialize};

/// The simplified rule set the scheduler enforces.
///
/// [`HosLimits::default`] is the production rule set: 11 hours of driving
/// and 14 hours on duty per day inside a 70-hour cycle, a 10-hour rest
/// between days, and a half-hour fuel stop every 1000 miles. Other values
/// exist only so the per-day transition can be exercised in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HosLimits {
    /// Maximum driving hours in a single day
    pub max_driving_hours: f64,
    /// Maximum on-duty hours in a single day
    pub max_on_duty_hours: f64,
    /// Total on-duty hours available in a cycle
    pub cycle_hours: f64,
    /// Off-duty rest between two duty days
    pub rest_hours: f64,
    /// Duration of one fuel stop
    pub fuel_stop_hours: f64,
    /// Miles between fuel stops
    pub fuel_interval_miles: f64,
    /// Pre-trip setup on the first day
    pub start_of_duty_hours: f64,
    /// Post-trip wrap-up on the last day
    pub end_of_duty_hours: f64,
}

impl Default for HosLimits {
    fn default() -> Self {
        Self {
            max_driving_hours: 11.0,
            max_on_duty_hours: 14.0,
            cycle_hours: 70.0,
            rest_hours: 10.0,
            fuel_stop_hours: 0.5,
            fuel_interval_miles: 1000.0,
            start_of_duty_hours: 1.0,
            end_of_duty_hours: 1.0,
        }
    }
}

impl HosLimits {
    /// Fixed overhead added to every trip (start plus end of duty).
    pub fn overhead_hours(&self) -> f64 {
        self.start_of_duty_hours + self.end_of_duty_hours
    }
}
