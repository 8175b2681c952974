//! Trip scheduling under the simplified hours-of-service rules.
//!
//! [`PlanBuilder`] turns resolved [`RouteMetrics`] and the driver's used
//! cycle hours into an ordered sequence of [`DayPlan`] records:
//!
//! ```text
//! route + cycle_used ──▶ requirements ──▶ capacity check ──▶ fold(plan_day) ──▶ days
//! ```
//!
//! The capacity check is all-or-nothing: a trip that needs more on-duty time
//! than the cycle has left fails with [`WaybillError::CapacityExceeded`] and
//! no partial plan is returned.
//!
//! ```rust
//! use waybill_core::{models::RouteMetrics, schedule::build_plan};
//!
//! let days = build_plan(&RouteMetrics::new(50.0, 1.0), 0.0)?;
//! assert_eq!(days.len(), 1);
//! assert_eq!(days[0].driving_hours, 1.0);
//! # Ok::<(), waybill_core::WaybillError>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WaybillError},
    models::{DayPlan, RouteMetrics},
};

pub mod limits;
pub mod state;


pub use limits::HosLimits;
pub use state::{plan_day, ScheduleState};

/// Time budget a trip needs, computed before any day is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripRequirements {
    /// Fuel stops implied by the total distance
    pub fueling_stops: u32,
    /// Hours spent on those fuel stops
    pub fueling_time: f64,
    /// Driving plus fueling plus start/end overhead
    pub total_time: f64,
    /// Cycle hours left before the trip
    pub remaining_hours: f64,
}

impl TripRequirements {
    /// Whether the trip fits into the remaining cycle. The boundary is
    /// inclusive.
    pub fn fits(&self) -> bool {
        self.total_time <= self.remaining_hours
    }
}

/// Builds day-by-day duty plans.
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    limits: HosLimits,
}

impl PlanBuilder {
    /// Creates a builder using the production rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rule set.
    pub fn with_limits(mut self, limits: HosLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Computes the time budget for `route` without scheduling it.
    ///
    /// # Errors
    ///
    /// Returns `WaybillError::InvalidRoute` for non-positive or non-finite
    /// durations and negative or non-finite distances, and
    /// `WaybillError::InvalidInput` for a non-finite `cycle_used`.
    pub fn requirements(&self, route: &RouteMetrics, cycle_used: f64) -> Result<TripRequirements> {
        validate(route, cycle_used)?;

        let fueling_stops = (route.distance_miles / self.limits.fuel_interval_miles).floor() as u32;
        let fueling_time = f64::from(fueling_stops) * self.limits.fuel_stop_hours;
        let total_time = route.duration_hours + fueling_time + self.limits.overhead_hours();

        Ok(TripRequirements {
            fueling_stops,
            fueling_time,
            total_time,
            remaining_hours: self.limits.cycle_hours - cycle_used,
        })
    }

    /// Schedules `route` for a driver who has already used `cycle_used`
    /// hours of the cycle.
    ///
    /// # Errors
    ///
    /// - `WaybillError::InvalidRoute` / `InvalidInput` for malformed input
    /// - `WaybillError::CapacityExceeded` when the trip does not fit the
    ///   remaining cycle
    /// - `WaybillError::Internal` if the schedule stops making progress
    pub fn build(&self, route: &RouteMetrics, cycle_used: f64) -> Result<Vec<DayPlan>> {
        let requirements = self.requirements(route, cycle_used)?;
        if !requirements.fits() {
            return Err(WaybillError::CapacityExceeded {
                required: requirements.total_time,
                remaining: requirements.remaining_hours,
            });
        }

        let max_days = self.max_days(route);
        let mut state = ScheduleState::default();
        let mut days = Vec::new();

        while !state.is_complete() {
            if days.len() >= max_days {
                return Err(WaybillError::internal(format!(
                    "schedule did not finish within {max_days} days"
                )));
            }

            let (next, day) = plan_day(state, route, &requirements, &self.limits);
            if !next.is_complete() && day.driving_hours <= 0.0 {
                return Err(WaybillError::internal(format!(
                    "day {} scheduled no driving",
                    day.day_number
                )));
            }
            day.check(&self.limits)?;

            debug!(
                "Day {}: {:.2}h driving, {:.2}h on duty, {} stop(s)",
                day.day_number,
                day.driving_hours,
                day.on_duty_hours,
                day.stops.len()
            );
            days.push(day);
            state = next;
        }

        Ok(days)
    }

    /// Upper bound on the number of days a well-formed route can take.
    fn max_days(&self, route: &RouteMetrics) -> usize {
        let driving_days = if self.limits.max_driving_hours > 0.0 {
            (route.duration_hours / self.limits.max_driving_hours).ceil()
        } else {
            0.0
        };
        driving_days as usize + 1
    }
}

/// Schedules `route` with the production rule set.
///
/// # Errors
///
/// See [`PlanBuilder::build`].
pub fn build_plan(route: &RouteMetrics, cycle_used: f64) -> Result<Vec<DayPlan>> {
    PlanBuilder::new().build(route, cycle_used)
}

fn validate(route: &RouteMetrics, cycle_used: f64) -> Result<()> {
    if !route.duration_hours.is_finite() || route.duration_hours <= 0.0 {
        return Err(WaybillError::invalid_route(
            "duration_hours",
            format!("must be a positive number, got {}", route.duration_hours),
        ));
    }
    if !route.distance_miles.is_finite() || route.distance_miles < 0.0 {
        return Err(WaybillError::invalid_route(
            "distance_miles",
            format!("must not be negative, got {}", route.distance_miles),
        ));
    }
    if !cycle_used.is_finite() {
        return Err(WaybillError::invalid_input("cycle_used").with_reason("must be a finite number"));
    }
    Ok(())
}
