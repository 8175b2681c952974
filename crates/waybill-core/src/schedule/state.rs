//! Per-day schedule transition.
//!
//! Each call to [`plan_day`] consumes the state left by the previous day and
//! yields the next state plus that day's [`DayPlan`]; [`super::PlanBuilder`]
//! folds it until the trip wraps up.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{HosLimits, TripRequirements};
use crate::models::{DayPlan, RouteMetrics, Stop};

/// Tolerance used when deciding that all driving has been scheduled.
pub(crate) const EPSILON: f64 = 1e-9;

/// Accumulators threaded from one day to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
    /// Days already scheduled (0-based index of the next day)
    pub day_index: u32,
    /// Scheduling clock in hours, including rest periods
    pub elapsed_time: f64,
    /// On-duty hours consumed so far, measured against the trip's total time
    pub duty_time: f64,
    /// Driving hours scheduled so far
    pub driven_hours: f64,
    /// Estimated miles covered so far
    pub miles_driven: f64,
    /// Estimated miles since the last fuel stop
    pub distance_since_fuel: f64,
    /// Set once the wrap-up hour has been scheduled
    pub wrapped_up: bool,
}

impl ScheduleState {
    /// Driving hours still to be scheduled for `route`.
    pub fn remaining_driving(&self, route: &RouteMetrics) -> f64 {
        (route.duration_hours - self.driven_hours).max(0.0)
    }

    /// Whether the trip has been fully scheduled.
    pub fn is_complete(&self) -> bool {
        self.wrapped_up
    }
}

/// Schedules a single duty day.
///
/// Distance is estimated proportionally to driving time; fuel stops are
/// inserted at most once per day, when the estimate since the previous stop
/// reaches the fuel interval. If the on-duty cap is exceeded, the day is
/// clamped and the clock jumps to that day's duty boundary.
pub fn plan_day(
    state: ScheduleState,
    route: &RouteMetrics,
    requirements: &TripRequirements,
    limits: &HosLimits,
) -> (ScheduleState, DayPlan) {
    let mut next = state;
    let mut day = DayPlan::new(state.day_index + 1);

    if state.day_index == 0 {
        day.on_duty_hours += limits.start_of_duty_hours;
        next.duty_time += limits.start_of_duty_hours;
        next.elapsed_time += limits.start_of_duty_hours;
    }

    let daily_driving = limits
        .max_driving_hours
        .min(next.remaining_driving(route))
        .min((requirements.total_time - next.duty_time).max(0.0));
    let miles = daily_driving * route.miles_per_hour();

    day.driving_hours = daily_driving;
    day.on_duty_hours += daily_driving;
    next.duty_time += daily_driving;
    next.elapsed_time += daily_driving;
    next.driven_hours += daily_driving;
    next.miles_driven += miles;
    next.distance_since_fuel += miles;

    if next.distance_since_fuel >= limits.fuel_interval_miles {
        day.stops.push(Stop::Fuel {
            mile_marker: next.miles_driven.floor() as u64,
        });
        day.on_duty_hours += limits.fuel_stop_hours;
        next.duty_time += limits.fuel_stop_hours;
        next.elapsed_time += limits.fuel_stop_hours;
        next.distance_since_fuel %= limits.fuel_interval_miles;
    }

    if next.remaining_driving(route) <= EPSILON {
        day.on_duty_hours += limits.end_of_duty_hours;
        next.duty_time += limits.end_of_duty_hours;
        next.elapsed_time += limits.end_of_duty_hours;
        next.wrapped_up = true;
    }

    if day.on_duty_hours > limits.max_on_duty_hours {
        debug!(
            "Day {} on duty {:.2}h, clamping to {}h",
            day.day_number, day.on_duty_hours, limits.max_on_duty_hours
        );
        day.on_duty_hours = limits.max_on_duty_hours;
        next.elapsed_time = f64::from(state.day_index) * 24.0 + limits.max_on_duty_hours;
    }

    next.elapsed_time += limits.rest_hours;
    next.day_index += 1;

    (next, day)
}
