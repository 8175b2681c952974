//! Per-day duty plan records.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WaybillError},
    schedule::HosLimits,
};

const FUEL_LABEL_PREFIX: &str = "Fueling at mile ";

/// A scheduled non-driving duty event within a day.
///
/// Stops serialize as their human-readable label so stored log rows stay
/// readable, e.g. `"Fueling at mile 1375"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stop {
    /// Refuel after roughly every thousand miles of travel
    Fuel { mile_marker: u64 },
}

impl Stop {
    /// Label used in logs and rendered documents.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stop::Fuel { mile_marker } => write!(f, "{FUEL_LABEL_PREFIX}{mile_marker}"),
        }
    }
}

impl FromStr for Stop {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.strip_prefix(FUEL_LABEL_PREFIX)
            .and_then(|mile| mile.trim().parse::<u64>().ok())
            .map(|mile_marker| Stop::Fuel { mile_marker })
            .ok_or_else(|| format!("Invalid stop label: {s}"))
    }
}

impl TryFrom<String> for Stop {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Stop> for String {
    fn from(stop: Stop) -> Self {
        stop.to_string()
    }
}

/// One scheduled duty day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// 1-based day index within the trip
    pub day_number: u32,

    /// Hours spent driving on this day
    pub driving_hours: f64,

    /// Hours on duty, including driving, stops and start/end overhead
    pub on_duty_hours: f64,

    /// Stops in the order they happen
    #[serde(default)]
    pub stops: Vec<Stop>,
}

impl DayPlan {
    /// An empty day record.
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            driving_hours: 0.0,
            on_duty_hours: 0.0,
            stops: Vec::new(),
        }
    }

    /// Verifies the per-day caps against `limits`.
    pub fn check(&self, limits: &HosLimits) -> Result<()> {
        if self.day_number == 0 {
            return Err(WaybillError::internal("day numbers are 1-based"));
        }
        if !(0.0..=limits.max_driving_hours).contains(&self.driving_hours) {
            return Err(WaybillError::internal(format!(
                "day {} drives {:.2}h, outside 0..={}h",
                self.day_number, self.driving_hours, limits.max_driving_hours
            )));
        }
        if !(0.0..=limits.max_on_duty_hours).contains(&self.on_duty_hours) {
            return Err(WaybillError::internal(format!(
                "day {} is on duty {:.2}h, outside 0..={}h",
                self.day_number, self.on_duty_hours, limits.max_on_duty_hours
            )));
        }
        Ok(())
    }

    /// Stop labels in order.
    pub fn stop_labels(&self) -> Vec<String> {
        self.stops.iter().map(Stop::label).collect()
    }
}
