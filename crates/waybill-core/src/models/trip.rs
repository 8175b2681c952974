//! Trip model definition and related functionality.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DayPlan, RouteMetrics};

/// A planned trip with the day records produced for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Driver the trip was planned for
    pub driver_id: u64,

    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,

    /// Cycle hours already used when the trip was planned
    pub cycle_used: f64,

    pub distance_miles: f64,
    pub duration_hours: f64,

    #[serde(default)]
    pub status: TripStatus,

    /// Where the rendered duty log was written, once rendered
    pub log_path: Option<String>,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Day-by-day plan (loaded with the trip)
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

impl Trip {
    /// Route metrics the trip was planned against.
    pub fn route(&self) -> RouteMetrics {
        RouteMetrics::new(self.distance_miles, self.duration_hours)
    }

    /// Total driving hours across all days.
    pub fn total_driving_hours(&self) -> f64 {
        self.days.iter().map(|d| d.driving_hours).sum()
    }

    /// Total on-duty hours across all days.
    pub fn total_on_duty_hours(&self) -> f64 {
        self.days.iter().map(|d| d.on_duty_hours).sum()
    }
}

/// Type-safe enumeration of trip statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Plan produced, trip not yet driven
    #[default]
    Planned,

    /// Trip finished
    Completed,
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(TripStatus::Planned),
            "completed" => Ok(TripStatus::Completed),
            _ => Err(format!("Invalid trip status: {s}")),
        }
    }
}

impl TripStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::Completed => "completed",
        }
    }
}

/// Filter options for listing trips.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    pub driver_id: Option<u64>,
    pub status: Option<TripStatus>,
}

/// Result of planning a trip: the stored trip plus the driver's cycle
/// budget after the trip's driving hours were charged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripOutcome {
    pub trip: Trip,
    pub remaining_hours: f64,
}

impl From<&crate::params::ListTrips> for TripFilter {
    fn from(params: &crate::params::ListTrips) -> Self {
        Self {
            driver_id: params.driver_id,
            status: Some(if params.completed {
                TripStatus::Completed
            } else {
                TripStatus::Planned
            }),
        }
    }
}
