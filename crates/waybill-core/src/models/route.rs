//! Route metrics handed over by the routing collaborator.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single latitude/longitude pair along the route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Resolved route distance and duration. Read-only input to scheduling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RouteMetrics {
    /// Total route distance in miles
    pub distance_miles: f64,

    /// Expected driving time in hours
    pub duration_hours: f64,

    /// Ordered waypoints, when the routing provider supplied them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<Coordinate>,
}

impl RouteMetrics {
    /// Route metrics without waypoints.
    pub fn new(distance_miles: f64, duration_hours: f64) -> Self {
        Self {
            distance_miles,
            duration_hours,
            waypoints: Vec::new(),
        }
    }

    /// Average speed implied by the metrics, in miles per driving hour.
    pub fn miles_per_hour(&self) -> f64 {
        self.distance_miles / self.duration_hours
    }
}
