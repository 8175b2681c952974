//! Parameter structures for waybill operations
//!
//! These structures are shared across interfaces (CLI, MCP) without
//! framework-specific derives beyond serde. Interface layers wrap them:
//! the CLI converts its clap argument structs with `From`, the MCP server
//! deserializes them through a transparent wrapper and gets JSON schemas via
//! the optional `schema` feature.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::RouteMetrics;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a driver profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateDriver {
    /// Driver name, printed on every log page
    pub name: String,
}

/// Parameters for resetting a driver's cycle budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResetCycle {
    /// ID of the driver
    pub driver_id: u64,
    /// New remaining hours; defaults to a full 70-hour cycle
    pub hours: Option<f64>,
}

/// Parameters for planning a trip.
///
/// Distance and duration come from the routing provider the caller used to
/// resolve the three locations; the locations themselves are only recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanTrip {
    /// ID of the driver the trip is for
    pub driver_id: u64,
    /// Where the driver currently is
    pub current_location: String,
    /// Where the load is picked up
    pub pickup_location: String,
    /// Where the load is delivered
    pub dropoff_location: String,
    /// Total route distance in miles
    pub distance_miles: f64,
    /// Expected driving time in hours
    pub duration_hours: f64,
    /// Hours of the 70-hour cycle already used
    #[serde(default)]
    pub cycle_used: f64,
}

impl PlanTrip {
    /// Route metrics described by these parameters.
    pub fn route(&self) -> RouteMetrics {
        RouteMetrics::new(self.distance_miles, self.duration_hours)
    }
}

/// Parameters for a stateless schedule preview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PreviewSchedule {
    /// Total route distance in miles
    pub distance_miles: f64,
    /// Expected driving time in hours
    pub duration_hours: f64,
    /// Hours of the 70-hour cycle already used
    #[serde(default)]
    pub cycle_used: f64,
}

impl PreviewSchedule {
    /// Route metrics described by these parameters.
    pub fn route(&self) -> RouteMetrics {
        RouteMetrics::new(self.distance_miles, self.duration_hours)
    }
}

/// Parameters for listing trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTrips {
    /// Only show trips for this driver
    pub driver_id: Option<u64>,
    /// Show completed trips instead of planned ones
    #[serde(default)]
    pub completed: bool,
}

/// Parameters for deleting a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteTrip {
    /// The ID of the trip to delete
    pub id: u64,
    /// Must be true to actually delete
    #[serde(default)]
    pub confirmed: bool,
}
