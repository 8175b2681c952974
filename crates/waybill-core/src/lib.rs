//! Core library for the Waybill trip planner.
//!
//! Waybill schedules a truck trip under simplified hours-of-service rules
//! and produces a per-day duty log for it. The crate is organized in three
//! layers:
//!
//! - **Scheduling** ([`schedule`]): pure, deterministic day planning from
//!   route metrics and the driver's used cycle hours
//! - **Rendering** ([`render`]): pure layout of day plans into log pages,
//!   painted to SVG through a [`render::Canvas`]
//! - **Storage** ([`db`], [`planner`]): SQLite persistence of drivers and
//!   trips behind the async [`TripPlanner`] facade
//!
//! Domain models implement [`std::fmt::Display`] as markdown (see
//! [`display`]), so the CLI and the MCP server format output the same way.
//!
//! # Quick Start
//!
//! ```rust
//! use waybill_core::{models::RouteMetrics, render, schedule::build_plan};
//!
//! let days = build_plan(&RouteMetrics::new(2500.0, 40.0), 0.0)?;
//! assert_eq!(days.len(), 4);
//!
//! let document = render(1, "Dana Reyes", &days);
//! assert_eq!(document.pages().len(), days.len());
//! # Ok::<(), waybill_core::WaybillError>(())
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod render;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DayPlans, DeleteResult, Drivers, LocalDateTime, OperationStatus, PlannedTrip,
    Trips,
};
pub use error::{Result, WaybillError};
pub use models::{
    DayPlan, DriverProfile, RouteMetrics, Stop, Trip, TripFilter, TripOutcome, TripStatus,
};
pub use params::{CreateDriver, DeleteTrip, Id, ListTrips, PlanTrip, PreviewSchedule, ResetCycle};
pub use planner::{TripPlanner, TripPlannerBuilder};
pub use render::{render, to_svg, LogDocument};
pub use schedule::{build_plan, HosLimits, PlanBuilder};
