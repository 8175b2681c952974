//! Markdown formatting for drivers, trips and duty days.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers in this module cover collections and operation results.
//! All output is markdown, rendered by the CLI's terminal renderer or
//! returned verbatim to MCP clients.
//!
//! ```rust
//! use waybill_core::{display::DayPlans, models::{DayPlan, Stop}};
//!
//! let days = DayPlans(vec![DayPlan {
//!     day_number: 1,
//!     driving_hours: 11.0,
//!     on_duty_hours: 12.5,
//!     stops: vec![Stop::Fuel { mile_marker: 1020 }],
//! }]);
//! let output = days.to_string();
//! assert!(output.contains("Fueling at mile 1020"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{DayPlans, Drivers, Trips};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, PlannedTrip};
pub use status::OperationStatus;
