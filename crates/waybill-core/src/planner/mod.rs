//! High-level async API for drivers, trips and duty logs.
//!
//! [`TripPlanner`] coordinates the pure scheduling and rendering code with
//! the SQLite store and the log directory. Blocking work runs on tokio's
//! blocking pool; each call opens its own connection.
//!
//! ```text
//! PlanTrip ─▶ build_plan ─▶ Database::record_trip ─▶ render ─▶ write_document ─▶ TripOutcome
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use waybill_core::{params::{CreateDriver, PlanTrip}, TripPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new().build().await?;
//!
//! let driver = planner
//!     .create_driver(&CreateDriver { name: "Dana Reyes".to_string() })
//!     .await?;
//!
//! let outcome = planner
//!     .plan_trip(&PlanTrip {
//!         driver_id: driver.id,
//!         current_location: "Dallas, TX".to_string(),
//!         pickup_location: "Tulsa, OK".to_string(),
//!         dropoff_location: "Denver, CO".to_string(),
//!         distance_miles: 1050.0,
//!         duration_hours: 17.0,
//!         cycle_used: 0.0,
//!     })
//!     .await?;
//! println!("{}", outcome.trip);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, WaybillError},
};

pub mod builder;
pub mod driver_ops;
pub mod trip_ops;

#[cfg(test)]
mod tests;

pub use builder::TripPlannerBuilder;

/// Main interface for planning trips and managing drivers.
pub struct TripPlanner {
    pub(crate) db_path: PathBuf,
    pub(crate) logs_dir: PathBuf,
}

impl TripPlanner {
    pub(crate) fn new(db_path: PathBuf, logs_dir: PathBuf) -> Self {
        Self { db_path, logs_dir }
    }

    /// Directory rendered log documents are written to.
    pub fn logs_dir(&self) -> &std::path::Path {
        &self.logs_dir
    }

    /// Runs `f` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(WaybillError::join)?
    }
}
