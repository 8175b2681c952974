//! Trip operations for the TripPlanner.

use log::{info, warn};

use super::TripPlanner;
use crate::{
    error::{Result, WaybillError},
    models::{DayPlan, Trip, TripFilter, TripOutcome},
    params::{DeleteTrip, Id, ListTrips, PlanTrip, PreviewSchedule},
    render::{render, write_document, LogDocument},
    schedule::build_plan,
};

impl TripPlanner {
    /// Plans a trip, stores it, charges the driver's cycle and writes the
    /// duty log document.
    ///
    /// Nothing is stored when the schedule is rejected. If the log document
    /// cannot be written, the stored trip is discarded again and its driving
    /// hours are refunded to the driver.
    ///
    /// # Errors
    ///
    /// - `WaybillError::DriverNotFound` if the driver does not exist
    /// - `WaybillError::CapacityExceeded` / `InvalidRoute` from scheduling
    /// - `WaybillError::FileSystem` / `Render` if the log cannot be written
    pub async fn plan_trip(&self, params: &PlanTrip) -> Result<TripOutcome> {
        let driver_id = params.driver_id;
        let driver = self
            .with_db(move |db| db.get_driver(driver_id))
            .await?
            .ok_or(WaybillError::DriverNotFound { id: driver_id })?;

        let plan = build_plan(&params.route(), params.cycle_used).inspect_err(|e| {
            warn!("Rejected trip for driver {}: {e}", driver.id);
        })?;

        let request = params.clone();
        let stored_plan = plan.clone();
        let mut outcome = self
            .with_db(move |db| db.record_trip(&request, &stored_plan))
            .await?;

        let document = render(outcome.trip.id, &driver.name, &plan);
        let path = match self.store_document(&document).await {
            Ok(path) => path,
            Err(error) => {
                warn!(
                    "Discarding trip {} after failing to write its log: {error}",
                    outcome.trip.id
                );
                let trip_id = outcome.trip.id;
                let charged = outcome.trip.total_driving_hours();
                self.with_db(move |db| db.discard_trip(trip_id, driver_id, charged))
                    .await?;
                return Err(error);
            }
        };
        outcome.trip.log_path = Some(path);

        info!(
            "Planned trip {} for driver {} over {} day(s), {:.2}h cycle remaining",
            outcome.trip.id,
            driver.id,
            plan.len(),
            outcome.remaining_hours
        );
        Ok(outcome)
    }

    /// Schedules a route without storing anything.
    pub fn preview_schedule(&self, params: &PreviewSchedule) -> Result<Vec<DayPlan>> {
        build_plan(&params.route(), params.cycle_used)
    }

    /// Retrieves a trip with its day records.
    pub async fn show_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let id = params.id;
        self.with_db(move |db| db.get_trip(id)).await
    }

    /// Lists trips matching the parameters.
    pub async fn list_trips(&self, params: &ListTrips) -> Result<Vec<Trip>> {
        let filter = TripFilter::from(params);
        self.with_db(move |db| db.list_trips(&filter)).await
    }

    /// Marks a trip as completed.
    pub async fn complete_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let id = params.id;
        self.with_db(move |db| db.complete_trip(id)).await
    }

    /// Deletes a trip. Requires `confirmed`; the log file is left in place.
    pub async fn delete_trip(&self, params: &DeleteTrip) -> Result<Option<Trip>> {
        if !params.confirmed {
            return Err(WaybillError::invalid_input("confirmed")
                .with_reason("deletion must be confirmed"));
        }

        let id = params.id;
        self.with_db(move |db| db.delete_trip(id)).await
    }

    /// Builds the log document of a stored trip without writing it.
    pub async fn trip_document(&self, params: &Id) -> Result<LogDocument> {
        let id = params.id;
        let (trip, driver) = self
            .with_db(move |db| {
                let trip = db.get_trip(id)?.ok_or(WaybillError::TripNotFound { id })?;
                let driver = db.get_driver(trip.driver_id)?;
                Ok((trip, driver))
            })
            .await?;

        let label = driver.map_or_else(|| format!("Driver #{}", trip.driver_id), |d| d.name);
        Ok(render(trip.id, &label, &trip.days))
    }

    /// Re-renders a stored trip's log, overwriting the previous document.
    pub async fn render_trip(&self, params: &Id) -> Result<Trip> {
        let document = self.trip_document(params).await?;
        self.store_document(&document).await?;

        self.show_trip(params)
            .await?
            .ok_or(WaybillError::TripNotFound { id: params.id })
    }

    /// Writes `document` to the log directory and records its path.
    async fn store_document(&self, document: &LogDocument) -> Result<String> {
        let logs_dir = self.logs_dir.clone();
        let document = document.clone();
        let trip_id = document.trip_id();

        let path = tokio::task::spawn_blocking(move || write_document(&document, &logs_dir))
            .await
            .map_err(WaybillError::join)??;
        let path = path.to_string_lossy().into_owned();

        let stored = path.clone();
        self.with_db(move |db| db.set_log_path(trip_id, &stored))
            .await?;
        Ok(path)
    }
}
