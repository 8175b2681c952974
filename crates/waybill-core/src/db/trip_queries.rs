//! Trip and log entry queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, WaybillError},
    models::{DayPlan, Stop, Trip, TripFilter, TripOutcome, TripStatus},
    params::PlanTrip,
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (driver_id, current_location, pickup_location, dropoff_location, cycle_used, distance_miles, duration_hours, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const INSERT_LOG_ENTRY_SQL: &str = "INSERT INTO log_entries (trip_id, day_number, driving_hours, on_duty_hours, stops) VALUES (?1, ?2, ?3, ?4, ?5)";
const CHARGE_CYCLE_SQL: &str =
    "UPDATE drivers SET cycle_hours_remaining = cycle_hours_remaining - ?1 WHERE id = ?2";
const SELECT_REMAINING_SQL: &str = "SELECT cycle_hours_remaining FROM drivers WHERE id = ?1";
const TRIP_COLUMNS: &str = "id, driver_id, current_location, pickup_location, dropoff_location, cycle_used, distance_miles, duration_hours, status, log_path, created_at";
const SELECT_LOG_ENTRIES_SQL: &str = "SELECT day_number, driving_hours, on_duty_hours, stops FROM log_entries WHERE trip_id = ?1 ORDER BY day_number";
const UPDATE_LOG_PATH_SQL: &str = "UPDATE trips SET log_path = ?1 WHERE id = ?2";
const UPDATE_STATUS_SQL: &str = "UPDATE trips SET status = ?1 WHERE id = ?2 AND status = ?3";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";
const REFUND_CYCLE_SQL: &str =
    "UPDATE drivers SET cycle_hours_remaining = cycle_hours_remaining + ?1 WHERE id = ?2";

fn conversion_error(column: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

fn trip_from_row(row: &Row<'_>) -> rusqlite::Result<Trip> {
    let status_str: String = row.get(8)?;
    let status = status_str
        .parse::<TripStatus>()
        .map_err(|e| conversion_error(8, e))?;

    Ok(Trip {
        id: row.get::<_, i64>(0)? as u64,
        driver_id: row.get::<_, i64>(1)? as u64,
        current_location: row.get(2)?,
        pickup_location: row.get(3)?,
        dropoff_location: row.get(4)?,
        cycle_used: row.get(5)?,
        distance_miles: row.get(6)?,
        duration_hours: row.get(7)?,
        status,
        log_path: row.get(9)?,
        created_at: row.get::<_, String>(10)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
        })?,
        days: Vec::new(),
    })
}

fn day_from_row(row: &Row<'_>) -> rusqlite::Result<DayPlan> {
    let stops_json: String = row.get(3)?;
    let stops: Vec<Stop> = serde_json::from_str(&stops_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(DayPlan {
        day_number: row.get(0)?,
        driving_hours: row.get(1)?,
        on_duty_hours: row.get(2)?,
        stops,
    })
}

impl super::Database {
    /// Stores a planned trip and its day records, and charges the trip's
    /// driving hours against the driver's cycle, all in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `WaybillError::DriverNotFound` if the driver does not exist;
    /// nothing is written in that case.
    pub fn record_trip(&mut self, request: &PlanTrip, plan: &[DayPlan]) -> Result<TripOutcome> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let driver_exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM drivers WHERE id = ?1)",
                params![request.driver_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check driver existence")?;
        if !driver_exists {
            return Err(WaybillError::DriverNotFound {
                id: request.driver_id,
            });
        }

        let now = Timestamp::now();
        tx.execute(
            INSERT_TRIP_SQL,
            params![
                request.driver_id as i64,
                request.current_location,
                request.pickup_location,
                request.dropoff_location,
                request.cycle_used,
                request.distance_miles,
                request.duration_hours,
                TripStatus::Planned.as_str(),
                now.to_string(),
            ],
        )
        .db_context("Failed to insert trip")?;
        let trip_id = tx.last_insert_rowid() as u64;

        for day in plan {
            let stops = serde_json::to_string(&day.stops)?;
            tx.execute(
                INSERT_LOG_ENTRY_SQL,
                params![
                    trip_id as i64,
                    day.day_number,
                    day.driving_hours,
                    day.on_duty_hours,
                    stops
                ],
            )
            .db_context("Failed to insert log entry")?;
        }

        let driving: f64 = plan.iter().map(|d| d.driving_hours).sum();
        tx.execute(CHARGE_CYCLE_SQL, params![driving, request.driver_id as i64])
            .db_context("Failed to charge cycle hours")?;
        let remaining_hours: f64 = tx
            .query_row(
                SELECT_REMAINING_SQL,
                params![request.driver_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to read remaining cycle hours")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TripOutcome {
            trip: Trip {
                id: trip_id,
                driver_id: request.driver_id,
                current_location: request.current_location.clone(),
                pickup_location: request.pickup_location.clone(),
                dropoff_location: request.dropoff_location.clone(),
                cycle_used: request.cycle_used,
                distance_miles: request.distance_miles,
                duration_hours: request.duration_hours,
                status: TripStatus::Planned,
                log_path: None,
                created_at: now,
                days: plan.to_vec(),
            },
            remaining_hours,
        })
    }

    /// Retrieves a trip with its day records.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        let sql = format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1");
        let mut trip = self
            .connection
            .query_row(&sql, params![id as i64], trip_from_row)
            .optional()
            .db_context("Failed to query trip")?;

        if let Some(ref mut trip) = trip {
            trip.days = self.get_log_entries(trip.id)?;
        }

        Ok(trip)
    }

    /// Day records of a trip, ordered by day number.
    pub fn get_log_entries(&self, trip_id: u64) -> Result<Vec<DayPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LOG_ENTRIES_SQL)
            .db_context("Failed to prepare query")?;

        let days = stmt
            .query_map(params![trip_id as i64], day_from_row)
            .db_context("Failed to query log entries")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read log entry rows")?;

        Ok(days)
    }

    /// Lists trips, newest first, with their day records.
    pub fn list_trips(&self, filter: &TripFilter) -> Result<Vec<Trip>> {
        let mut query = format!("SELECT {TRIP_COLUMNS} FROM trips");
        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(driver_id) = filter.driver_id {
            conditions.push("driver_id = ?");
            params_vec.push(Box::new(driver_id as i64));
        }
        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();

        let mut trips = stmt
            .query_map(&params_refs[..], trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read trip rows")?;

        for trip in &mut trips {
            trip.days = self.get_log_entries(trip.id)?;
        }

        Ok(trips)
    }

    /// Records where a trip's log document was written.
    pub fn set_log_path(&mut self, id: u64, path: &str) -> Result<bool> {
        let updated = self
            .connection
            .execute(UPDATE_LOG_PATH_SQL, params![path, id as i64])
            .db_context("Failed to update log path")?;
        Ok(updated > 0)
    }

    /// Marks a planned trip as completed. Returns `None` if the trip does
    /// not exist or is already completed.
    pub fn complete_trip(&mut self, id: u64) -> Result<Option<Trip>> {
        let updated = self
            .connection
            .execute(
                UPDATE_STATUS_SQL,
                params![
                    TripStatus::Completed.as_str(),
                    id as i64,
                    TripStatus::Planned.as_str()
                ],
            )
            .db_context("Failed to update trip status")?;

        if updated == 0 {
            return Ok(None);
        }
        self.get_trip(id)
    }

    /// Deletes a trip and its log entries, returning the deleted trip.
    pub fn delete_trip(&mut self, id: u64) -> Result<Option<Trip>> {
        let Some(trip) = self.get_trip(id)? else {
            return Ok(None);
        };

        self.connection
            .execute(DELETE_TRIP_SQL, params![id as i64])
            .db_context("Failed to delete trip")?;

        Ok(Some(trip))
    }

    /// Reverts a recorded trip: deletes it with its log entries and gives
    /// the `charged` driving hours back to the driver, in one transaction.
    pub fn discard_trip(&mut self, trip_id: u64, driver_id: u64, charged: f64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_TRIP_SQL, params![trip_id as i64])
            .db_context("Failed to delete trip")?;
        tx.execute(REFUND_CYCLE_SQL, params![charged, driver_id as i64])
            .db_context("Failed to refund cycle hours")?;

        tx.commit().db_context("Failed to commit transaction")
    }
}
