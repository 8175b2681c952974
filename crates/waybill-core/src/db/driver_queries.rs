//! Driver profile queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::DriverProfile,
    schedule::HosLimits,
};

const INSERT_DRIVER_SQL: &str =
    "INSERT INTO drivers (name, cycle_hours_remaining, created_at) VALUES (?1, ?2, ?3)";
const SELECT_DRIVER_SQL: &str =
    "SELECT id, name, cycle_hours_remaining, created_at FROM drivers WHERE id = ?1";
const LIST_DRIVERS_SQL: &str =
    "SELECT id, name, cycle_hours_remaining, created_at FROM drivers ORDER BY id";
const UPDATE_CYCLE_SQL: &str = "UPDATE drivers SET cycle_hours_remaining = ?1 WHERE id = ?2";

pub(crate) fn driver_from_row(row: &Row<'_>) -> rusqlite::Result<DriverProfile> {
    Ok(DriverProfile {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        cycle_hours_remaining: row.get(2)?,
        created_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
        })?,
    })
}

impl super::Database {
    /// Creates a driver with a full cycle budget.
    pub fn create_driver(&mut self, name: &str) -> Result<DriverProfile> {
        let now = Timestamp::now();
        let cycle_hours = HosLimits::default().cycle_hours;

        self.connection
            .execute(
                INSERT_DRIVER_SQL,
                params![name, cycle_hours, now.to_string()],
            )
            .db_context("Failed to insert driver")?;

        Ok(DriverProfile {
            id: self.connection.last_insert_rowid() as u64,
            name: name.to_string(),
            cycle_hours_remaining: cycle_hours,
            created_at: now,
        })
    }

    /// Retrieves a driver by ID.
    pub fn get_driver(&self, id: u64) -> Result<Option<DriverProfile>> {
        self.connection
            .query_row(SELECT_DRIVER_SQL, params![id as i64], driver_from_row)
            .optional()
            .db_context("Failed to query driver")
    }

    /// Lists all drivers ordered by ID.
    pub fn list_drivers(&self) -> Result<Vec<DriverProfile>> {
        let mut stmt = self
            .connection
            .prepare(LIST_DRIVERS_SQL)
            .db_context("Failed to prepare query")?;

        let drivers = stmt
            .query_map([], driver_from_row)
            .db_context("Failed to query drivers")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read driver rows")?;

        Ok(drivers)
    }

    /// Sets a driver's remaining cycle hours. Returns `None` when the driver
    /// does not exist.
    pub fn reset_cycle(&mut self, id: u64, hours: f64) -> Result<Option<DriverProfile>> {
        let updated = self
            .connection
            .execute(UPDATE_CYCLE_SQL, params![hours, id as i64])
            .db_context("Failed to update cycle hours")?;

        if updated == 0 {
            return Ok(None);
        }
        self.get_driver(id)
    }
}
