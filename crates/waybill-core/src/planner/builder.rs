//! Builder for creating and configuring TripPlanner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::TripPlanner;
use crate::{
    db::Database,
    error::{FileSystemResultExt, Result, WaybillError},
};

const XDG_PREFIX: &str = "waybill";

/// Builder for creating and configuring TripPlanner instances.
#[derive(Debug, Clone, Default)]
pub struct TripPlannerBuilder {
    database_path: Option<PathBuf>,
    logs_dir: Option<PathBuf>,
}

impl TripPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/waybill/waybill.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the directory log documents are written to.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/waybill/logs`.
    pub fn with_logs_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.logs_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `WaybillError::FileSystem` if the database directory cannot
    /// be created, `WaybillError::XdgDirectory` if no default location can
    /// be determined, and `WaybillError::Database` if schema initialization
    /// fails.
    pub async fn build(self) -> Result<TripPlanner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => xdg::BaseDirectories::with_prefix(XDG_PREFIX)
                .place_data_file("waybill.db")
                .map_err(|e| WaybillError::XdgDirectory(e.to_string()))?,
        };

        let logs_dir = match self.logs_dir {
            Some(dir) => dir,
            None => xdg::BaseDirectories::with_prefix(XDG_PREFIX)
                .create_data_directory("logs")
                .map_err(|e| WaybillError::XdgDirectory(e.to_string()))?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).fs_context(parent)?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), WaybillError>(())
        })
        .await
        .map_err(WaybillError::join)??;

        Ok(TripPlanner::new(db_path, logs_dir))
    }
}
