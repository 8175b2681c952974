use tempfile::TempDir;
use waybill_core::{TripPlanner, TripPlannerBuilder};

/// Helper function to create a planner writing into a temporary directory
pub async fn create_test_planner() -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_logs_dir(Some(temp_dir.path().join("logs")))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
