//! Tests for the planner module.

use super::*;
use crate::params::{CreateDriver, DeleteTrip, Id, ListTrips, PlanTrip, ResetCycle};
use tempfile::TempDir;

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let logs_dir = temp_dir.path().join("logs");
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_logs_dir(Some(&logs_dir))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn trip_request(driver_id: u64, distance_miles: f64, duration_hours: f64) -> PlanTrip {
    PlanTrip {
        driver_id,
        current_location: "Dallas, TX".to_string(),
        pickup_location: "Tulsa, OK".to_string(),
        dropoff_location: "Denver, CO".to_string(),
        distance_miles,
        duration_hours,
        cycle_used: 0.0,
    }
}

#[tokio::test]
async fn test_plan_trip_stores_days_and_charges_cycle() {
    let (_temp_dir, planner) = create_test_planner().await;
    let driver = planner
        .create_driver(&CreateDriver {
            name: "Dana Reyes".to_string(),
        })
        .await
        .expect("Failed to create driver");

    let outcome = planner
        .plan_trip(&trip_request(driver.id, 2500.0, 40.0))
        .await
        .expect("Failed to plan trip");

    assert_eq!(outcome.trip.days.len(), 4);
    assert!((outcome.remaining_hours - 30.0).abs() < 1e-9);

    let log_path = outcome.trip.log_path.clone().expect("Log path should be set");
    assert!(std::path::Path::new(&log_path).exists());
    assert!(log_path.ends_with(&format!("logs_trip_{}.svg", outcome.trip.id)));

    let stored = planner
        .show_trip(&Id {
            id: outcome.trip.id,
        })
        .await
        .expect("Failed to show trip")
        .expect("Trip should exist");
    assert_eq!(stored.days, outcome.trip.days);
    assert_eq!(stored.log_path, Some(log_path));

    let driver = planner
        .show_driver(&Id { id: driver.id })
        .await
        .expect("Failed to show driver")
        .expect("Driver should exist");
    assert!((driver.cycle_hours_remaining - 30.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_rejected_trip_stores_nothing() {
    let (_temp_dir, planner) = create_test_planner().await;
    let driver = planner
        .create_driver(&CreateDriver {
            name: "Dana Reyes".to_string(),
        })
        .await
        .expect("Failed to create driver");

    let mut request = trip_request(driver.id, 100.0, 5.0);
    request.cycle_used = 68.0;
    let err = planner.plan_trip(&request).await.unwrap_err();
    assert!(matches!(err, WaybillError::CapacityExceeded { .. }));

    let trips = planner
        .list_trips(&ListTrips::default())
        .await
        .expect("Failed to list trips");
    assert!(trips.is_empty());
    assert_eq!(
        std::fs::read_dir(planner.logs_dir())
            .map(|entries| entries.count())
            .unwrap_or(0),
        0
    );
}

#[tokio::test]
async fn test_plan_trip_for_unknown_driver() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .plan_trip(&trip_request(42, 50.0, 1.0))
        .await
        .unwrap_err();
    assert!(matches!(err, WaybillError::DriverNotFound { id: 42 }));
}

#[tokio::test]
async fn test_complete_and_list_trips() {
    let (_temp_dir, planner) = create_test_planner().await;
    let driver = planner
        .create_driver(&CreateDriver {
            name: "Dana Reyes".to_string(),
        })
        .await
        .expect("Failed to create driver");

    let first = planner
        .plan_trip(&trip_request(driver.id, 50.0, 1.0))
        .await
        .expect("Failed to plan trip");
    planner
        .plan_trip(&trip_request(driver.id, 120.0, 2.0))
        .await
        .expect("Failed to plan trip");

    let completed = planner
        .complete_trip(&Id {
            id: first.trip.id,
        })
        .await
        .expect("Failed to complete trip");
    assert!(completed.is_some());

    // Completing twice is a no-op
    let again = planner
        .complete_trip(&Id {
            id: first.trip.id,
        })
        .await
        .expect("Failed to complete trip");
    assert!(again.is_none());

    let planned = planner
        .list_trips(&ListTrips {
            driver_id: Some(driver.id),
            completed: false,
        })
        .await
        .expect("Failed to list trips");
    assert_eq!(planned.len(), 1);

    let done = planner
        .list_trips(&ListTrips {
            driver_id: None,
            completed: true,
        })
        .await
        .expect("Failed to list trips");
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, first.trip.id);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let driver = planner
        .create_driver(&CreateDriver {
            name: "Dana Reyes".to_string(),
        })
        .await
        .expect("Failed to create driver");
    let outcome = planner
        .plan_trip(&trip_request(driver.id, 50.0, 1.0))
        .await
        .expect("Failed to plan trip");

    let err = planner
        .delete_trip(&DeleteTrip {
            id: outcome.trip.id,
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WaybillError::InvalidInput { .. }));

    let deleted = planner
        .delete_trip(&DeleteTrip {
            id: outcome.trip.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete trip");
    assert!(deleted.is_some());

    let missing = planner
        .show_trip(&Id {
            id: outcome.trip.id,
        })
        .await
        .expect("Failed to show trip");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_render_trip_overwrites_log() {
    let (_temp_dir, planner) = create_test_planner().await;
    let driver = planner
        .create_driver(&CreateDriver {
            name: "Dana Reyes".to_string(),
        })
        .await
        .expect("Failed to create driver");
    let outcome = planner
        .plan_trip(&trip_request(driver.id, 1100.0, 20.0))
        .await
        .expect("Failed to plan trip");
    let path = outcome.trip.log_path.clone().expect("Log path should be set");
    std::fs::remove_file(&path).expect("Failed to remove log");

    let trip = planner
        .render_trip(&Id {
            id: outcome.trip.id,
        })
        .await
        .expect("Failed to render trip");

    assert_eq!(trip.log_path, Some(path.clone()));
    let contents = std::fs::read_to_string(&path).expect("Failed to read log");
    assert!(contents.contains("Driver: Dana Reyes"));
}

#[tokio::test]
async fn test_render_unknown_trip() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner.render_trip(&Id { id: 9 }).await.unwrap_err();
    assert!(matches!(err, WaybillError::TripNotFound { id: 9 }));
}

#[tokio::test]
async fn test_reset_cycle_bounds() {
    let (_temp_dir, planner) = create_test_planner().await;
    let driver = planner
        .create_driver(&CreateDriver {
            name: "Dana Reyes".to_string(),
        })
        .await
        .expect("Failed to create driver");

    let reset = planner
        .reset_cycle(&ResetCycle {
            driver_id: driver.id,
            hours: Some(12.5),
        })
        .await
        .expect("Failed to reset cycle")
        .expect("Driver should exist");
    assert!((reset.cycle_hours_remaining - 12.5).abs() < 1e-9);

    let err = planner
        .reset_cycle(&ResetCycle {
            driver_id: driver.id,
            hours: Some(80.0),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WaybillError::InvalidInput { .. }));

    let missing = planner
        .reset_cycle(&ResetCycle {
            driver_id: 99,
            hours: None,
        })
        .await
        .expect("Failed to reset cycle");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_create_driver_rejects_blank_name() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .create_driver(&CreateDriver {
            name: "   ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WaybillError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_new_and_reset_drivers_get_full_cycle() {
    let (_temp_dir, planner) = create_test_planner().await;
    let full_cycle = crate::schedule::HosLimits::default().cycle_hours;

    let driver = planner
        .create_driver(&CreateDriver {
            name: "Sam Ortiz".to_string(),
        })
        .await
        .expect("Failed to create driver");
    assert_eq!(driver.cycle_hours_remaining, full_cycle);

    planner
        .reset_cycle(&ResetCycle {
            driver_id: driver.id,
            hours: Some(5.0),
        })
        .await
        .expect("Failed to reset cycle");
    let reset = planner
        .reset_cycle(&ResetCycle {
            driver_id: driver.id,
            hours: None,
        })
        .await
        .expect("Failed to reset cycle")
        .expect("Driver should exist");
    assert_eq!(reset.cycle_hours_remaining, full_cycle);
}
