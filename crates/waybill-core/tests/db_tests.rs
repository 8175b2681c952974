use tempfile::NamedTempFile;
use waybill_core::{
    models::{DayPlan, Stop, TripFilter, TripStatus},
    params::PlanTrip,
    Database, WaybillError,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn trip_request(driver_id: u64) -> PlanTrip {
    PlanTrip {
        driver_id,
        current_location: "Dallas, TX".to_string(),
        pickup_location: "Tulsa, OK".to_string(),
        dropoff_location: "Denver, CO".to_string(),
        distance_miles: 1100.0,
        duration_hours: 20.0,
        cycle_used: 0.0,
    }
}

fn two_days() -> Vec<DayPlan> {
    vec![
        DayPlan {
            day_number: 1,
            driving_hours: 11.0,
            on_duty_hours: 12.0,
            stops: Vec::new(),
        },
        DayPlan {
            day_number: 2,
            driving_hours: 9.0,
            on_duty_hours: 10.5,
            stops: vec![Stop::Fuel { mile_marker: 1100 }],
        },
    ]
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert!(db.list_drivers().expect("Failed to list drivers").is_empty());
}

#[test]
fn test_create_and_get_driver() {
    let (_temp_file, mut db) = create_test_db();

    let driver = db.create_driver("Dana Reyes").expect("Failed to create driver");
    assert!(driver.id > 0);
    assert_eq!(driver.cycle_hours_remaining, 70.0);

    let fetched = db
        .get_driver(driver.id)
        .expect("Failed to get driver")
        .expect("Driver should exist");
    assert_eq!(fetched.name, "Dana Reyes");

    assert!(db.get_driver(999).expect("Query failed").is_none());
}

#[test]
fn test_record_trip_charges_driving_hours() {
    let (_temp_file, mut db) = create_test_db();
    let driver = db.create_driver("Dana Reyes").expect("Failed to create driver");

    let outcome = db
        .record_trip(&trip_request(driver.id), &two_days())
        .expect("Failed to record trip");

    assert_eq!(outcome.remaining_hours, 50.0);
    assert_eq!(outcome.trip.status, TripStatus::Planned);
    assert_eq!(outcome.trip.days.len(), 2);

    let stored = db
        .get_trip(outcome.trip.id)
        .expect("Failed to get trip")
        .expect("Trip should exist");
    assert_eq!(stored.days, two_days());
    assert_eq!(stored.log_path, None);
}

#[test]
fn test_record_trip_for_unknown_driver_writes_nothing() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.record_trip(&trip_request(42), &two_days()).unwrap_err();
    assert!(matches!(err, WaybillError::DriverNotFound { id: 42 }));

    let trips = db.list_trips(&TripFilter::default()).expect("Failed to list");
    assert!(trips.is_empty());
}

#[test]
fn test_list_trips_filters() {
    let (_temp_file, mut db) = create_test_db();
    let first = db.create_driver("Dana Reyes").expect("Failed to create driver");
    let second = db.create_driver("Sam Ortiz").expect("Failed to create driver");

    let a = db
        .record_trip(&trip_request(first.id), &two_days())
        .expect("Failed to record trip");
    let b = db
        .record_trip(&trip_request(second.id), &two_days())
        .expect("Failed to record trip");
    db.complete_trip(a.trip.id).expect("Failed to complete");

    let all = db.list_trips(&TripFilter::default()).expect("Failed to list");
    let ids: Vec<u64> = all.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![b.trip.id, a.trip.id]);

    let planned = db
        .list_trips(&TripFilter {
            driver_id: None,
            status: Some(TripStatus::Planned),
        })
        .expect("Failed to list");
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].id, b.trip.id);

    let by_driver = db
        .list_trips(&TripFilter {
            driver_id: Some(first.id),
            status: None,
        })
        .expect("Failed to list");
    assert_eq!(by_driver.len(), 1);
    assert_eq!(by_driver[0].status, TripStatus::Completed);
}

#[test]
fn test_complete_trip_only_once() {
    let (_temp_file, mut db) = create_test_db();
    let driver = db.create_driver("Dana Reyes").expect("Failed to create driver");
    let outcome = db
        .record_trip(&trip_request(driver.id), &two_days())
        .expect("Failed to record trip");

    let completed = db
        .complete_trip(outcome.trip.id)
        .expect("Failed to complete")
        .expect("Trip should exist");
    assert_eq!(completed.status, TripStatus::Completed);

    assert!(db.complete_trip(outcome.trip.id).expect("Query failed").is_none());
}

#[test]
fn test_delete_trip_removes_log_entries() {
    let (_temp_file, mut db) = create_test_db();
    let driver = db.create_driver("Dana Reyes").expect("Failed to create driver");
    let outcome = db
        .record_trip(&trip_request(driver.id), &two_days())
        .expect("Failed to record trip");

    let deleted = db
        .delete_trip(outcome.trip.id)
        .expect("Failed to delete")
        .expect("Trip should exist");
    assert_eq!(deleted.id, outcome.trip.id);

    assert!(db.get_trip(outcome.trip.id).expect("Query failed").is_none());
    assert!(db
        .get_log_entries(outcome.trip.id)
        .expect("Query failed")
        .is_empty());
    assert!(db.delete_trip(outcome.trip.id).expect("Query failed").is_none());
}

#[test]
fn test_set_log_path_and_reset_cycle() {
    let (_temp_file, mut db) = create_test_db();
    let driver = db.create_driver("Dana Reyes").expect("Failed to create driver");
    let outcome = db
        .record_trip(&trip_request(driver.id), &two_days())
        .expect("Failed to record trip");

    assert!(db
        .set_log_path(outcome.trip.id, "/tmp/logs_trip_1.svg")
        .expect("Failed to set path"));
    let trip = db
        .get_trip(outcome.trip.id)
        .expect("Query failed")
        .expect("Trip should exist");
    assert_eq!(trip.log_path.as_deref(), Some("/tmp/logs_trip_1.svg"));

    let reset = db
        .reset_cycle(driver.id, 70.0)
        .expect("Failed to reset")
        .expect("Driver should exist");
    assert_eq!(reset.cycle_hours_remaining, 70.0);
    assert!(db.reset_cycle(999, 70.0).expect("Query failed").is_none());
}

#[test]
fn test_discard_trip_refunds_cycle() {
    let (_temp_file, mut db) = create_test_db();
    let driver = db.create_driver("Dana Reyes").expect("Failed to create driver");
    let outcome = db
        .record_trip(&trip_request(driver.id), &two_days())
        .expect("Failed to record trip");
    assert_eq!(outcome.remaining_hours, 50.0);

    db.discard_trip(outcome.trip.id, driver.id, outcome.trip.total_driving_hours())
        .expect("Failed to discard trip");

    assert!(db.get_trip(outcome.trip.id).expect("Query failed").is_none());
    assert!(db
        .get_log_entries(outcome.trip.id)
        .expect("Query failed")
        .is_empty());
    let driver = db
        .get_driver(driver.id)
        .expect("Query failed")
        .expect("Driver should exist");
    assert_eq!(driver.cycle_hours_remaining, 70.0);
}
