#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        display::{DayPlans, Drivers, Trips},
        models::{DayPlan, DriverProfile, RouteMetrics, Stop, Trip, TripStatus},
        schedule::HosLimits,
    };

    fn create_test_trip(status: TripStatus) -> Trip {
        Trip {
            id: 42,
            driver_id: 7,
            current_location: "Dallas, TX".to_string(),
            pickup_location: "Tulsa, OK".to_string(),
            dropoff_location: "Denver, CO".to_string(),
            cycle_used: 12.0,
            distance_miles: 1100.0,
            duration_hours: 20.0,
            status,
            log_path: Some("/tmp/logs/logs_trip_42.svg".to_string()),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            days: vec![
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
            ],
        }
    }

    fn create_test_driver() -> DriverProfile {
        DriverProfile {
            id: 7,
            name: "Dana Reyes".to_string(),
            cycle_hours_remaining: 48.5,
            created_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_stop_label_round_trip() {
        let stop = Stop::Fuel { mile_marker: 1375 };
        assert_eq!(stop.label(), "Fueling at mile 1375");
        assert_eq!("Fueling at mile 1375".parse::<Stop>(), Ok(stop));
        assert!("Lunch at mile 3".parse::<Stop>().is_err());
        assert!("Fueling at mile abc".parse::<Stop>().is_err());
    }

    #[test]
    fn test_stop_serializes_as_label() {
        let json = serde_json::to_string(&vec![Stop::Fuel { mile_marker: 2062 }]).unwrap();
        assert_eq!(json, r#"["Fueling at mile 2062"]"#);

        let parsed: Vec<Stop> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![Stop::Fuel { mile_marker: 2062 }]);

        let bad: Result<Stop, _> = serde_json::from_str(r#""Nap at mile 9""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_trip_status_parsing() {
        assert_eq!("planned".parse::<TripStatus>(), Ok(TripStatus::Planned));
        assert_eq!("COMPLETED".parse::<TripStatus>(), Ok(TripStatus::Completed));
        assert!("cancelled".parse::<TripStatus>().is_err());
        assert_eq!(TripStatus::default(), TripStatus::Planned);
        assert_eq!(TripStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_day_plan_check() {
        let limits = HosLimits::default();
        let mut day = DayPlan::new(1);
        day.driving_hours = 11.0;
        day.on_duty_hours = 14.0;
        assert!(day.check(&limits).is_ok());

        day.driving_hours = 11.5;
        assert!(day.check(&limits).is_err());

        assert!(DayPlan::new(0).check(&limits).is_err());
    }

    #[test]
    fn test_route_speed() {
        assert_eq!(RouteMetrics::new(2500.0, 40.0).miles_per_hour(), 62.5);
    }

    #[test]
    fn test_trip_totals() {
        let trip = create_test_trip(TripStatus::Planned);
        assert_eq!(trip.total_driving_hours(), 20.0);
        assert_eq!(trip.total_on_duty_hours(), 22.5);
        assert_eq!(trip.route(), RouteMetrics::new(1100.0, 20.0));
    }

    #[test]
    fn test_trip_display() {
        let output = create_test_trip(TripStatus::Planned).to_string();

        assert!(output.starts_with("# Trip 42"));
        assert!(output.contains("- Status: planned"));
        assert!(output.contains("Dallas, TX → Tulsa, OK → Denver, CO"));
        assert!(output.contains("### Day 1: 11.00h driving, 12.00h on duty"));
        assert!(output.contains("- Fueling at mile 1100"));
        assert!(output.contains("- Log: /tmp/logs/logs_trip_42.svg"));
        assert!(output.contains("Total: 20.00h driving, 22.50h on duty"));
    }

    #[test]
    fn test_trip_display_without_days() {
        let mut trip = create_test_trip(TripStatus::Completed);
        trip.days.clear();
        trip.log_path = None;

        let output = trip.to_string();
        assert!(output.contains("No days planned."));
        assert!(!output.contains("- Log:"));
    }

    #[test]
    fn test_driver_display() {
        let output = create_test_driver().to_string();
        assert!(output.starts_with("# 7. Dana Reyes"));
        assert!(output.contains("Cycle hours remaining: 48.50"));
    }

    #[test]
    fn test_collections_display() {
        assert_eq!(Trips(Vec::new()).to_string(), "No trips found.\n");
        assert_eq!(Drivers(Vec::new()).to_string(), "No drivers found.\n");
        assert_eq!(DayPlans(Vec::new()).to_string(), "No days planned.\n");

        let trips = Trips(vec![create_test_trip(TripStatus::Planned)]);
        let output = trips.to_string();
        assert!(output.contains("## 42. Dallas, TX → Tulsa, OK → Denver, CO (planned)"));
        assert!(output.contains("2 day(s)"));

        let drivers = Drivers(vec![create_test_driver()]);
        assert_eq!(drivers.to_string(), "- 7. Dana Reyes (48.50h remaining)\n");
    }
}
