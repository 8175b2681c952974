//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{DayPlan, DriverProfile, Trip};

/// Newtype wrapper for displaying a list of trips in compact form.
pub struct Trips(pub Vec<Trip>);

impl Trips {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.0.iter()
    }
}

impl fmt::Display for Trips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trips found.");
        }
        for trip in &self.0 {
            trip.fmt_summary(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying drivers.
pub struct Drivers(pub Vec<DriverProfile>);

impl fmt::Display for Drivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No drivers found.");
        }
        for driver in &self.0 {
            writeln!(
                f,
                "- {}. {} ({:.2}h remaining)",
                driver.id, driver.name, driver.cycle_hours_remaining
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a schedule that was not stored.
pub struct DayPlans(pub Vec<DayPlan>);

impl fmt::Display for DayPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No days planned.");
        }
        writeln!(f, "# Schedule ({} day(s))", self.0.len())?;
        writeln!(f)?;
        for day in &self.0 {
            write!(f, "{day}")?;
        }
        let driving: f64 = self.0.iter().map(|d| d.driving_hours).sum();
        let on_duty: f64 = self.0.iter().map(|d| d.on_duty_hours).sum();
        writeln!(f, "Total: {driving:.2}h driving, {on_duty:.2}h on duty")
    }
}
