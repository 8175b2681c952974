//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{DayPlan, DriverProfile, Trip, TripStatus};

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Day {}: {:.2}h driving, {:.2}h on duty",
            self.day_number, self.driving_hours, self.on_duty_hours
        )?;
        if !self.stops.is_empty() {
            writeln!(f)?;
            for stop in &self.stops {
                writeln!(f, "- {stop}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for DriverProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Cycle hours remaining: {:.2}",
            self.cycle_hours_remaining
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))
    }
}

impl Trip {
    /// Compact one-entry form used in trip lists.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} → {} → {} ({})",
            self.id,
            self.current_location,
            self.pickup_location,
            self.dropoff_location,
            self.status
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Driver: {}, {} day(s), {:.1} mi, {:.2}h driving",
            self.driver_id,
            self.days.len(),
            self.distance_miles,
            self.total_driving_hours()
        )?;
        writeln!(f)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trip {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Driver: {}", self.driver_id)?;
        writeln!(
            f,
            "- Route: {} → {} → {}",
            self.current_location, self.pickup_location, self.dropoff_location
        )?;
        writeln!(
            f,
            "- Distance: {:.1} mi, duration {:.2}h, cycle used {:.2}h",
            self.distance_miles, self.duration_hours, self.cycle_used
        )?;
        if let Some(path) = &self.log_path {
            writeln!(f, "- Log: {path}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if self.days.is_empty() {
            writeln!(f, "\nNo days planned.")
        } else {
            writeln!(f, "\n## Days")?;
            writeln!(f)?;
            for day in &self.days {
                write!(f, "{day}")?;
            }
            writeln!(
                f,
                "Total: {:.2}h driving, {:.2}h on duty",
                self.total_driving_hours(),
                self.total_on_duty_hours()
            )
        }
    }
}
