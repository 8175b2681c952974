//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{DriverProfile, Trip, TripOutcome};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<DriverProfile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created driver with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a freshly planned trip together with the
/// driver's remaining cycle budget.
pub struct PlannedTrip(pub TripOutcome);

impl fmt::Display for PlannedTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Planned trip with ID: {}", self.0.trip.id)?;
        writeln!(
            f,
            "Cycle hours remaining: {:.2}",
            self.0.remaining_hours
        )?;
        writeln!(f)?;
        write!(f, "{}", self.0.trip)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        self.resource.fmt_summary(f)
    }
}
