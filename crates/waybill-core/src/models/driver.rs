//! Driver profile model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A driver and their remaining duty-cycle budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverProfile {
    /// Unique identifier for the driver
    pub id: u64,

    /// Display name, used as the driver label on log documents
    pub name: String,

    /// Hours left in the current 70-hour cycle
    pub cycle_hours_remaining: f64,

    /// Timestamp when the profile was created (UTC)
    pub created_at: Timestamp,
}
