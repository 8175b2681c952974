//! The finalized log document.

use serde::{Deserialize, Serialize};

use super::layout::{layout_day, PageLayout};
use crate::models::DayPlan;

/// One page per planned day, in plan order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogDocument {
    trip_id: u64,
    driver_label: String,
    pages: Vec<PageLayout>,
}

impl LogDocument {
    pub fn trip_id(&self) -> u64 {
        self.trip_id
    }

    pub fn driver_label(&self) -> &str {
        &self.driver_label
    }

    pub fn pages(&self) -> &[PageLayout] {
        &self.pages
    }

    /// File name the document is stored under.
    pub fn file_name(&self) -> String {
        file_name_for(self.trip_id)
    }
}

/// File name for the log document of `trip_id`.
pub fn file_name_for(trip_id: u64) -> String {
    format!("logs_trip_{trip_id}.svg")
}

/// Builds the log document for a plan. Does not re-check duty limits.
pub fn render(trip_id: u64, driver_label: &str, plan: &[DayPlan]) -> LogDocument {
    let last = plan.len().saturating_sub(1);
    let pages = plan
        .iter()
        .enumerate()
        .map(|(index, day)| layout_day(trip_id, day, index == 0, index == last))
        .collect();

    LogDocument {
        trip_id,
        driver_label: driver_label.to_string(),
        pages,
    }
}
