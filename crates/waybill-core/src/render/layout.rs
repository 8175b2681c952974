//! Pure segment layout for duty log pages.

use serde::{Deserialize, Serialize};

use crate::models::DayPlan;

/// Left edge of the 24-hour timeline, in pixels.
pub const TIMELINE_START_X: i32 = 50;
/// Right edge (exclusive) of the 24-hour timeline, in pixels.
pub const TIMELINE_END_X: i32 = 650;
/// Spacing between minor grid ticks.
pub const TICK_SPACING: i32 = 6;
/// Width units per driving hour; each unit is one tick wide.
pub const UNITS_PER_HOUR: f64 = 4.0;
/// Width of the setup and wrap-up blocks.
pub const OVERHEAD_BLOCK_WIDTH: i32 = 24;
/// Width of one stop block.
pub const STOP_BLOCK_WIDTH: i32 = 2 * TICK_SPACING;

/// What a segment on the timeline represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentCategory {
    /// Off-duty / pre-trip setup block on the first day
    OffDuty,
    Driving,
    Stop,
    /// Post-trip wrap-up block on the last day
    WrapUp,
}

impl SegmentCategory {
    /// Fill color as RGB. Wrap-up shares the off-duty color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SegmentCategory::OffDuty | SegmentCategory::WrapUp => (0, 0, 255),
            SegmentCategory::Driving => (0, 255, 0),
            SegmentCategory::Stop => (255, 255, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentCategory::OffDuty => "off_duty",
            SegmentCategory::Driving => "driving",
            SegmentCategory::Stop => "stop",
            SegmentCategory::WrapUp => "wrap_up",
        }
    }
}

/// A colored block on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub category: SegmentCategory,
    pub x_offset: i32,
    pub width: i32,
}

/// Layout of one day-page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub day_number: u32,
    pub header: String,
    /// Segments in chronological, left-to-right order
    pub segments: Vec<Segment>,
}

impl PageLayout {
    /// Segments of a single category, in order.
    pub fn segments_of(&self, category: SegmentCategory) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(move |segment| segment.category == category)
    }

    /// Right edge of the last segment.
    pub fn end_x(&self) -> i32 {
        self.segments
            .last()
            .map_or(TIMELINE_START_X, |s| s.x_offset + s.width)
    }
}

/// Positions of the minor grid ticks, shared by every page.
pub fn grid_ticks() -> impl Iterator<Item = i32> {
    (TIMELINE_START_X..TIMELINE_END_X).step_by(TICK_SPACING as usize)
}

/// Pixel width of the driving block for `hours`, truncated to whole units.
pub fn driving_width(hours: f64) -> i32 {
    (hours * UNITS_PER_HOUR).floor() as i32 * TICK_SPACING
}

/// Lays out a single day.
///
/// Order is fixed: setup (first day only), driving, one block per stop,
/// wrap-up (last day only).
pub fn layout_day(
    trip_id: u64,
    day: &DayPlan,
    is_first: bool,
    is_last: bool,
) -> PageLayout {
    let mut segments = Vec::with_capacity(day.stops.len() + 3);
    let mut x = TIMELINE_START_X;
    let mut push = |category, width| {
        segments.push(Segment {
            category,
            x_offset: x,
            width,
        });
        x += width;
    };

    if is_first {
        push(SegmentCategory::OffDuty, OVERHEAD_BLOCK_WIDTH);
    }
    push(SegmentCategory::Driving, driving_width(day.driving_hours));
    for _ in &day.stops {
        push(SegmentCategory::Stop, STOP_BLOCK_WIDTH);
    }
    if is_last {
        push(SegmentCategory::WrapUp, OVERHEAD_BLOCK_WIDTH);
    }

    PageLayout {
        day_number: day.day_number,
        header: format!("Day {} - Trip ID: {trip_id}", day.day_number),
        segments,
    }
}
