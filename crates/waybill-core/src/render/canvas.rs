//! Painting a [`LogDocument`] onto a drawing backend.

use super::{
    document::LogDocument,
    layout::{grid_ticks, SegmentCategory, TIMELINE_START_X},
};
use crate::error::Result;

/// Height of one day-page band.
pub const PAGE_HEIGHT: i32 = 160;
/// Width of every page.
pub const PAGE_WIDTH: i32 = 700;
/// Baseline of the page header.
pub const HEADER_Y: i32 = 30;
/// Top of the timeline band.
pub const TIMELINE_TOP: i32 = 60;
/// Height of the timeline band.
pub const TIMELINE_HEIGHT: i32 = 50;

/// A drawing surface. Coordinates are page-relative; the backend decides
/// where each page lives.
pub trait Canvas {
    /// Starts a new page for `day_number`.
    fn begin_page(&mut self, day_number: u32) -> Result<()>;

    fn text(&mut self, x: i32, y: i32, text: &str) -> Result<()>;

    fn line(&mut self, from: (i32, i32), to: (i32, i32)) -> Result<()>;

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, category: SegmentCategory)
        -> Result<()>;

    /// Flushes the surface. No drawing is allowed afterwards.
    fn finish(&mut self) -> Result<()>;
}

/// Paints every page of `document`, one backend call per shape.
pub fn paint<C: Canvas + ?Sized>(document: &LogDocument, canvas: &mut C) -> Result<()> {
    for page in document.pages() {
        canvas.begin_page(page.day_number)?;
        canvas.text(TIMELINE_START_X, HEADER_Y, &page.header)?;
        canvas.text(
            TIMELINE_START_X,
            HEADER_Y + 16,
            &format!("Driver: {}", document.driver_label()),
        )?;

        for x in grid_ticks() {
            canvas.line((x, TIMELINE_TOP), (x, TIMELINE_TOP + TIMELINE_HEIGHT))?;
        }

        for segment in &page.segments {
            canvas.rect(
                segment.x_offset,
                TIMELINE_TOP,
                segment.width,
                TIMELINE_HEIGHT,
                segment.category,
            )?;
        }
    }
    canvas.finish()
}
