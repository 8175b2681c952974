//! Duty log rendering.
//!
//! Rendering is split into a pure layout step and an impure paint step:
//!
//! ```text
//! [DayPlan] ──render()──▶ LogDocument ──paint(Canvas)──▶ SVG ──write_document()──▶ logs_trip_{id}.svg
//! ```
//!
//! [`render`] never fails and does not re-validate duty limits; each page's
//! segments are laid out left to right as setup (first day), driving, stops,
//! wrap-up (last day).

pub mod canvas;
pub mod document;
pub mod layout;
pub mod sink;
pub mod svg;


pub use canvas::{paint, Canvas};
pub use document::{file_name_for, render, LogDocument};
pub use layout::{layout_day, PageLayout, Segment, SegmentCategory};
pub use sink::write_document;
pub use svg::{to_svg, SvgCanvas};
