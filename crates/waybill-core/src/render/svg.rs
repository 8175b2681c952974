//! SVG drawing backend built on plotters.

use plotters::{coord::Shift, prelude::*};

use super::{
    canvas::{paint, Canvas, PAGE_HEIGHT, PAGE_WIDTH},
    document::LogDocument,
    layout::SegmentCategory,
};
use crate::error::{Result, WaybillError};

/// Stacks day-pages vertically in a single SVG image.
pub struct SvgCanvas<'a> {
    area: DrawingArea<SVGBackend<'a>, Shift>,
    page_top: Option<i32>,
    pages_drawn: i32,
}

impl<'a> SvgCanvas<'a> {
    /// Creates a canvas for `page_count` pages writing into `buf`.
    pub fn new(buf: &'a mut String, page_count: usize) -> Result<Self> {
        let height = PAGE_HEIGHT * (page_count.max(1) as i32);
        let area = SVGBackend::with_string(buf, (PAGE_WIDTH as u32, height as u32))
            .into_drawing_area();
        area.fill(&WHITE).map_err(render_error)?;

        Ok(Self {
            area,
            page_top: None,
            pages_drawn: 0,
        })
    }

    fn offset(&self, y: i32) -> Result<i32> {
        self.page_top
            .map(|top| top + y)
            .ok_or_else(|| WaybillError::Render {
                message: "drawing before begin_page".to_string(),
            })
    }
}

impl Canvas for SvgCanvas<'_> {
    fn begin_page(&mut self, _day_number: u32) -> Result<()> {
        self.page_top = Some(self.pages_drawn * PAGE_HEIGHT);
        self.pages_drawn += 1;
        Ok(())
    }

    fn text(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        let y = self.offset(y)?;
        self.area
            .draw(&Text::new(
                text.to_string(),
                (x, y),
                ("sans-serif", 12).into_font(),
            ))
            .map_err(render_error)
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32)) -> Result<()> {
        let from = (from.0, self.offset(from.1)?);
        let to = (to.0, self.offset(to.1)?);
        self.area
            .draw(&PathElement::new(vec![from, to], BLACK.stroke_width(1)))
            .map_err(render_error)
    }

    fn rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        category: SegmentCategory,
    ) -> Result<()> {
        if width <= 0 {
            return Ok(());
        }
        let y = self.offset(y)?;
        let (r, g, b) = category.rgb();
        self.area
            .draw(&Rectangle::new(
                [(x, y), (x + width, y + height)],
                RGBColor(r, g, b).filled(),
            ))
            .map_err(render_error)
    }

    fn finish(&mut self) -> Result<()> {
        self.area.present().map_err(render_error)
    }
}

/// Renders `document` to an SVG string.
pub fn to_svg(document: &LogDocument) -> Result<String> {
    let mut buf = String::new();
    {
        let mut canvas = SvgCanvas::new(&mut buf, document.pages().len())?;
        paint(document, &mut canvas)?;
    }
    Ok(buf)
}

fn render_error<E: std::fmt::Display>(error: E) -> WaybillError {
    WaybillError::Render {
        message: error.to_string(),
    }
}
