use ratatui::{buffer::Buffer, layout::Rect, style::Color, style::Style};

use crate::geometry::Size;

/// A surface that can be cleared and filled with solid rectangles.
///
/// Coordinates are in window cells relative to the top-left corner of the
/// surface and may lie partly or fully outside of it.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: i32, y: i32, size: Size, color: Color);
}

/// Draws into a region of a ratatui buffer, clipping at its edges.
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buf.area);
        BufferCanvas { buf, area }
    }
}

impl Canvas for BufferCanvas<'_> {
    fn clear(&mut self, color: Color) {
        self.buf.set_style(self.area, Style::default().bg(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, size: Size, color: Color) {
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = (x + size.width as i32).min(self.area.width as i32);
        let y_end = (y + size.height as i32).min(self.area.height as i32);

        for py in y_start..y_end {
            for px in x_start..x_end {
                self.buf[(self.area.x + px as u16, self.area.y + py as u16)]
                    .set_symbol(" ")
                    .set_bg(color);
            }
        }
    }
}
