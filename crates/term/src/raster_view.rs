//! RasterView: maps a `RasterBuffer` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (cell_w = 2):
//!
//! ```text
//! img 2x2
//! ┌────┐
//! │████│
//! │████│
//! └────┘
//! ```

use crate::core::RasterBuffer;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const TITLE_ROW: u16 = 0;
const FRAME_TOP: u16 = 1;

/// Renders each raster pixel as a colored block.
pub struct RasterView {
    /// Pixel width in terminal columns.
    cell_w: u16,
    glyph: char,
}

impl Default for RasterView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            glyph: '█',
        }
    }
}

impl RasterView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Framebuffer size (width, height) needed to show `raster` in full.
    ///
    /// Sizes beyond the terminal coordinate range saturate; the excess is clipped.
    pub fn frame_size(&self, raster: &RasterBuffer) -> (u16, u16) {
        let (frame_w, frame_h) = self.border_size(raster);
        let title_w = saturate(title(raster).chars().count());
        (frame_w.max(title_w), frame_h.saturating_add(FRAME_TOP))
    }

    fn border_size(&self, raster: &RasterBuffer) -> (u16, u16) {
        let px_w = saturate(raster.width()).saturating_mul(self.cell_w);
        let px_h = saturate(raster.height());
        (px_w.saturating_add(2), px_h.saturating_add(2))
    }

    /// Render into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, raster: &RasterBuffer, fb: &mut FrameBuffer) {
        let (w, h) = self.frame_size(raster);
        fb.resize(w, h);

        let label = CellStyle::default().with_bold(true);
        fb.put_str(0, TITLE_ROW, &title(raster), label);

        let (frame_w, frame_h) = self.border_size(raster);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, 0, FRAME_TOP, frame_w, frame_h, border);

        for (y, row) in raster.rows().enumerate() {
            let Ok(y) = u16::try_from(y) else {
                break;
            };
            for (x, pixel) in row.iter().enumerate() {
                let Ok(x) = u16::try_from(x) else {
                    break;
                };
                let style = CellStyle::new(Rgb::from_pixel(*pixel), Rgb::new(0, 0, 0));
                let px = x.saturating_mul(self.cell_w).saturating_add(1);
                let py = y.saturating_add(FRAME_TOP + 1);
                fb.fill_rect(px, py, self.cell_w, 1, self.glyph, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, raster: &RasterBuffer) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(raster, &mut fb);
        fb
    }
}

fn title(raster: &RasterBuffer) -> String {
    format!("{} {}x{}", raster.name(), raster.height(), raster.width())
}

fn saturate(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pixel;

    #[test]
    fn frame_size_accounts_for_title_and_border() {
        let view = RasterView::default();
        let raster = RasterBuffer::new("img", 2, 3);
        // border: 3*2 + 2 = 8 wide, 2 + 2 = 4 tall, plus title row
        assert_eq!(view.frame_size(&raster), (8, 5));

        let wide_name = RasterBuffer::new("a-long-raster-name", 1, 1);
        assert_eq!(view.frame_size(&wide_name).0, "a-long-raster-name 1x1".len() as u16);
    }

    #[test]
    fn pixel_color_lands_inside_border() {
        let view = RasterView::new(1);
        let mut raster = RasterBuffer::new("c", 1, 2);
        raster.set_pixel(1, 0, Pixel::new(300, 10, -4));

        let fb = view.render(&raster);
        let cell = fb.get(2, 2).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(255, 10, 0));
        assert_eq!(fb.get(0, 2).unwrap().ch, '│');
    }

    #[test]
    fn empty_raster_still_draws_frame() {
        let view = RasterView::default();
        let raster = RasterBuffer::new("e", 0, 0);
        let fb = view.render(&raster);
        assert_eq!(fb.row_text(1), "┌┐   ");
        assert_eq!(fb.row_text(2), "└┘   ");
    }
}
