//! Unified 2D rendering interface.
//!
//! Game code only talks to [`Renderer2d`]; the CPU implementation writes into
//! a raw RGBA frame, which works identically for the windowed `pixels` buffer
//! and for headless in-memory surfaces.

use crate::font::{glyph_advance_x, glyph_rows, line_advance_y, GLYPH_W};
use crate::surface::SurfaceSize;
use crate::ui::Rect;

pub type Color = [u8; 4];

pub const DEFAULT_TEXT_SCALE: u32 = 2;

pub trait Renderer2d {
    fn size(&self) -> SurfaceSize;

    /// Opaque fill, clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32);

    fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Color) {
        self.draw_text_scaled(x, y, text, color, DEFAULT_TEXT_SCALE);
    }

    fn clear(&mut self, color: Color) {
        let s = self.size();
        self.fill_rect(Rect::from_size(s.width, s.height), color);
    }
}

/// CPU renderer that draws into an RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.size.width || y >= self.size.height {
            return;
        }
        let idx = ((y * self.size.width + x) * 4) as usize;
        if idx + 4 <= self.frame.len() {
            self.frame[idx..idx + 4].copy_from_slice(&color);
        }
    }

    fn draw_char(&mut self, x: u32, y: u32, ch: char, color: Color, scale: u32) {
        let rows = glyph_rows(ch);
        for (row, bits) in rows.into_iter().enumerate() {
            let py0 = y.saturating_add((row as u32).saturating_mul(scale));
            for col in 0..GLYPH_W {
                let mask = 1u8 << (GLYPH_W - 1 - col);
                if (bits & mask) == 0 {
                    continue;
                }
                let px0 = x.saturating_add(col.saturating_mul(scale));
                for dy in 0..scale {
                    for dx in 0..scale {
                        self.set_pixel(px0 + dx, py0 + dy, color);
                    }
                }
            }
        }
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let width = self.size.width;
        let height = self.size.height;

        let x0 = rect.x.min(width);
        let y0 = rect.y.min(height);
        let x1 = rect.x.saturating_add(rect.w).min(width);
        let y1 = rect.y.saturating_add(rect.h).min(height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = (width as usize) * 4;
        let expected_len = stride.saturating_mul(height as usize);
        if expected_len == 0 || self.frame.len() < expected_len {
            return;
        }

        let row_bytes = ((x1 - x0) as usize) * 4;
        for y in y0..y1 {
            let row_start = (y as usize) * stride + (x0 as usize) * 4;
            let row = &mut self.frame[row_start..row_start + row_bytes];
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
    }

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        let scale = scale.max(1);
        let adv_x = glyph_advance_x(scale);
        let adv_y = line_advance_y(scale);

        let mut cursor_x = x;
        let mut cursor_y = y;

        for ch in text.chars() {
            match ch {
                '\n' => {
                    cursor_x = x;
                    cursor_y = cursor_y.saturating_add(adv_y);
                    if cursor_y >= self.size.height {
                        break;
                    }
                    continue;
                }
                ' ' => {
                    cursor_x = cursor_x.saturating_add(adv_x);
                    if cursor_x >= self.size.width {
                        break;
                    }
                    continue;
                }
                _ => {}
            }

            self.draw_char(cursor_x, cursor_y, ch, color, scale);
            cursor_x = cursor_x.saturating_add(adv_x);
            if cursor_x >= self.size.width {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RgbaBufferSurface;

    const WHITE: Color = [255, 255, 255, 255];
    const RED: Color = [255, 0, 0, 255];

    #[test]
    fn fill_rect_writes_only_inside_the_rect() {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(8, 8));
        {
            let size = surface.size();
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.fill_rect(Rect::new(2, 2, 3, 3), RED);
        }
        assert_eq!(surface.pixel(2, 2), Some(RED));
        assert_eq!(surface.pixel(4, 4), Some(RED));
        assert_eq!(surface.pixel(5, 5), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(1, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn fill_rect_clips_to_surface() {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(4, 4));
        {
            let size = surface.size();
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.fill_rect(Rect::new(3, 3, 10, 10), WHITE);
            gfx.fill_rect(Rect::new(9, 9, 2, 2), RED);
        }
        assert_eq!(surface.pixel(3, 3), Some(WHITE));
        assert_eq!(surface.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn clear_covers_the_whole_surface() {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(3, 2));
        {
            let size = surface.size();
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.clear(RED);
        }
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(surface.pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn draw_text_marks_glyph_pixels() {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(32, 16));
        {
            let size = surface.size();
            let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
            gfx.draw_text_scaled(0, 0, "L", WHITE, 1);
        }
        // 'L' lights its left column on every row.
        for row in 0..5 {
            assert_eq!(surface.pixel(0, row), Some(WHITE));
        }
        // Top-right of the glyph box stays empty for 'L'.
        assert_eq!(surface.pixel(2, 0), Some([0, 0, 0, 0]));
    }
}
