//! Software renderer over an in-memory RGB framebuffer

use super::Renderer;
use crate::color::Color;
use crate::geometry::{Rect, Vec2};
use anyhow::Context;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_8X13, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Row-major RGB framebuffer that can be dumped as a binary PPM.
///
/// Text is drawn with the monospace fonts bundled with `embedded-graphics`; the requested font size
/// picks the closest font by glyph height. Alpha is not blended: fully transparent colors are
/// skipped, everything else is drawn opaque.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb888::new(0, 0, 0); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let px = self.pixels[y as usize * self.width as usize + x as usize];
        Some(Color::rgb(px.r(), px.g(), px.b()))
    }

    /// Write the buffer to `path` as a binary (P6) PPM image.
    pub fn write_ppm(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut out = BufWriter::new(file);

        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        for px in &self.pixels {
            out.write_all(&[px.r(), px.g(), px.b()])?;
        }
        out.flush()?;

        Ok(())
    }

    fn font_for(font_size: u32) -> &'static MonoFont<'static> {
        match font_size {
            0..=11 => &FONT_6X10,
            12..=16 => &FONT_8X13,
            _ => &FONT_10X20,
        }
    }

    #[inline]
    fn to_rgb(color: Color) -> Rgb888 {
        Rgb888::new(color.r, color.g, color.b)
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                self.pixels[y as usize * self.width as usize + x as usize] = color;
            }
        }

        Ok(())
    }
}

impl Renderer for Framebuffer {
    fn measure_text(&self, text: &str, font_size: u32) -> f32 {
        let font = Self::font_for(font_size);
        let advance = font.character_size.width + font.character_spacing;
        (text.chars().count() as u32 * advance) as f32
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(Self::to_rgb(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 {
            return;
        }

        let top_left = Point::new(rect.x.round() as i32, rect.y.round() as i32);
        let size = Size::new(rect.width.max(0.0).round() as u32, rect.height.max(0.0).round() as u32);

        _ = Rectangle::new(top_left, size)
            .into_styled(PrimitiveStyle::with_fill(Self::to_rgb(color)))
            .draw(self);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: u32, color: Color) {
        if color.a == 0 {
            return;
        }

        let style = MonoTextStyle::new(Self::font_for(font_size), Self::to_rgb(color));
        let origin = Point::new(position.x.round() as i32, position.y.round() as i32);

        _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_and_fill() {
        let mut fb = Framebuffer::new(8, 8);
        Renderer::clear(&mut fb, Color::WHITE);
        fb.draw_rect(Rect::new(2.0, 2.0, 3.0, 3.0), Color::RED);

        assert_eq!(fb.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(fb.pixel(2, 2), Some(Color::RED));
        assert_eq!(fb.pixel(4, 4), Some(Color::RED));
        assert_eq!(fb.pixel(5, 5), Some(Color::WHITE));
        assert_eq!(fb.pixel(8, 0), None);
    }

    #[test]
    fn test_offscreen_rect_is_clipped() {
        let mut fb = Framebuffer::new(4, 4);
        Renderer::clear(&mut fb, Color::WHITE);
        fb.draw_rect(Rect::new(-10.0, -10.0, 12.0, 12.0), Color::BLACK);

        assert_eq!(fb.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(fb.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(fb.pixel(2, 2), Some(Color::WHITE));
    }

    #[test]
    fn test_transparent_is_skipped() {
        let mut fb = Framebuffer::new(4, 4);
        Renderer::clear(&mut fb, Color::WHITE);
        fb.draw_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::default());

        assert_eq!(fb.pixel(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_measure_text_uses_font_advance() {
        let fb = Framebuffer::new(1, 1);
        assert!((fb.measure_text("abc", 20) - 30.0).abs() < 0.001);
        assert!((fb.measure_text("abc", 10) - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_text_touches_pixels() {
        let mut fb = Framebuffer::new(40, 24);
        Renderer::clear(&mut fb, Color::WHITE);
        fb.draw_text("X", Vec2::new(0.0, 0.0), 20, Color::BLACK);

        let inked = (0..10)
            .flat_map(|x| (0..20).map(move |y| (x, y)))
            .any(|(x, y)| fb.pixel(x, y) == Some(Color::BLACK));
        assert!(inked);
    }

    #[test]
    fn test_write_ppm() {
        let mut fb = Framebuffer::new(2, 1);
        Renderer::clear(&mut fb, Color::rgb(1, 2, 3));

        let path = std::env::temp_dir().join(format!("pane-fb-{}.ppm", std::process::id()));
        fb.write_ppm(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        _ = std::fs::remove_file(&path);

        assert!(bytes.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(&bytes[bytes.len() - 6..], &[1, 2, 3, 1, 2, 3]);
    }
}
