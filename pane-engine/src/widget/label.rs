use crate::backend::Renderer;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Vec2;

/// Horizontal placement of a label's text inside its width.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug)]
pub struct LabelConfig {
    pub text: String,
    /// Box the text is aligned within. Zero is allowed.
    pub width: f32,
    /// Offset from the parent window's top-left corner.
    pub offset: Vec2,
    pub color: Color,
    pub font_size: u32,
    pub alignment: Alignment,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            width: 0.0,
            offset: Vec2::new(0.0, 0.0),
            color: Color::BLACK,
            font_size: 20,
            alignment: Alignment::Left,
        }
    }
}

/// Static, non-interactive text.
#[derive(Clone, Debug)]
pub struct Label {
    text: String,
    width: f32,
    offset: Vec2,
    color: Color,
    font_size: u32,
    alignment: Alignment,
}

impl Label {
    pub fn new(config: LabelConfig) -> Result<Self> {
        if !(config.width >= 0.0) {
            return Err(Error::NegativeWidth(config.width));
        }
        if config.font_size == 0 {
            return Err(Error::InvalidFontSize);
        }

        Ok(Self {
            text: config.text,
            width: config.width,
            offset: config.offset,
            color: config.color,
            font_size: config.font_size,
            alignment: config.alignment,
        })
    }

    /// Top-left corner of the text for a parent at `origin`, given the measured text width.
    pub fn text_position(&self, origin: Vec2, text_width: f32) -> Vec2 {
        let position = origin + self.offset;
        let x = match self.alignment {
            Alignment::Left => position.x,
            Alignment::Center => position.x + (self.width - text_width) / 2.0,
            Alignment::Right => position.x + self.width - text_width,
        };

        Vec2::new(x, position.y)
    }

    pub fn draw(&self, origin: Vec2, renderer: &mut dyn Renderer) {
        let text_width = renderer.measure_text(&self.text, self.font_size);
        let position = self.text_position(origin, text_width);
        renderer.draw_text(&self.text, position, self.font_size, self.color);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
