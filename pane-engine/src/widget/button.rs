use super::Anchor;
use crate::backend::Renderer;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::{Rect, Vec2};
use crate::input::InputState;

/// Visual interaction state of a [`Button`].
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub enum ButtonState {
    #[default]
    Normal,
    Hover,
    Clicked,
}

/// Set of attributes a [`Button`] is built from.
#[derive(Clone, Debug)]
pub struct ButtonConfig {
    /// Label drawn centred on the button. Must not be empty.
    pub text: String,
    pub width: f32,
    pub height: f32,
    /// Offset from `anchor`, pointing into the parent window.
    pub offset: Vec2,
    pub anchor: Anchor,
    pub text_color: Color,
    pub normal_color: Color,
    pub hover_color: Color,
    pub clicked_color: Color,
    pub font_size: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            width: 200.0,
            height: 40.0,
            offset: Vec2::new(0.0, 0.0),
            anchor: Anchor::TopLeft,
            text_color: Color::BLACK,
            normal_color: Color::WHITE,
            hover_color: Color::GRAY,
            clicked_color: Color::RED,
            font_size: 20,
        }
    }
}

/// Clickable rectangle with normal, hover and clicked looks.
#[derive(Clone, Debug)]
pub struct Button {
    text: String,
    width: f32,
    height: f32,
    offset: Vec2,
    anchor: Anchor,
    text_color: Color,
    normal_color: Color,
    hover_color: Color,
    clicked_color: Color,
    font_size: u32,
    state: ButtonState,
}

impl Button {
    pub fn new(config: ButtonConfig) -> Result<Self> {
        if !(config.width > 0.0) {
            return Err(Error::InvalidWidth(config.width));
        }
        if !(config.height > 0.0) {
            return Err(Error::InvalidHeight(config.height));
        }
        if config.text.is_empty() {
            return Err(Error::EmptyText);
        }
        if config.font_size == 0 {
            return Err(Error::InvalidFontSize);
        }

        Ok(Self {
            text: config.text,
            width: config.width,
            height: config.height,
            offset: config.offset,
            anchor: config.anchor,
            text_color: config.text_color,
            normal_color: config.normal_color,
            hover_color: config.hover_color,
            clicked_color: config.clicked_color,
            font_size: config.font_size,
            state: ButtonState::Normal,
        })
    }

    /// Screen rectangle of the button inside `parent`. Used for both drawing and hit-testing.
    pub fn bounds(&self, parent: Rect) -> Rect {
        self.anchor.resolve(parent, self.offset, Vec2::new(self.width, self.height))
    }

    /// Advance the state machine for one tick. Returns `true` exactly on the tick the button is
    /// pressed while under the pointer.
    pub fn update(&mut self, parent: Rect, input: &InputState) -> bool {
        if !self.bounds(parent).contains(input.pointer) {
            self.state = ButtonState::Normal;
            return false;
        }

        if input.pressed {
            self.state = ButtonState::Clicked;
            true
        } else {
            self.state = ButtonState::Hover;
            false
        }
    }

    pub fn reset(&mut self) {
        self.state = ButtonState::Normal;
    }

    pub fn draw(&self, parent: Rect, renderer: &mut dyn Renderer) {
        let bounds = self.bounds(parent);
        renderer.draw_rect(bounds, self.current_color());

        let text_width = renderer.measure_text(&self.text, self.font_size);
        let text_x = bounds.x + (bounds.width - text_width) / 2.0;
        let text_y = bounds.y + (bounds.height - self.font_size as f32) / 2.0;
        renderer.draw_text(&self.text, Vec2::new(text_x, text_y), self.font_size, self.text_color);
    }

    pub fn current_color(&self) -> Color {
        match self.state {
            ButtonState::Normal => self.normal_color,
            ButtonState::Hover => self.hover_color,
            ButtonState::Clicked => self.clicked_color,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn set_state(&mut self, state: ButtonState) {
        self.state = state;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        self.text = text;
        Ok(())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: u32) -> Result<()> {
        if font_size == 0 {
            return Err(Error::InvalidFontSize);
        }

        self.font_size = font_size;
        Ok(())
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) -> Result<()> {
        self.text_color = non_default(color)?;
        Ok(())
    }

    pub fn set_normal_color(&mut self, color: Color) -> Result<()> {
        self.normal_color = non_default(color)?;
        Ok(())
    }

    pub fn set_hover_color(&mut self, color: Color) -> Result<()> {
        self.hover_color = non_default(color)?;
        Ok(())
    }

    pub fn set_clicked_color(&mut self, color: Color) -> Result<()> {
        self.clicked_color = non_default(color)?;
        Ok(())
    }
}

fn non_default(color: Color) -> Result<Color> {
    if color.is_default() {
        Err(Error::DefaultColor)
    } else {
        Ok(color)
    }
}
