//! Headless renderer that records draw calls

use super::Renderer;
use crate::color::Color;
use crate::geometry::{Rect, Vec2};

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        font_size: u32,
        color: Color,
    },
}

/// Renderer that draws nothing and keeps a log of every call instead.
///
/// Text is measured with a fixed advance of half the font size per character.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log, e.g. between frames.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded text draws, in order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
    }

    /// Recorded rectangle draws, in order.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn measure_text(&self, text: &str, font_size: u32) -> f32 {
        text.chars().count() as f32 * font_size as f32 * 0.5
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: u32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font_size,
            color,
        });
    }
}
