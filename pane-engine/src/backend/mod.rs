//! Rendering & input backends
//!
//! The toolkit never talks to a graphics library directly. Everything it needs from the outside
//! world goes through [`Renderer`] (draw calls and text measurement) and [`InputSource`] (pointer
//! state for the current tick).

pub mod framebuffer;
pub mod recording;
pub mod scripted;

#[cfg(feature = "macroquad")]
pub mod macroquad;

use crate::color::Color;
use crate::geometry::{Rect, Vec2};
use crate::input::InputState;

pub use framebuffer::Framebuffer;
pub use recording::{DrawCommand, RecordingRenderer};
pub use scripted::ScriptedInput;

/// Draw-call sink for one frame.
///
/// Coordinates are screen units with the origin in the top-left corner. Text positions name the
/// top-left corner of the text box, not the baseline.
pub trait Renderer {
    /// Width of `text` when drawn at `font_size`.
    ///
    /// # Implementation Suggestions
    /// Labels and buttons call this every frame to align their text, so backends that rasterize
    /// glyphs should answer from cached font metrics rather than laying the text out.
    fn measure_text(&self, text: &str, font_size: u32) -> f32;

    /// Fill the whole target with `color`.
    fn clear(&mut self, color: Color);

    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: u32, color: Color);
}

/// Source of pointer state, polled once per tick.
pub trait InputSource {
    /// Pointer position and primary-button edges for this tick.
    fn poll(&mut self) -> InputState;
}
