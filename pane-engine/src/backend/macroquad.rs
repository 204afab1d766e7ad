//! Live desktop backend on top of macroquad
//!
//! Both types talk to the window macroquad owns, so they must only be used from inside the
//! macroquad main future.

use super::{InputSource, Renderer};
use crate::color::Color;
use crate::geometry::{Rect, Vec2};
use crate::input::InputState;
use ::macroquad::prelude as mq;

/// Draws into the current macroquad window.
#[derive(Debug, Default)]
pub struct MacroquadRenderer;

/// Reads the pointer of the current macroquad window.
#[derive(Debug, Default)]
pub struct MacroquadInput;

#[inline]
fn to_mq(color: Color) -> mq::Color {
    mq::Color::from_rgba(color.r, color.g, color.b, color.a)
}

#[inline]
fn font_size_u16(font_size: u32) -> u16 {
    font_size.min(u16::MAX as u32) as u16
}

impl Renderer for MacroquadRenderer {
    fn measure_text(&self, text: &str, font_size: u32) -> f32 {
        mq::measure_text(text, None, font_size_u16(font_size), 1.0).width
    }

    fn clear(&mut self, color: Color) {
        mq::clear_background(to_mq(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        mq::draw_rectangle(rect.x, rect.y, rect.width, rect.height, to_mq(color));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: u32, color: Color) {
        // macroquad positions text by its baseline
        let dims = mq::measure_text(text, None, font_size_u16(font_size), 1.0);
        mq::draw_text(text, position.x, position.y + dims.offset_y, font_size as f32, to_mq(color));
    }
}

impl InputSource for MacroquadInput {
    fn poll(&mut self) -> InputState {
        let (x, y) = mq::mouse_position();

        InputState {
            pointer: Vec2::new(x, y),
            pressed: mq::is_mouse_button_pressed(mq::MouseButton::Left),
            released: mq::is_mouse_button_released(mq::MouseButton::Left),
            down: mq::is_mouse_button_down(mq::MouseButton::Left),
        }
    }
}
