//! # Pane Engine
//!
//! Draggable windows with buttons and labels, z-ordering and hit-testing, drawn
//! through a pluggable rendering/input backend.

pub mod backend;
pub mod color;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod widget;
pub mod window;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{Rect, Vec2};
pub use input::InputState;
pub use widget::{Alignment, Anchor, Button, ButtonConfig, ButtonState, Label, LabelConfig, Widget};
pub use window::{UiEvent, Window, WindowConfig, WindowId, WindowManager, TITLE_BAR_HEIGHT};
