//! Leaf widgets hosted by windows

mod button;
mod label;

pub use button::{Button, ButtonConfig, ButtonState};
pub use label::{Alignment, Label, LabelConfig};

use crate::backend::Renderer;
use crate::geometry::{Rect, Vec2};
use crate::input::InputState;

/// Corner of the parent window a widget's offset is measured from.
///
/// The offset always points inwards: `TopRight` with an offset of `(4, 4)` places the widget's
/// top-right corner 4 units left of and 4 units below the parent's top-right corner.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// Screen rectangle of a widget of `size` placed at `offset` inside `parent`.
    pub fn resolve(self, parent: Rect, offset: Vec2, size: Vec2) -> Rect {
        let x = match self {
            Anchor::TopLeft | Anchor::BottomLeft => parent.x + offset.x,
            Anchor::TopRight | Anchor::BottomRight => parent.right() - size.x - offset.x,
        };
        let y = match self {
            Anchor::TopLeft | Anchor::TopRight => parent.y + offset.y,
            Anchor::BottomLeft | Anchor::BottomRight => parent.bottom() - size.y - offset.y,
        };

        Rect::new(x, y, size.x, size.y)
    }
}

/// A child widget of a window.
#[derive(Clone, Debug)]
pub enum Widget {
    Button(Button),
    Label(Label),
}

impl Widget {
    /// Feed this tick's pointer state to the widget. Returns `true` if it was clicked.
    pub fn update(&mut self, parent: Rect, input: &InputState) -> bool {
        match self {
            Widget::Button(button) => button.update(parent, input),
            Widget::Label(_) => false,
        }
    }

    /// Drop any pointer-derived state (hover, clicked).
    pub fn reset(&mut self) {
        if let Widget::Button(button) = self {
            button.reset();
        }
    }

    pub fn draw(&self, parent: Rect, renderer: &mut dyn Renderer) {
        match self {
            Widget::Button(button) => button.draw(parent, renderer),
            Widget::Label(label) => label.draw(parent.position(), renderer),
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Widget::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Widget::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Widget::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            Widget::Label(label) => Some(label),
            _ => None,
        }
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Widget::Button(button)
    }
}

impl From<Label> for Widget {
    fn from(label: Label) -> Self {
        Widget::Label(label)
    }
}
