use crate::geometry::Vec2;

/// Pointer snapshot for a single tick.
///
/// `pressed` and `released` are edge-triggered: they are only set on the tick where the primary
/// button changed state. `down` is level-triggered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputState {
    pub pointer: Vec2,
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer: Vec2::new(0.0, 0.0),
            pressed: false,
            released: false,
            down: false,
        }
    }
}

impl InputState {
    /// Pointer resting at `pointer` with the button up.
    pub fn hover(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }

    /// Derive the edge flags from the previous tick's button state.
    pub fn from_transition(pointer: Vec2, was_down: bool, down: bool) -> Self {
        Self {
            pointer,
            pressed: down && !was_down,
            released: !down && was_down,
            down,
        }
    }
}
