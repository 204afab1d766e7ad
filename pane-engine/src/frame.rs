//! One iteration of the input → update → draw loop

use crate::backend::{InputSource, Renderer};
use crate::color::Color;
use crate::window::{UiEvent, WindowManager};

/// Poll input, route it through `manager`, then redraw everything over `background`.
///
/// Returns the events produced by this tick for the caller to act on.
pub fn step(
    manager: &mut WindowManager,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    background: Color,
) -> Vec<UiEvent> {
    let state = input.poll();
    let events = manager.update(&state);

    renderer.clear(background);
    manager.draw(renderer);

    events
}
