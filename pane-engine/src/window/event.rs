use super::WindowId;

/// Something that happened during a [`WindowManager::update`](super::WindowManager::update) tick.
///
/// The manager returns these instead of invoking callbacks; the caller decides what to do with
/// them.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum UiEvent {
    /// A button (other than a window's own close button) was pressed.
    ButtonClicked { window: WindowId, widget: String },

    /// The window's close button was pressed and the window is now hidden.
    WindowClosed(WindowId),

    /// The window moved to the top of the z-order.
    WindowRaised(WindowId),

    /// A title bar drag began.
    DragStarted(WindowId),

    /// A title bar drag ended on pointer release.
    DragEnded(WindowId),
}

impl UiEvent {
    pub fn window(&self) -> WindowId {
        match self {
            UiEvent::ButtonClicked { window, .. } => *window,
            UiEvent::WindowClosed(window)
            | UiEvent::WindowRaised(window)
            | UiEvent::DragStarted(window)
            | UiEvent::DragEnded(window) => *window,
        }
    }

    /// `true` for a click on `widget` in `window`.
    pub fn is_click(&self, window: WindowId, widget: &str) -> bool {
        matches!(self, UiEvent::ButtonClicked { window: w, widget: name } if *w == window && name == widget)
    }
}
