//! Windows and the window manager
//!
//! A [`Window`] is a rectangle with a draggable title bar that owns a set of named widgets. The
//! [`WindowManager`] owns every window, keeps them in z-order and routes pointer input to the
//! topmost one.

mod event;
mod manager;

pub use event::UiEvent;
pub use manager::WindowManager;

use crate::backend::Renderer;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::{Rect, Vec2};
use crate::input::InputState;
use crate::widget::{Anchor, Button, ButtonConfig, Widget};
use hashbrown::HashMap;
use log::info;

/// Height of the drag handle strip at the top of every window.
pub const TITLE_BAR_HEIGHT: f32 = 40.0;

/// Name reserved for the close button a window creates for itself.
pub const CLOSE_BUTTON: &str = "close";

const CLOSE_BUTTON_SIZE: f32 = 40.0;

/// Handle to a window registered with a [`WindowManager`].
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct WindowId(u32);

impl WindowId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Set of attributes that control how a window is created.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Text drawn in the title bar (no title by default)
    pub title: Option<String>,

    /// Top-left corner in screen units
    pub position: Vec2,

    /// Must be positive
    pub width: f32,

    /// Must be positive
    pub height: f32,

    /// Body color
    pub color: Color,

    /// Title bar strip color; the strip is not drawn when unset
    pub title_bar_color: Option<Color>,

    /// Label of the close button; no close button when unset
    pub close_button: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            position: Vec2::new(100.0, 100.0),
            width: 300.0,
            height: 400.0,
            color: Color::SKY_BLUE,
            title_bar_color: None,
            close_button: None,
        }
    }
}

/// What happened inside a window during one widget update.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct WindowActivity {
    pub clicked: Vec<String>,
    pub closed: bool,
}

pub struct Window {
    title: Option<String>,
    position: Vec2,
    width: f32,
    height: f32,
    color: Color,
    title_bar_color: Option<Color>,
    visible: bool,
    focused: bool,
    drag_offset: Option<Vec2>,
    widgets: HashMap<String, Widget>,
    widget_order: Vec<String>,
    has_close_button: bool,
}

impl Window {
    /// Build a hidden window. Fails if either dimension is not positive or the close button label
    /// is empty.
    pub fn new(config: WindowConfig) -> Result<Self> {
        if !(config.width > 0.0) {
            return Err(Error::InvalidWidth(config.width));
        }
        if !(config.height > 0.0) {
            return Err(Error::InvalidHeight(config.height));
        }

        let mut window = Self {
            title: config.title,
            position: config.position,
            width: config.width,
            height: config.height,
            color: config.color,
            title_bar_color: config.title_bar_color,
            visible: false,
            focused: false,
            drag_offset: None,
            widgets: HashMap::new(),
            widget_order: Vec::new(),
            has_close_button: false,
        };

        if let Some(label) = config.close_button {
            let close = Button::new(ButtonConfig {
                text: label,
                width: CLOSE_BUTTON_SIZE,
                height: CLOSE_BUTTON_SIZE,
                anchor: Anchor::TopRight,
                ..Default::default()
            })?;

            window.add_widget(CLOSE_BUTTON, close)?;
            window.has_close_button = true;
        }

        Ok(window)
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the window. A drag in progress is abandoned.
    pub fn hide(&mut self) {
        self.visible = false;
        self.drag_offset = None;
        self.reset_widgets();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_position_size(self.position, self.size())
    }

    /// The drag handle: the top [`TITLE_BAR_HEIGHT`] units across the full width.
    pub fn title_bar(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, TITLE_BAR_HEIGHT.min(self.height))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// Pointer position relative to the window's top-left corner when the drag began.
    pub fn drag_offset(&self) -> Option<Vec2> {
        self.drag_offset
    }

    pub(crate) fn begin_drag(&mut self, pointer: Vec2) {
        self.drag_offset = Some(pointer - self.position);
    }

    pub(crate) fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    /// Move so the grab point stays under `pointer`. No-op when not dragging.
    pub(crate) fn drag_to(&mut self, pointer: Vec2) {
        if let Some(offset) = self.drag_offset {
            self.position = pointer - offset;
        }
    }

    pub fn has_close_button(&self) -> bool {
        self.has_close_button
    }

    pub fn add_widget(&mut self, name: impl Into<String>, widget: impl Into<Widget>) -> Result<()> {
        let name = name.into();
        if self.widgets.contains_key(&name) {
            return Err(Error::DuplicateWidget(name));
        }

        self.widget_order.push(name.clone());
        self.widgets.insert(name, widget.into());
        Ok(())
    }

    pub fn remove_widget(&mut self, name: &str) -> Result<Widget> {
        let widget = self
            .widgets
            .remove(name)
            .ok_or_else(|| Error::MissingWidget(name.to_string()))?;

        self.widget_order.retain(|n| n != name);
        if name == CLOSE_BUTTON {
            self.has_close_button = false;
        }

        Ok(widget)
    }

    pub fn widget(&self, name: &str) -> Result<&Widget> {
        self.widgets
            .get(name)
            .ok_or_else(|| Error::MissingWidget(name.to_string()))
    }

    pub fn widget_mut(&mut self, name: &str) -> Result<&mut Widget> {
        self.widgets
            .get_mut(name)
            .ok_or_else(|| Error::MissingWidget(name.to_string()))
    }

    pub fn button(&self, name: &str) -> Result<&Button> {
        self.widget(name)?
            .as_button()
            .ok_or_else(|| Error::NotAButton(name.to_string()))
    }

    pub fn button_mut(&mut self, name: &str) -> Result<&mut Button> {
        self.widget_mut(name)?
            .as_button_mut()
            .ok_or_else(|| Error::NotAButton(name.to_string()))
    }

    /// Widgets in insertion order.
    pub fn widgets(&self) -> impl Iterator<Item = (&str, &Widget)> + '_ {
        self.widget_order
            .iter()
            .filter_map(|name| self.widgets.get(name).map(|widget| (name.as_str(), widget)))
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Run one tick of widget interaction. A click on the close button hides the window instead of
    /// being reported as a click.
    pub(crate) fn update_widgets(&mut self, input: &InputState) -> WindowActivity {
        let bounds = self.bounds();
        let mut activity = WindowActivity::default();

        for name in &self.widget_order {
            let Some(widget) = self.widgets.get_mut(name) else {
                continue;
            };

            if widget.update(bounds, input) {
                if self.has_close_button && name == CLOSE_BUTTON {
                    activity.closed = true;
                } else {
                    activity.clicked.push(name.clone());
                }
            }
        }

        if activity.closed {
            info!("Closing window {:?}", self.title.as_deref().unwrap_or("<untitled>"));
            self.hide();
        }

        activity
    }

    pub(crate) fn reset_widgets(&mut self) {
        for widget in self.widgets.values_mut() {
            widget.reset();
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if !self.visible {
            return;
        }

        let bounds = self.bounds();
        renderer.draw_rect(bounds, self.color);

        if let Some(color) = self.title_bar_color {
            renderer.draw_rect(self.title_bar(), color);
        }

        if let Some(title) = &self.title {
            let font_size = 20;
            let y = self.position.y + (TITLE_BAR_HEIGHT - font_size as f32) / 2.0;
            renderer.draw_text(title, Vec2::new(self.position.x + 10.0, y), font_size, Color::BLACK);
        }

        for (_, widget) in self.widgets() {
            widget.draw(bounds, renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, RecordingRenderer};
    use crate::widget::{Label, LabelConfig};

    fn window() -> Window {
        Window::new(WindowConfig {
            close_button: Some("X".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn label() -> Label {
        Label::new(LabelConfig { text: "hello".into(), ..Default::default() }).unwrap()
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let zero_width = WindowConfig { width: 0.0, ..Default::default() };
        assert_eq!(Window::new(zero_width).err(), Some(Error::InvalidWidth(0.0)));

        let negative_height = WindowConfig { height: -10.0, ..Default::default() };
        assert_eq!(Window::new(negative_height).err(), Some(Error::InvalidHeight(-10.0)));
    }

    #[test]
    fn test_rejects_empty_close_label() {
        let config = WindowConfig { close_button: Some(String::new()), ..Default::default() };
        assert_eq!(Window::new(config).err(), Some(Error::EmptyText));
    }

    #[test]
    fn test_show_hide() {
        let mut window = window();
        assert!(!window.is_visible());

        window.show();
        assert!(window.is_visible());

        window.hide();
        assert!(!window.is_visible());
    }

    #[test]
    fn test_geometry() {
        let mut window = window();
        assert_eq!(window.bounds(), Rect::new(100.0, 100.0, 300.0, 400.0));
        assert_eq!(window.title_bar(), Rect::new(100.0, 100.0, 300.0, 40.0));

        window.set_position(Vec2::new(5.0, 6.0));
        assert_eq!(window.title_bar(), Rect::new(5.0, 6.0, 300.0, 40.0));
    }

    #[test]
    fn test_close_button_sits_top_right() {
        let window = window();
        let close = window.button(CLOSE_BUTTON).unwrap();
        assert_eq!(close.anchor(), Anchor::TopRight);
        assert_eq!(close.offset(), Vec2::new(0.0, 0.0));
        assert_eq!(close.bounds(window.bounds()), Rect::new(360.0, 100.0, 40.0, 40.0));
        assert!(window.has_close_button());
    }

    #[test]
    fn test_widget_names_are_unique() {
        let mut window = window();
        window.add_widget("label", label()).unwrap();

        assert_eq!(
            window.add_widget("label", label()),
            Err(Error::DuplicateWidget("label".to_string()))
        );
        assert_eq!(
            window.add_widget(CLOSE_BUTTON, label()),
            Err(Error::DuplicateWidget(CLOSE_BUTTON.to_string()))
        );
        assert_eq!(window.widget_count(), 2);
    }

    #[test]
    fn test_missing_widgets() {
        let mut window = window();
        assert_eq!(window.widget("nope").err(), Some(Error::MissingWidget("nope".to_string())));
        assert_eq!(window.remove_widget("nope").err(), Some(Error::MissingWidget("nope".to_string())));

        window.add_widget("label", label()).unwrap();
        assert_eq!(window.button("label").err(), Some(Error::NotAButton("label".to_string())));

        let removed = window.remove_widget("label").unwrap();
        assert!(removed.as_label().is_some());
        assert!(window.widget("label").is_err());
    }

    #[test]
    fn test_label_edited_in_place() {
        let mut window = window();
        window.add_widget("label", label()).unwrap();

        let widget = window.widget_mut("label").unwrap();
        assert!(widget.as_button_mut().is_none());
        widget.as_label_mut().unwrap().set_text("bye");

        let label = window.widget("label").unwrap().as_label().unwrap();
        assert_eq!(label.text(), "bye");
    }

    #[test]
    fn test_widgets_keep_insertion_order() {
        let mut window = window();
        window.add_widget("b", label()).unwrap();
        window.add_widget("a", label()).unwrap();

        let names: Vec<&str> = window.widgets().map(|(name, _)| name).collect();
        assert_eq!(names, vec![CLOSE_BUTTON, "b", "a"]);
    }

    #[test]
    fn test_close_button_hides_window() {
        let mut window = window();
        window.show();

        let press = InputState::from_transition(Vec2::new(380.0, 120.0), false, true);
        let activity = window.update_widgets(&press);

        assert!(activity.closed);
        assert!(activity.clicked.is_empty());
        assert!(!window.is_visible());
    }

    #[test]
    fn test_removed_close_button_no_longer_closes() {
        let mut window = window();
        window.remove_widget(CLOSE_BUTTON).unwrap();
        assert!(!window.has_close_button());

        let button = Button::new(ButtonConfig { text: "c".into(), ..Default::default() }).unwrap();
        window.add_widget(CLOSE_BUTTON, button).unwrap();
        window.show();

        let press = InputState::from_transition(Vec2::new(110.0, 110.0), false, true);
        let activity = window.update_widgets(&press);
        assert!(!activity.closed);
        assert_eq!(activity.clicked, vec![CLOSE_BUTTON.to_string()]);
        assert!(window.is_visible());
    }

    #[test]
    fn test_drag_offset() {
        let mut window = window();
        window.begin_drag(Vec2::new(150.0, 110.0));
        assert_eq!(window.drag_offset(), Some(Vec2::new(50.0, 10.0)));

        window.drag_to(Vec2::new(170.0, 140.0));
        assert_eq!(window.position(), Vec2::new(120.0, 130.0));

        window.end_drag();
        window.drag_to(Vec2::new(0.0, 0.0));
        assert_eq!(window.position(), Vec2::new(120.0, 130.0));
    }

    #[test]
    fn test_hidden_window_draws_nothing() {
        let window = window();
        let mut renderer = RecordingRenderer::new();
        window.draw(&mut renderer);
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_draw_order() {
        let mut window = Window::new(WindowConfig {
            title: Some("Tools".to_string()),
            title_bar_color: Some(Color::DARK_GRAY),
            close_button: Some("X".to_string()),
            ..Default::default()
        })
        .unwrap();
        window.show();

        let mut renderer = RecordingRenderer::new();
        window.draw(&mut renderer);
        let commands = renderer.commands();

        assert_eq!(commands[0], DrawCommand::Rect { rect: window.bounds(), color: Color::SKY_BLUE });
        assert_eq!(commands[1], DrawCommand::Rect { rect: window.title_bar(), color: Color::DARK_GRAY });
        assert!(matches!(&commands[2], DrawCommand::Text { text, .. } if text == "Tools"));
        assert!(matches!(&commands[3], DrawCommand::Rect { rect, .. } if rect.x == 360.0));
        assert!(matches!(&commands[4], DrawCommand::Text { text, .. } if text == "X"));
        assert_eq!(commands.len(), 5);
    }
}
