//! Window registry, z-order and per-tick input routing

use super::{UiEvent, Window, WindowId};
use crate::backend::Renderer;
use crate::error::{Error, Result};
use crate::geometry::Vec2;
use crate::input::InputState;
use hashbrown::HashMap;
use log::{debug, trace};

/// Owns every window and keeps them in z-order.
///
/// `order` runs back to front: the last entry is the topmost window. `order` and `windows` always
/// hold the same ids, each exactly once.
pub struct WindowManager {
    windows: HashMap<WindowId, Window>,
    order: Vec<WindowId>,
    next_id: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a window on top of the z-order. Visibility is left as the window has it.
    pub fn add_window(&mut self, window: Window) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;

        self.windows.insert(id, window);
        self.order.push(id);

        debug!("Added window {:?} (z = {})", id, self.order.len() - 1);
        id
    }

    pub fn remove_window(&mut self, id: WindowId) -> Result<Window> {
        let window = self.windows.remove(&id).ok_or(Error::UnknownWindow(id))?;
        self.order.retain(|&wid| wid != id);

        debug!("Removed window {:?}", id);
        Ok(window)
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Like [`window`](Self::window), but an unknown id is an error.
    pub fn get_window(&self, id: WindowId) -> Result<&Window> {
        self.windows.get(&id).ok_or(Error::UnknownWindow(id))
    }

    pub fn get_window_mut(&mut self, id: WindowId) -> Result<&mut Window> {
        self.windows.get_mut(&id).ok_or(Error::UnknownWindow(id))
    }

    /// Windows back to front.
    pub fn windows(&self) -> impl Iterator<Item = (WindowId, &Window)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.windows.get(id).map(|window| (*id, window)))
    }

    /// Ids back to front.
    pub fn z_order(&self) -> &[WindowId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn show_window(&mut self, id: WindowId) -> Result<()> {
        self.get_window_mut(id)?.show();
        Ok(())
    }

    pub fn hide_window(&mut self, id: WindowId) -> Result<()> {
        self.get_window_mut(id)?.hide();
        Ok(())
    }

    /// Move `id` to the top of the z-order and give it focus. Unknown ids are ignored.
    pub fn bring_to_front(&mut self, id: WindowId) {
        if !self.windows.contains_key(&id) {
            return;
        }

        if self.order.last() != Some(&id) {
            self.order.retain(|&wid| wid != id);
            self.order.push(id);
            debug!("Brought window {:?} to front", id);
        }

        for (wid, window) in self.windows.iter_mut() {
            window.set_focused(*wid == id);
        }
    }

    /// The topmost window, visible or not.
    pub fn active_window(&self) -> Option<WindowId> {
        self.order.last().copied()
    }

    /// Topmost visible window whose bounds contain `point`.
    pub fn top_window_at(&self, point: Vec2) -> Option<WindowId> {
        self.order.iter().rev().copied().find(|id| {
            self.windows
                .get(id)
                .is_some_and(|window| window.is_visible() && window.bounds().contains(point))
        })
    }

    /// Run one tick of input routing.
    ///
    /// Only the topmost window under the pointer gets widget interaction; every other window has
    /// its hover/clicked state cleared. A press on the hit window raises it, and a press on its
    /// title bar starts a drag that lasts until the pointer is released.
    pub fn update(&mut self, input: &InputState) -> Vec<UiEvent> {
        let mut events = Vec::new();
        let hit = self.top_window_at(input.pointer);
        trace!("pointer {:?} over {:?}", input.pointer, hit);

        for (id, window) in self.windows.iter_mut() {
            if Some(*id) != hit {
                window.reset_widgets();
            }
        }

        if let Some(id) = hit {
            self.route_to_hit(id, input, &mut events);
        }

        let ids = self.order.clone();
        for id in ids {
            self.handle_pointer(id, hit, input, &mut events);
        }

        events
    }

    fn route_to_hit(&mut self, id: WindowId, input: &InputState, events: &mut Vec<UiEvent>) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };

        if window.is_dragging() {
            window.drag_to(input.pointer);
            self.bring_to_front(id);
            return;
        }

        let activity = window.update_widgets(input);
        events.extend(
            activity
                .clicked
                .into_iter()
                .map(|widget| UiEvent::ButtonClicked { window: id, widget }),
        );
        if activity.closed {
            events.push(UiEvent::WindowClosed(id));
        }
    }

    fn handle_pointer(
        &mut self,
        id: WindowId,
        hit: Option<WindowId>,
        input: &InputState,
        events: &mut Vec<UiEvent>,
    ) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };

        if !window.is_visible() {
            return;
        }

        let mut raise = false;
        if input.pressed {
            if hit == Some(id) && window.bounds().contains(input.pointer) {
                raise = true;

                if window.title_bar().contains(input.pointer) {
                    window.begin_drag(input.pointer);
                    debug!("Started dragging window {:?}", id);
                    events.push(UiEvent::DragStarted(id));
                }
            }
        } else if input.released && window.is_dragging() {
            window.end_drag();
            debug!("Stopped dragging window {:?} at {:?}", id, window.position());
            events.push(UiEvent::DragEnded(id));
        }

        window.drag_to(input.pointer);

        if raise {
            if self.active_window() != Some(id) {
                events.push(UiEvent::WindowRaised(id));
            }
            self.bring_to_front(id);
        }
    }

    /// Draw every window bottom-up.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for (_, window) in self.windows() {
            window.draw(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowConfig;

    fn window_at(x: f32, y: f32) -> Window {
        let mut window = Window::new(WindowConfig {
            position: Vec2::new(x, y),
            ..Default::default()
        })
        .unwrap();
        window.show();
        window
    }

    #[test]
    fn test_add_and_remove_keep_sets_in_sync() {
        let mut wm = WindowManager::new();
        let a = wm.add_window(window_at(0.0, 0.0));
        let b = wm.add_window(window_at(50.0, 50.0));

        assert_eq!(wm.len(), 2);
        assert_eq!(wm.z_order(), &[a, b]);
        assert_eq!((a.raw(), b.raw()), (0, 1));

        wm.remove_window(a).unwrap();
        assert_eq!(wm.len(), 1);
        assert_eq!(wm.z_order(), &[b]);
        assert!(wm.window(a).is_none());

        assert_eq!(wm.remove_window(a).err(), Some(Error::UnknownWindow(a)));
        assert_eq!(wm.get_window(a).err(), Some(Error::UnknownWindow(a)));
    }

    #[test]
    fn test_show_hide_unknown_window() {
        let mut wm = WindowManager::new();
        let a = wm.add_window(window_at(0.0, 0.0));
        wm.remove_window(a).unwrap();

        assert_eq!(wm.show_window(a), Err(Error::UnknownWindow(a)));
        assert_eq!(wm.hide_window(a), Err(Error::UnknownWindow(a)));
    }

    #[test]
    fn test_bring_to_front() {
        let mut wm = WindowManager::new();
        let a = wm.add_window(window_at(0.0, 0.0));
        let b = wm.add_window(window_at(50.0, 50.0));
        let c = wm.add_window(window_at(100.0, 100.0));

        assert_eq!(wm.active_window(), Some(c));

        wm.bring_to_front(a);
        assert_eq!(wm.active_window(), Some(a));
        assert_eq!(wm.z_order(), &[b, c, a]);
        assert!(wm.window(a).unwrap().is_focused());
        assert!(!wm.window(c).unwrap().is_focused());

        wm.bring_to_front(b);
        assert_eq!(wm.z_order(), &[c, a, b]);
        assert!(!wm.window(a).unwrap().is_focused());
    }

    #[test]
    fn test_top_window_at_skips_hidden() {
        let mut wm = WindowManager::new();
        let back = wm.add_window(window_at(0.0, 0.0));
        let front = wm.add_window(window_at(0.0, 0.0));

        let p = Vec2::new(10.0, 10.0);
        assert_eq!(wm.top_window_at(p), Some(front));

        wm.hide_window(front).unwrap();
        assert_eq!(wm.top_window_at(p), Some(back));

        assert_eq!(wm.top_window_at(Vec2::new(1000.0, 1000.0)), None);
    }

    #[test]
    fn test_active_window_empty() {
        let wm = WindowManager::default();
        assert!(wm.is_empty());
        assert_eq!(wm.active_window(), None);
    }

    #[test]
    fn test_press_in_body_raises_without_drag() {
        let mut wm = WindowManager::new();
        let a = wm.add_window(window_at(0.0, 0.0));
        let b = wm.add_window(window_at(200.0, 0.0));

        let press = InputState::from_transition(Vec2::new(50.0, 200.0), false, true);
        let events = wm.update(&press);

        assert_eq!(events, vec![UiEvent::WindowRaised(a)]);
        assert_eq!(wm.z_order(), &[b, a]);
        assert!(!wm.window(a).unwrap().is_dragging());
    }
}
