//! Replayable pointer input

use super::InputSource;
use crate::geometry::Vec2;
use crate::input::InputState;
use std::collections::VecDeque;

/// Input source that replays a queue of pointer samples, one per tick.
///
/// Each sample is a position plus whether the primary button is held. Edge flags are derived from
/// consecutive samples. Once the queue runs dry the last sample repeats with no edges.
///
/// A fresh script assumes the button starts up. To continue a gesture that an earlier script left
/// held, start from [`ScriptedInput::held_at`] so the first up sample reports a release.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    samples: VecDeque<(Vec2, bool)>,
    last: Option<(Vec2, bool)>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the button already held at `position`, without queueing a sample.
    pub fn held_at(position: Vec2) -> Self {
        Self {
            samples: VecDeque::new(),
            last: Some((position, true)),
        }
    }

    /// Move to `position` with the button up.
    pub fn hover(mut self, position: Vec2) -> Self {
        self.samples.push_back((position, false));
        self
    }

    /// Press the button at `position`.
    ///
    /// Takes one tick, or two when the button is still held from the previous sample: an up
    /// sample at `position` goes first so the press edge always fires.
    pub fn press(mut self, position: Vec2) -> Self {
        if self.held_at_end() {
            self.samples.push_back((position, false));
        }
        self.samples.push_back((position, true));
        self
    }

    /// Move to `position` while keeping the button held.
    pub fn drag(mut self, position: Vec2) -> Self {
        self.samples.push_back((position, true));
        self
    }

    /// Release the button at `position`.
    pub fn release(self, position: Vec2) -> Self {
        self.hover(position)
    }

    /// Press then release at `position`.
    pub fn click(self, position: Vec2) -> Self {
        self.press(position).release(position)
    }

    /// Number of samples not yet replayed.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }

    pub fn is_finished(&self) -> bool {
        self.samples.is_empty()
    }

    fn held_at_end(&self) -> bool {
        self.samples
            .back()
            .or(self.last.as_ref())
            .is_some_and(|&(_, down)| down)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        let was_down = self.last.map(|(_, down)| down).unwrap_or(false);

        match self.samples.pop_front() {
            Some((pointer, down)) => {
                self.last = Some((pointer, down));
                InputState::from_transition(pointer, was_down, down)
            }
            None => {
                let (pointer, down) = self.last.unwrap_or((Vec2::new(0.0, 0.0), false));
                InputState::from_transition(pointer, down, down)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_edges() {
        let p = Vec2::new(10.0, 10.0);
        let q = Vec2::new(20.0, 15.0);
        let mut input = ScriptedInput::new().hover(p).press(p).drag(q).release(q);

        assert_eq!(input.remaining(), 4);

        let tick = input.poll();
        assert!(!tick.pressed && !tick.down);

        let tick = input.poll();
        assert!(tick.pressed && tick.down);

        let tick = input.poll();
        assert!(!tick.pressed && tick.down);
        assert_eq!(tick.pointer, q);

        let tick = input.poll();
        assert!(tick.released && !tick.down);

        assert!(input.is_finished());
    }

    #[test]
    fn test_exhausted_script_repeats_without_edges() {
        let p = Vec2::new(3.0, 4.0);
        let mut input = ScriptedInput::new().press(p);

        assert!(input.poll().pressed);

        let tick = input.poll();
        assert_eq!(tick.pointer, p);
        assert!(tick.down);
        assert!(!tick.pressed && !tick.released);
    }

    #[test]
    fn test_press_while_held_fires_new_edge() {
        let p = Vec2::new(5.0, 5.0);
        let q = Vec2::new(8.0, 5.0);
        let mut input = ScriptedInput::new().press(p).drag(q).press(q);

        assert_eq!(input.remaining(), 4);
        assert!(input.poll().pressed);
        assert!(!input.poll().pressed);

        let tick = input.poll();
        assert!(tick.released && !tick.down);
        assert_eq!(tick.pointer, q);

        let tick = input.poll();
        assert!(tick.pressed && tick.down);
        assert!(input.is_finished());
    }

    #[test]
    fn test_held_start_releases_on_first_up_sample() {
        let p = Vec2::new(40.0, 12.0);
        let mut input = ScriptedInput::held_at(p).drag(p).release(p);

        let tick = input.poll();
        assert!(tick.down && !tick.pressed);

        let tick = input.poll();
        assert!(tick.released && !tick.down);

        let mut input = ScriptedInput::held_at(p).press(p);
        assert_eq!(input.remaining(), 2);
        assert!(input.poll().released);
        assert!(input.poll().pressed);
    }

    #[test]
    fn test_empty_script() {
        let mut input = ScriptedInput::new();
        assert_eq!(input.poll(), InputState::default());
    }
}
