//! Pointer input translation.
//!
//! [`PointerTracker`] turns raw pointer events from the host into the
//! discrete inputs [`SwipeController`] understands: taps, long presses and
//! horizontal drags. Vertical movement past the touch slop is left to the
//! list's scrolling.
//!
//! # Usage
//!
//! ```ignore
//! let mut tracker = PointerTracker::new(&config);
//!
//! for input in tracker.process(&event) {
//!     controller.handle(input, &mut list, &adapter);
//! }
//!
//! // On a timer, while a pointer is down:
//! if let Some(input) = tracker.check_long_press(Instant::now()) {
//!     controller.handle(input, &mut list, &adapter);
//! }
//! ```
//!
//! [`SwipeController`]: crate::SwipeController

use std::time::{Duration, Instant};

use glam::Vec2;

use crate::config::SwipeConfig;
use crate::controller::SwipeInput;
use crate::logging::targets;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer went down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer was released.
    Up,
    /// The platform cancelled the pointer sequence.
    Cancel,
}

/// A raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub phase: PointerPhase,
    /// The row under the pointer when it went down, if any.
    pub row: Option<usize>,
    /// Pointer position. `x` is measured from the row's left edge.
    pub position: Vec2,
    /// When the event happened.
    pub time: Instant,
}

impl PointerEvent {
    /// Creates a pointer event.
    pub fn new(phase: PointerPhase, row: Option<usize>, position: Vec2, time: Instant) -> Self {
        Self {
            phase,
            row,
            position,
            time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tracking {
    /// Down, not yet moved past the slop.
    Pressed,
    /// Horizontal drag on a row.
    Dragging,
    /// Handed to the list's scrolling.
    Scrolling,
    /// Long press delivered; the rest of the sequence is swallowed.
    LongPressed,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    row: Option<usize>,
    start: Vec2,
    start_time: Instant,
    tracking: Tracking,
}

/// Translates pointer events into swipe inputs.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    touch_slop: f32,
    long_press_timeout: Duration,
    press: Option<Press>,
}

impl PointerTracker {
    /// Creates a tracker using the slop and long-press timeout of `config`.
    pub fn new(config: &SwipeConfig) -> Self {
        Self {
            touch_slop: config.touch_slop,
            long_press_timeout: config.long_press_timeout,
            press: None,
        }
    }

    /// Whether a pointer is currently down.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Processes one pointer event and returns the inputs it produces.
    pub fn process(&mut self, event: &PointerEvent) -> Vec<SwipeInput> {
        match event.phase {
            PointerPhase::Down => self.handle_down(event),
            PointerPhase::Move => self.handle_move(event),
            PointerPhase::Up => self.handle_up(event),
            PointerPhase::Cancel => self.handle_cancel(),
        }
    }

    /// Delivers a long press once the pointer has been held still long enough.
    ///
    /// Call this periodically while [`is_pressed`](Self::is_pressed).
    pub fn check_long_press(&mut self, now: Instant) -> Option<SwipeInput> {
        let press = self.press.as_mut()?;
        let position = press.row?;

        if press.tracking == Tracking::Pressed
            && now.saturating_duration_since(press.start_time) >= self.long_press_timeout
        {
            press.tracking = Tracking::LongPressed;
            tracing::trace!(target: targets::POINTER, position, "long press");
            return Some(SwipeInput::LongPress { position });
        }

        None
    }

    /// Forgets any pointer in progress.
    pub fn reset(&mut self) {
        self.press = None;
    }

    fn handle_down(&mut self, event: &PointerEvent) -> Vec<SwipeInput> {
        // Only the first pointer is tracked.
        if self.press.is_none() {
            self.press = Some(Press {
                row: event.row,
                start: event.position,
                start_time: event.time,
                tracking: Tracking::Pressed,
            });
        }
        Vec::new()
    }

    fn handle_move(&mut self, event: &PointerEvent) -> Vec<SwipeInput> {
        let Some(press) = self.press.as_mut() else {
            return Vec::new();
        };
        let delta = event.position - press.start;

        match press.tracking {
            Tracking::Pressed if delta.length() > self.touch_slop => {
                match press.row {
                    Some(position) if delta.x.abs() > delta.y.abs() => {
                        press.tracking = Tracking::Dragging;
                        tracing::trace!(target: targets::POINTER, position, "horizontal drag");
                        vec![
                            SwipeInput::DragStarted { position },
                            SwipeInput::DragMoved {
                                position,
                                translation: delta.x,
                            },
                        ]
                    }
                    _ => {
                        press.tracking = Tracking::Scrolling;
                        tracing::trace!(target: targets::POINTER, "press became a scroll");
                        vec![SwipeInput::Dismiss]
                    }
                }
            }
            Tracking::Dragging => match press.row {
                Some(position) => vec![SwipeInput::DragMoved {
                    position,
                    translation: delta.x,
                }],
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_up(&mut self, event: &PointerEvent) -> Vec<SwipeInput> {
        let Some(press) = self.press.take() else {
            return Vec::new();
        };

        match (press.tracking, press.row) {
            (Tracking::Pressed, Some(position)) => vec![SwipeInput::Tap {
                position,
                x: event.position.x,
            }],
            (Tracking::Pressed, None) => vec![SwipeInput::Dismiss],
            (Tracking::Dragging, Some(position)) => vec![SwipeInput::DragEnded {
                position,
                translation: event.position.x - press.start.x,
            }],
            _ => Vec::new(),
        }
    }

    fn handle_cancel(&mut self) -> Vec<SwipeInput> {
        match self.press.take() {
            Some(Press {
                tracking: Tracking::Dragging,
                row: Some(position),
                ..
            }) => vec![SwipeInput::DragCancelled { position }],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PointerTracker {
        PointerTracker::new(&SwipeConfig::default())
    }

    fn event(phase: PointerPhase, row: Option<usize>, x: f32, y: f32, time: Instant) -> PointerEvent {
        PointerEvent::new(phase, row, Vec2::new(x, y), time)
    }

    #[test]
    fn test_tap() {
        let mut tracker = tracker();
        let t0 = Instant::now();

        assert!(tracker.process(&event(PointerPhase::Down, Some(2), 50.0, 10.0, t0)).is_empty());
        assert!(tracker.process(&event(PointerPhase::Move, Some(2), 53.0, 11.0, t0)).is_empty());
        let inputs = tracker.process(&event(PointerPhase::Up, Some(2), 53.0, 11.0, t0));

        assert_eq!(inputs, vec![SwipeInput::Tap { position: 2, x: 53.0 }]);
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_horizontal_drag() {
        let mut tracker = tracker();
        let t0 = Instant::now();

        tracker.process(&event(PointerPhase::Down, Some(1), 300.0, 20.0, t0));
        let inputs = tracker.process(&event(PointerPhase::Move, Some(1), 280.0, 22.0, t0));
        assert_eq!(
            inputs,
            vec![
                SwipeInput::DragStarted { position: 1 },
                SwipeInput::DragMoved {
                    position: 1,
                    translation: -20.0
                },
            ]
        );

        let inputs = tracker.process(&event(PointerPhase::Move, Some(1), 200.0, 25.0, t0));
        assert_eq!(
            inputs,
            vec![SwipeInput::DragMoved {
                position: 1,
                translation: -100.0
            }]
        );

        let inputs = tracker.process(&event(PointerPhase::Up, Some(1), 190.0, 25.0, t0));
        assert_eq!(
            inputs,
            vec![SwipeInput::DragEnded {
                position: 1,
                translation: -110.0
            }]
        );
    }

    #[test]
    fn test_vertical_move_is_scroll() {
        let mut tracker = tracker();
        let t0 = Instant::now();

        tracker.process(&event(PointerPhase::Down, Some(1), 100.0, 20.0, t0));
        let inputs = tracker.process(&event(PointerPhase::Move, Some(1), 102.0, 60.0, t0));
        assert_eq!(inputs, vec![SwipeInput::Dismiss]);

        assert!(tracker.process(&event(PointerPhase::Move, Some(1), 50.0, 60.0, t0)).is_empty());
        assert!(tracker.process(&event(PointerPhase::Up, Some(1), 50.0, 60.0, t0)).is_empty());
    }

    #[test]
    fn test_cancel_during_drag() {
        let mut tracker = tracker();
        let t0 = Instant::now();

        tracker.process(&event(PointerPhase::Down, Some(0), 300.0, 0.0, t0));
        tracker.process(&event(PointerPhase::Move, Some(0), 250.0, 0.0, t0));
        let inputs = tracker.process(&event(PointerPhase::Cancel, Some(0), 250.0, 0.0, t0));

        assert_eq!(inputs, vec![SwipeInput::DragCancelled { position: 0 }]);
    }

    #[test]
    fn test_long_press() {
        let mut tracker = tracker();
        let t0 = Instant::now();

        tracker.process(&event(PointerPhase::Down, Some(4), 10.0, 10.0, t0));
        assert!(tracker.check_long_press(t0 + Duration::from_millis(100)).is_none());
        assert_eq!(
            tracker.check_long_press(t0 + Duration::from_millis(500)),
            Some(SwipeInput::LongPress { position: 4 })
        );
        // Delivered once, and the release is not a tap.
        assert!(tracker.check_long_press(t0 + Duration::from_millis(900)).is_none());
        assert!(tracker.process(&event(PointerPhase::Up, Some(4), 10.0, 10.0, t0)).is_empty());
    }

    #[test]
    fn test_tap_outside_rows_dismisses() {
        let mut tracker = tracker();
        let t0 = Instant::now();

        tracker.process(&event(PointerPhase::Down, None, 10.0, 900.0, t0));
        let inputs = tracker.process(&event(PointerPhase::Up, None, 10.0, 900.0, t0));
        assert_eq!(inputs, vec![SwipeInput::Dismiss]);
    }
}
