// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition
//!
//! Turns raw pointer input (mouse, touch fingers, ctrl+wheel) into the five
//! gestures the transform controller understands:
//! - a single pointer moved past the slop distance is a drag, reported as the
//!   cumulative translation since the press
//! - two quick taps close to each other are a double-tap
//! - two fingers down are a pinch, reported as the ratio between the current
//!   and the initial finger distance
//! - ctrl+wheel is a pinch too; it ends once the wheel has been idle for a
//!   while

use super::transform::{self, Offset};
use crate::app::config::{
    DEFAULT_DOUBLE_TAP_DISTANCE, DEFAULT_DOUBLE_TAP_MS, DEFAULT_DRAG_SLOP, DEFAULT_WHEEL_IDLE_MS,
};
use iced::Point;
use std::time::{Duration, Instant};

/// Multiplier applied per wheel line while magnifying.
pub const WHEEL_ZOOM_BASE: f32 = 1.1;

/// Finger distances below this are too unstable to use as a pinch baseline.
pub const MIN_PINCH_DISTANCE: f32 = 10.0;

/// Identifies one source of pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    Mouse,
    Finger(u64),
}

/// Raw input fed to the recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Pressed {
        pointer: Pointer,
        position: Point,
        at: Instant,
    },
    Moved {
        pointer: Pointer,
        position: Point,
    },
    Released {
        pointer: Pointer,
        at: Instant,
    },
    /// The platform took the pointer away (e.g. touch lost).
    Cancelled {
        pointer: Pointer,
    },
    /// Magnifying wheel movement, in lines (positive zooms in).
    Wheel {
        lines: f32,
        at: Instant,
    },
    Tick(Instant),
}

/// Recognized gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    DoubleTap,
    DragChanged(Offset),
    DragEnded,
    MagnifyChanged(f32),
    MagnifyEnded,
}

impl From<Gesture> for transform::Message {
    fn from(gesture: Gesture) -> Self {
        match gesture {
            Gesture::DoubleTap => transform::Message::DoubleTap,
            Gesture::DragChanged(translation) => transform::Message::DragChanged(translation),
            Gesture::DragEnded => transform::Message::DragEnded,
            Gesture::MagnifyChanged(factor) => transform::Message::MagnifyChanged(factor),
            Gesture::MagnifyEnded => transform::Message::MagnifyEnded,
        }
    }
}

/// Timing and distance thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    /// Maximum delay between the two taps of a double-tap.
    pub double_tap: Duration,
    /// Maximum distance between the two taps of a double-tap.
    pub double_tap_distance: f32,
    /// Distance a pointer must travel before a press becomes a drag.
    pub drag_slop: f32,
    /// Wheel silence after which a wheel magnification ends.
    pub wheel_idle: Duration,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            double_tap: Duration::from_millis(DEFAULT_DOUBLE_TAP_MS),
            double_tap_distance: DEFAULT_DOUBLE_TAP_DISTANCE,
            drag_slop: DEFAULT_DRAG_SLOP,
            wheel_idle: Duration::from_millis(DEFAULT_WHEEL_IDLE_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Single {
        pointer: Pointer,
        origin: Point,
        dragging: bool,
    },
    Pinch {
        first: Pointer,
        second: Pointer,
        baseline: f32,
    },
    /// Leftover pointers after a pinch; ignored until all are lifted.
    Draining,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct WheelMagnify {
    factor: f32,
    last_at: Instant,
}

/// Pointer-to-gesture state machine.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    settings: GestureSettings,
    phase: Phase,
    down: Vec<(Pointer, Point)>,
    last_tap: Option<(Instant, Point)>,
    wheel: Option<WheelMagnify>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            phase: Phase::Idle,
            down: Vec::new(),
            last_tap: None,
            wheel: None,
        }
    }

    /// Whether a wheel magnification is open and needs ticks to close it.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.wheel.is_some()
    }

    /// Feeds one input event and returns the gestures it completes.
    pub fn handle(&mut self, input: Input) -> Vec<Gesture> {
        let mut gestures = Vec::new();

        match input {
            Input::Pressed {
                pointer,
                position,
                at: _,
            } => self.on_pressed(pointer, position, &mut gestures),
            Input::Moved { pointer, position } => self.on_moved(pointer, position, &mut gestures),
            Input::Released { pointer, at } => self.on_lifted(pointer, Some(at), &mut gestures),
            Input::Cancelled { pointer } => self.on_lifted(pointer, None, &mut gestures),
            Input::Wheel { lines, at } => {
                let factor = self.wheel.map_or(1.0, |wheel| wheel.factor) * WHEEL_ZOOM_BASE.powf(lines);
                self.wheel = Some(WheelMagnify {
                    factor,
                    last_at: at,
                });
                gestures.push(Gesture::MagnifyChanged(factor));
            }
            Input::Tick(now) => {
                if let Some(wheel) = self.wheel {
                    if now.saturating_duration_since(wheel.last_at) >= self.settings.wheel_idle {
                        self.wheel = None;
                        gestures.push(Gesture::MagnifyEnded);
                    }
                }
            }
        }

        if !gestures.is_empty() {
            log::trace!("{input:?} -> {gestures:?}");
        }
        gestures
    }

    fn position_of(&self, pointer: Pointer) -> Option<Point> {
        self.down
            .iter()
            .find(|(candidate, _)| *candidate == pointer)
            .map(|(_, position)| *position)
    }

    fn on_pressed(&mut self, pointer: Pointer, position: Point, gestures: &mut Vec<Gesture>) {
        if self.position_of(pointer).is_some() {
            return;
        }
        self.down.push((pointer, position));

        match (self.phase, self.down.len()) {
            (Phase::Idle, 1) => {
                self.phase = Phase::Single {
                    pointer,
                    origin: position,
                    dragging: false,
                };
            }
            (Phase::Single { dragging, .. }, 2) => {
                if dragging {
                    gestures.push(Gesture::DragEnded);
                }
                self.last_tap = None;

                let (first, first_position) = self.down[0];
                let baseline = distance(first_position, position);
                self.phase = if baseline >= MIN_PINCH_DISTANCE {
                    Phase::Pinch {
                        first,
                        second: pointer,
                        baseline,
                    }
                } else {
                    Phase::Draining
                };
            }
            _ => {}
        }
    }

    fn on_moved(&mut self, pointer: Pointer, position: Point, gestures: &mut Vec<Gesture>) {
        let Some(slot) = self.down.iter_mut().find(|(candidate, _)| *candidate == pointer) else {
            return;
        };
        slot.1 = position;

        match &mut self.phase {
            Phase::Single {
                pointer: active,
                origin,
                dragging,
            } if *active == pointer => {
                let translation = Offset::new(position.x - origin.x, position.y - origin.y);
                if !*dragging && translation.x.hypot(translation.y) < self.settings.drag_slop {
                    return;
                }
                *dragging = true;
                gestures.push(Gesture::DragChanged(translation));
            }
            Phase::Pinch {
                first,
                second,
                baseline,
            } if pointer == *first || pointer == *second => {
                let (first, second, baseline) = (*first, *second, *baseline);
                if let (Some(a), Some(b)) = (self.position_of(first), self.position_of(second)) {
                    gestures.push(Gesture::MagnifyChanged(distance(a, b) / baseline));
                }
            }
            _ => {}
        }
    }

    /// Handles release (`at` is set) and cancellation (`at` is `None`).
    fn on_lifted(&mut self, pointer: Pointer, at: Option<Instant>, gestures: &mut Vec<Gesture>) {
        let Some(index) = self.down.iter().position(|(candidate, _)| *candidate == pointer) else {
            return;
        };
        self.down.remove(index);

        match self.phase {
            Phase::Single {
                pointer: active,
                origin,
                dragging,
            } if active == pointer => {
                self.phase = Phase::Idle;
                if dragging {
                    gestures.push(Gesture::DragEnded);
                } else if let Some(at) = at {
                    self.register_tap(at, origin, gestures);
                }
            }
            Phase::Pinch { first, second, .. } if pointer == first || pointer == second => {
                gestures.push(Gesture::MagnifyEnded);
                self.phase = if self.down.is_empty() {
                    Phase::Idle
                } else {
                    Phase::Draining
                };
            }
            _ => {
                if self.down.is_empty() {
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    fn register_tap(&mut self, at: Instant, position: Point, gestures: &mut Vec<Gesture>) {
        let is_second_tap = self.last_tap.is_some_and(|(previous_at, previous_position)| {
            at.saturating_duration_since(previous_at) <= self.settings.double_tap
                && distance(previous_position, position) <= self.settings.double_tap_distance
        });

        if is_second_tap {
            // A third tap starts a new pair instead of firing again
            self.last_tap = None;
            gestures.push(Gesture::DoubleTap);
        } else {
            self.last_tap = Some((at, position));
        }
    }
}

fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn press(pointer: Pointer, x: f32, y: f32, at: Instant) -> Input {
        Input::Pressed {
            pointer,
            position: Point::new(x, y),
            at,
        }
    }

    fn moved(pointer: Pointer, x: f32, y: f32) -> Input {
        Input::Moved {
            pointer,
            position: Point::new(x, y),
        }
    }

    fn release(pointer: Pointer, at: Instant) -> Input {
        Input::Released { pointer, at }
    }

    fn tap(recognizer: &mut GestureRecognizer, x: f32, y: f32, at: Instant) -> Vec<Gesture> {
        let mut gestures = recognizer.handle(press(Pointer::Mouse, x, y, at));
        gestures.extend(recognizer.handle(release(Pointer::Mouse, at + ms(40))));
        gestures
    }

    #[test]
    fn two_quick_taps_are_a_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        assert!(tap(&mut recognizer, 100.0, 100.0, t0).is_empty());
        assert_eq!(
            tap(&mut recognizer, 102.0, 101.0, t0 + ms(200)),
            vec![Gesture::DoubleTap]
        );
    }

    #[test]
    fn slow_taps_are_not_a_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        tap(&mut recognizer, 100.0, 100.0, t0);
        assert!(tap(&mut recognizer, 100.0, 100.0, t0 + ms(900)).is_empty());
    }

    #[test]
    fn distant_taps_are_not_a_double_tap() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        tap(&mut recognizer, 100.0, 100.0, t0);
        assert!(tap(&mut recognizer, 300.0, 100.0, t0 + ms(100)).is_empty());
    }

    #[test]
    fn third_tap_starts_a_new_pair() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        tap(&mut recognizer, 50.0, 50.0, t0);
        assert_eq!(tap(&mut recognizer, 50.0, 50.0, t0 + ms(100)), vec![Gesture::DoubleTap]);
        assert!(tap(&mut recognizer, 50.0, 50.0, t0 + ms(200)).is_empty());
        assert_eq!(tap(&mut recognizer, 50.0, 50.0, t0 + ms(300)), vec![Gesture::DoubleTap]);
    }

    #[test]
    fn drag_reports_cumulative_translation() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        recognizer.handle(press(Pointer::Mouse, 10.0, 10.0, t0));
        assert!(recognizer.handle(moved(Pointer::Mouse, 11.0, 11.0)).is_empty());
        assert_eq!(
            recognizer.handle(moved(Pointer::Mouse, 30.0, 15.0)),
            vec![Gesture::DragChanged(Offset::new(20.0, 5.0))]
        );
        // Once dragging, small moves are reported too
        assert_eq!(
            recognizer.handle(moved(Pointer::Mouse, 31.0, 15.0)),
            vec![Gesture::DragChanged(Offset::new(21.0, 5.0))]
        );
        assert_eq!(
            recognizer.handle(release(Pointer::Mouse, t0 + ms(500))),
            vec![Gesture::DragEnded]
        );
    }

    #[test]
    fn a_drag_is_not_counted_as_a_tap() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        tap(&mut recognizer, 10.0, 10.0, t0);
        recognizer.handle(press(Pointer::Mouse, 10.0, 10.0, t0 + ms(100)));
        recognizer.handle(moved(Pointer::Mouse, 40.0, 10.0));
        assert_eq!(
            recognizer.handle(release(Pointer::Mouse, t0 + ms(150))),
            vec![Gesture::DragEnded]
        );
    }

    #[test]
    fn two_fingers_pinch_relative_to_start_distance() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();
        let a = Pointer::Finger(1);
        let b = Pointer::Finger(2);

        recognizer.handle(press(a, 100.0, 100.0, t0));
        recognizer.handle(press(b, 200.0, 100.0, t0));
        assert_eq!(
            recognizer.handle(moved(b, 300.0, 100.0)),
            vec![Gesture::MagnifyChanged(2.0)]
        );
        assert_eq!(
            recognizer.handle(moved(a, 250.0, 100.0)),
            vec![Gesture::MagnifyChanged(0.5)]
        );
        assert_eq!(recognizer.handle(release(a, t0 + ms(300))), vec![Gesture::MagnifyEnded]);
        // The remaining finger neither drags nor taps
        assert!(recognizer.handle(moved(b, 400.0, 400.0)).is_empty());
        assert!(recognizer.handle(release(b, t0 + ms(350))).is_empty());
    }

    #[test]
    fn second_finger_ends_an_active_drag() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();
        let a = Pointer::Finger(1);
        let b = Pointer::Finger(2);

        recognizer.handle(press(a, 0.0, 0.0, t0));
        recognizer.handle(moved(a, 50.0, 0.0));
        assert_eq!(
            recognizer.handle(press(b, 150.0, 0.0, t0 + ms(100))),
            vec![Gesture::DragEnded]
        );
        assert_eq!(
            recognizer.handle(moved(b, 250.0, 0.0)),
            vec![Gesture::MagnifyChanged(2.0)]
        );
    }

    #[test]
    fn cancelled_pinch_still_ends() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        recognizer.handle(press(Pointer::Finger(1), 0.0, 0.0, t0));
        recognizer.handle(press(Pointer::Finger(2), 100.0, 0.0, t0));
        assert_eq!(
            recognizer.handle(Input::Cancelled {
                pointer: Pointer::Finger(2)
            }),
            vec![Gesture::MagnifyEnded]
        );
    }

    #[test]
    fn cancelled_press_is_not_a_tap() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        tap(&mut recognizer, 10.0, 10.0, t0);
        recognizer.handle(press(Pointer::Mouse, 10.0, 10.0, t0 + ms(50)));
        assert!(recognizer
            .handle(Input::Cancelled {
                pointer: Pointer::Mouse
            })
            .is_empty());
    }

    #[test]
    fn cancelled_drag_ends_the_drag() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        recognizer.handle(press(Pointer::Mouse, 10.0, 10.0, t0));
        assert_eq!(
            recognizer.handle(moved(Pointer::Mouse, 60.0, 10.0)),
            vec![Gesture::DragChanged(Offset::new(50.0, 0.0))]
        );
        assert_eq!(
            recognizer.handle(Input::Cancelled {
                pointer: Pointer::Mouse
            }),
            vec![Gesture::DragEnded]
        );
    }

    #[test]
    fn fingers_too_close_do_not_pinch() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        recognizer.handle(press(Pointer::Finger(1), 0.0, 0.0, t0));
        recognizer.handle(press(Pointer::Finger(2), 2.0, 0.0, t0));
        assert!(recognizer.handle(moved(Pointer::Finger(2), 200.0, 0.0)).is_empty());
    }

    #[test]
    fn wheel_accumulates_and_ends_when_idle() {
        let mut recognizer = GestureRecognizer::default();
        let t0 = Instant::now();

        let first = recognizer.handle(Input::Wheel { lines: 1.0, at: t0 });
        assert_eq!(first, vec![Gesture::MagnifyChanged(WHEEL_ZOOM_BASE)]);
        let second = recognizer.handle(Input::Wheel {
            lines: 1.0,
            at: t0 + ms(50),
        });
        match second.as_slice() {
            [Gesture::MagnifyChanged(factor)] => {
                assert!((factor - WHEEL_ZOOM_BASE * WHEEL_ZOOM_BASE).abs() < 1e-5);
            }
            other => panic!("unexpected gestures {other:?}"),
        }

        assert!(recognizer.needs_tick());
        assert!(recognizer.handle(Input::Tick(t0 + ms(100))).is_empty());
        assert_eq!(
            recognizer.handle(Input::Tick(t0 + ms(400))),
            vec![Gesture::MagnifyEnded]
        );
        assert!(!recognizer.needs_tick());
    }

    #[test]
    fn gestures_map_to_transform_messages() {
        assert_eq!(
            transform::Message::from(Gesture::MagnifyChanged(2.0)),
            transform::Message::MagnifyChanged(2.0)
        );
        assert_eq!(
            transform::Message::from(Gesture::DragChanged(Offset::new(1.0, 2.0))),
            transform::Message::DragChanged(Offset::new(1.0, 2.0))
        );
        assert_eq!(transform::Message::from(Gesture::DoubleTap), transform::Message::DoubleTap);
    }
}
