// SPDX-License-Identifier: MPL-2.0
//! Transform state management
//!
//! This module owns the zoom scale and pan offset of the displayed page and
//! reconciles the three gesture sources that drive them:
//! - Double-tap (snap zoom in / back to rest)
//! - Drag (absolute pan offset)
//! - Magnification (pinch factor, soft-gated while active, clamped at the end)
//!
//! plus the step buttons and the reset button of the control bar.
//!
//! All operations are total: bounds are clamped, never rejected.

pub use crate::domain::ui::{scale_bounds, Offset, TransformState};

/// How the renderer should move from the previous transform to the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Jump straight to the new value.
    Immediate,
    /// Constant-speed interpolation used while a gesture is running.
    Linear,
    /// Default ease used by the step buttons.
    Ease,
    /// Bouncy settle used by double-tap and reset.
    Spring,
}

/// Messages for the transform controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    DoubleTap,
    /// Cumulative translation since the drag started.
    DragChanged(Offset),
    DragEnded,
    /// Magnification factor relative to the start of the pinch.
    MagnifyChanged(f32),
    MagnifyEnded,
    StepDown,
    StepUp,
    Reset,
}

/// Effects produced by transform changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The committed transform changed.
    Changed {
        state: TransformState,
        motion: Motion,
    },
}

/// Owns the committed scale/offset pair.
#[derive(Debug, Clone, Default)]
pub struct TransformController {
    state: TransformState,
}

impl TransformController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current committed transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.state.scale
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.state.offset
    }

    /// Handle a transform message, reporting the new state if it changed.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = self.state;

        let motion = match msg {
            Message::DoubleTap => {
                self.on_double_tap();
                Motion::Spring
            }
            Message::DragChanged(translation) => {
                self.on_drag_changed(translation);
                Motion::Linear
            }
            Message::DragEnded => {
                self.on_drag_ended();
                Motion::Spring
            }
            Message::MagnifyChanged(factor) => {
                self.on_magnify_changed(factor);
                Motion::Linear
            }
            Message::MagnifyEnded => {
                let resets = self.state.scale < scale_bounds::MIN;
                self.on_magnify_ended();
                if resets {
                    Motion::Spring
                } else {
                    Motion::Immediate
                }
            }
            Message::StepDown => {
                self.on_scale_step_down();
                if self.state.is_rest() {
                    Motion::Spring
                } else {
                    Motion::Ease
                }
            }
            Message::StepUp => {
                self.on_scale_step_up();
                Motion::Ease
            }
            Message::Reset => {
                self.reset();
                Motion::Spring
            }
        };

        if self.state == before {
            Effect::None
        } else {
            log::debug!(
                "transform {:?}: scale {} -> {}, offset ({}, {})",
                msg,
                before.scale,
                self.state.scale,
                self.state.offset.x,
                self.state.offset.y
            );
            Effect::Changed {
                state: self.state,
                motion,
            }
        }
    }

    /// Snaps to the maximum scale from rest, otherwise returns to rest.
    pub fn on_double_tap(&mut self) {
        if self.state.scale == scale_bounds::MIN {
            self.state.scale = scale_bounds::MAX;
        } else {
            self.reset();
        }
    }

    /// Replaces the offset with the drag's cumulative translation.
    pub fn on_drag_changed(&mut self, translation: Offset) {
        self.state.offset = translation;
    }

    /// Snaps back to rest unless the page is zoomed in.
    pub fn on_drag_ended(&mut self) {
        if self.state.scale <= scale_bounds::MIN {
            self.reset();
        }
    }

    /// Applies the pinch factor, but only while the current scale is still
    /// inside the band. Once a pinch overshoots, further updates are ignored
    /// until [`Self::on_magnify_ended`] brings the scale back.
    pub fn on_magnify_changed(&mut self, factor: f32) {
        if scale_bounds::contains(self.state.scale) {
            self.state.scale = factor;
        }
    }

    /// Clamps an overshooting pinch back into the band.
    pub fn on_magnify_ended(&mut self) {
        if self.state.scale > scale_bounds::MAX {
            self.state.scale = scale_bounds::MAX;
        } else if self.state.scale < scale_bounds::MIN {
            self.reset();
        }
    }

    /// Zooms out by one step; landing on the minimum also clears the offset.
    pub fn on_scale_step_down(&mut self) {
        if self.state.scale > scale_bounds::MIN {
            self.state.scale -= scale_bounds::STEP;

            if self.state.scale == scale_bounds::MIN {
                self.reset();
            }
        }
    }

    /// Zooms in by one step.
    pub fn on_scale_step_up(&mut self) {
        if self.state.scale < scale_bounds::MAX {
            self.state.scale += scale_bounds::STEP;
        }
    }

    /// Returns to the rest state.
    pub fn reset(&mut self) {
        self.state = TransformState::REST;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_at(scale: f32, offset: Offset) -> TransformController {
        TransformController {
            state: TransformState::new(scale, offset),
        }
    }

    #[test]
    fn default_controller_is_at_rest() {
        let controller = TransformController::new();
        assert!(controller.state().is_rest());
    }

    #[test]
    fn step_buttons_stay_in_bounds_and_move_by_whole_steps() {
        let mut controller = TransformController::new();
        let pattern = [
            true, true, false, true, true, true, true, true, false, false, false, false, false,
            false, true,
        ];

        let mut previous = controller.scale();
        for up in pattern {
            if up {
                controller.on_scale_step_up();
            } else {
                controller.on_scale_step_down();
            }
            let scale = controller.scale();
            assert!(scale_bounds::contains(scale), "scale {scale} left the band");
            let delta = (scale - previous).abs();
            assert!(delta == 0.0 || delta == scale_bounds::STEP);
            previous = scale;
        }
    }

    #[test]
    fn step_up_stops_at_max() {
        let mut controller = controller_at(5.0, Offset::ZERO);
        controller.on_scale_step_up();
        assert_eq!(controller.scale(), 5.0);
    }

    #[test]
    fn step_down_to_min_clears_offset() {
        let mut controller = controller_at(2.0, Offset::new(30.0, -12.0));
        controller.on_scale_step_down();
        assert!(controller.state().is_rest());
    }

    #[test]
    fn step_down_from_fractional_scale_keeps_offset() {
        let mut controller = controller_at(2.5, Offset::new(40.0, 10.0));
        controller.on_scale_step_down();
        assert_eq!(controller.scale(), 1.5);
        assert_eq!(controller.offset(), Offset::new(40.0, 10.0));
    }

    #[test]
    fn step_down_at_min_is_a_no_op() {
        let mut controller = controller_at(1.0, Offset::ZERO);
        assert_eq!(controller.handle(Message::StepDown), Effect::None);
        assert_eq!(controller.scale(), 1.0);
    }

    #[test]
    fn reset_always_returns_to_rest() {
        for (scale, offset) in [
            (1.0, Offset::ZERO),
            (3.0, Offset::new(40.0, 10.0)),
            (7.5, Offset::new(-3.0, 2.0)),
            (0.2, Offset::new(1.0, 1.0)),
        ] {
            let mut controller = controller_at(scale, offset);
            controller.reset();
            assert_eq!(controller.state(), TransformState::REST);
            controller.reset();
            assert_eq!(controller.state(), TransformState::REST);
        }
    }

    #[test]
    fn double_tap_from_rest_snaps_to_max_keeping_offset() {
        let mut controller = controller_at(1.0, Offset::new(12.0, 4.0));
        controller.on_double_tap();
        assert_eq!(controller.scale(), 5.0);
        assert_eq!(controller.offset(), Offset::new(12.0, 4.0));
    }

    #[test]
    fn double_tap_when_zoomed_resets() {
        let mut controller = controller_at(2.5, Offset::new(12.0, 4.0));
        controller.on_double_tap();
        assert_eq!(controller.state(), TransformState::REST);
    }

    #[test]
    fn double_tap_twice_round_trips() {
        let mut controller = TransformController::new();
        controller.on_double_tap();
        assert_eq!(controller.state(), TransformState::new(5.0, Offset::ZERO));
        controller.on_double_tap();
        assert_eq!(controller.state(), TransformState::REST);
    }

    #[test]
    fn magnify_changed_applies_inside_band() {
        let mut controller = controller_at(2.0, Offset::ZERO);
        controller.on_magnify_changed(3.5);
        assert_eq!(controller.scale(), 3.5);
    }

    #[test]
    fn magnify_changed_is_ignored_outside_band() {
        let mut controller = controller_at(7.0, Offset::ZERO);
        controller.on_magnify_changed(2.0);
        assert_eq!(controller.scale(), 7.0);

        let mut controller = controller_at(0.5, Offset::ZERO);
        controller.on_magnify_changed(2.0);
        assert_eq!(controller.scale(), 0.5);
    }

    #[test]
    fn magnify_changed_can_overshoot_once() {
        let mut controller = controller_at(4.0, Offset::ZERO);
        controller.on_magnify_changed(6.0);
        assert_eq!(controller.scale(), 6.0);
        controller.on_magnify_changed(9.0);
        assert_eq!(controller.scale(), 6.0);
    }

    #[test]
    fn magnify_ended_clamps_overshoot() {
        let mut controller = controller_at(6.0, Offset::new(5.0, 5.0));
        controller.on_magnify_ended();
        assert_eq!(controller.scale(), 5.0);
        assert_eq!(controller.offset(), Offset::new(5.0, 5.0));
    }

    #[test]
    fn magnify_ended_resets_undershoot() {
        let mut controller = controller_at(0.5, Offset::new(5.0, 5.0));
        controller.on_magnify_ended();
        assert_eq!(controller.state(), TransformState::REST);
    }

    #[test]
    fn magnify_ended_leaves_in_band_values() {
        let mut controller = controller_at(2.7, Offset::new(1.0, 2.0));
        controller.on_magnify_ended();
        assert_eq!(controller.state(), TransformState::new(2.7, Offset::new(1.0, 2.0)));
    }

    #[test]
    fn drag_changed_replaces_offset() {
        let mut controller = controller_at(3.0, Offset::new(100.0, 100.0));
        controller.on_drag_changed(Offset::new(10.0, 0.0));
        controller.on_drag_changed(Offset::new(20.0, 5.0));
        assert_eq!(controller.offset(), Offset::new(20.0, 5.0));
    }

    #[test]
    fn drag_ended_at_rest_scale_snaps_back() {
        let mut controller = controller_at(1.0, Offset::ZERO);
        controller.on_drag_changed(Offset::new(40.0, 10.0));
        controller.on_drag_ended();
        assert_eq!(controller.state(), TransformState::REST);
    }

    #[test]
    fn drag_ended_when_zoomed_keeps_offset() {
        let mut controller = controller_at(3.0, Offset::new(40.0, 10.0));
        controller.on_drag_ended();
        assert_eq!(controller.offset(), Offset::new(40.0, 10.0));
        assert_eq!(controller.scale(), 3.0);
    }

    #[test]
    fn ended_without_changed_is_a_no_op() {
        let mut controller = TransformController::new();
        assert_eq!(controller.handle(Message::DragEnded), Effect::None);
        assert_eq!(controller.handle(Message::MagnifyEnded), Effect::None);
    }

    #[test]
    fn handle_reports_motion() {
        let mut controller = TransformController::new();

        assert_eq!(
            controller.handle(Message::DoubleTap),
            Effect::Changed {
                state: TransformState::new(5.0, Offset::ZERO),
                motion: Motion::Spring,
            }
        );
        assert_eq!(
            controller.handle(Message::DragChanged(Offset::new(3.0, 4.0))),
            Effect::Changed {
                state: TransformState::new(5.0, Offset::new(3.0, 4.0)),
                motion: Motion::Linear,
            }
        );
        assert_eq!(
            controller.handle(Message::StepDown),
            Effect::Changed {
                state: TransformState::new(4.0, Offset::new(3.0, 4.0)),
                motion: Motion::Ease,
            }
        );
        assert_eq!(
            controller.handle(Message::Reset),
            Effect::Changed {
                state: TransformState::REST,
                motion: Motion::Spring,
            }
        );
    }

    #[test]
    fn magnify_ended_clamp_is_immediate() {
        let mut controller = controller_at(6.0, Offset::ZERO);
        assert_eq!(
            controller.handle(Message::MagnifyEnded),
            Effect::Changed {
                state: TransformState::new(5.0, Offset::ZERO),
                motion: Motion::Immediate,
            }
        );
    }
}
