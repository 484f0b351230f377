// SPDX-License-Identifier: MPL-2.0
//! Cosmetic interpolation between committed values.
//!
//! A [`Transition`] is a pure function of time: the renderer samples it with
//! the current instant on every frame. Committing a new value while a
//! transition is still running retargets it from wherever it currently is,
//! so there is never anything to cancel.

use super::transform::{Motion, Offset, TransformState};
use crate::app::config::{
    DEFAULT_DRAWER_MS, DEFAULT_EASE_MS, DEFAULT_SPRING_MS, DEFAULT_TRANSFORM_MS,
};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Easing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseOut,
    /// Under-damped spring; overshoots slightly before settling.
    Spring,
}

impl Curve {
    const SPRING_DAMPING: f32 = 6.0;
    const SPRING_FREQUENCY: f32 = 1.25;

    /// Eased progress for `t` in `[0, 1]`. Exact at both ends.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Curve::Linear => t,
            Curve::EaseOut => 1.0 - (1.0 - t).powi(3),
            Curve::Spring => {
                1.0 - (-Self::SPRING_DAMPING * t).exp() * (TAU * Self::SPRING_FREQUENCY * t).cos()
            }
        }
    }
}

/// Values that can be interpolated.
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Offset {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// Retargetable interpolation toward the last committed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T> {
    from: T,
    to: T,
    started_at: Option<Instant>,
    duration: Duration,
    curve: Curve,
}

impl<T: Lerp> Transition<T> {
    /// A settled transition resting at `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration: Duration::ZERO,
            curve: Curve::Linear,
        }
    }

    /// The value the transition settles at.
    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    /// Starts moving toward `target` from the value displayed at `now`.
    pub fn retarget(&mut self, target: T, curve: Curve, duration: Duration, now: Instant) {
        if duration.is_zero() {
            self.jump_to(target);
            return;
        }

        self.from = self.value_at(now);
        self.to = target;
        self.started_at = Some(now);
        self.duration = duration;
        self.curve = curve;
    }

    /// Settles at `target` without animating.
    pub fn jump_to(&mut self, target: T) {
        self.from = target;
        self.to = target;
        self.started_at = None;
    }

    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started_at {
            None => 1.0,
            Some(started_at) => {
                let elapsed = now.saturating_duration_since(started_at);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
        }
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, self.curve.apply(progress))
        }
    }

    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Animation durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Linear follow used while dragging or pinching.
    pub transform: Duration,
    /// Spring used by double-tap and reset.
    pub spring: Duration,
    /// Ease used by the step buttons.
    pub ease: Duration,
    /// Drawer slide.
    pub drawer: Duration,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            transform: Duration::from_millis(DEFAULT_TRANSFORM_MS),
            spring: Duration::from_millis(DEFAULT_SPRING_MS),
            ease: Duration::from_millis(DEFAULT_EASE_MS),
            drawer: Duration::from_millis(DEFAULT_DRAWER_MS),
        }
    }
}

impl AnimationSettings {
    /// Curve and duration used for a transform motion.
    #[must_use]
    pub fn for_motion(&self, motion: Motion) -> (Curve, Duration) {
        match motion {
            Motion::Immediate => (Curve::Linear, Duration::ZERO),
            Motion::Linear => (Curve::Linear, self.transform),
            Motion::Ease => (Curve::EaseOut, self.ease),
            Motion::Spring => (Curve::Spring, self.spring),
        }
    }
}

/// Displayed transform, trailing the committed one.
#[derive(Debug, Clone)]
pub struct AnimatedTransform {
    scale: Transition<f32>,
    offset: Transition<Offset>,
    settings: AnimationSettings,
}

impl AnimatedTransform {
    #[must_use]
    pub fn new(settings: AnimationSettings) -> Self {
        Self {
            scale: Transition::new(TransformState::REST.scale),
            offset: Transition::new(TransformState::REST.offset),
            settings,
        }
    }

    pub fn retarget(&mut self, state: TransformState, motion: Motion, now: Instant) {
        let (curve, duration) = self.settings.for_motion(motion);
        self.scale.retarget(state.scale, curve, duration, now);
        self.offset.retarget(state.offset, curve, duration, now);
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> TransformState {
        TransformState::new(self.scale.value_at(now), self.offset.value_at(now))
    }

    /// The committed transform this animation settles at.
    #[must_use]
    pub fn target(&self) -> TransformState {
        TransformState::new(self.scale.target(), self.offset.target())
    }

    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.scale.is_settled(now) && self.offset.is_settled(now)
    }
}

impl Default for AnimatedTransform {
    fn default() -> Self {
        Self::new(AnimationSettings::default())
    }
}
