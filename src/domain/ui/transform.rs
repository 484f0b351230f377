// SPDX-License-Identifier: MPL-2.0
//! Scale and pan value objects.

use std::ops::{Add, Mul, Sub};

// =============================================================================
// Scale Bounds
// =============================================================================

/// Scale bounds (1x to 5x) and the button step.
pub mod scale_bounds {
    /// Rest scale; the image fits the view.
    pub const MIN: f32 = 1.0;
    /// Largest scale the transform settles at.
    pub const MAX: f32 = 5.0;
    /// Increment applied by the step buttons.
    pub const STEP: f32 = 1.0;

    /// Returns whether `scale` lies inside `[MIN, MAX]`.
    #[must_use]
    pub fn contains(scale: f32) -> bool {
        (MIN..=MAX).contains(&scale)
    }
}

// =============================================================================
// Offset
// =============================================================================

/// Pan offset in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Offset {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// =============================================================================
// TransformState
// =============================================================================

/// Scale and pan applied to the displayed page.
///
/// `scale` normally lies in [`scale_bounds::MIN`]..=[`scale_bounds::MAX`] but
/// may leave that band while a pinch is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub offset: Offset,
}

impl TransformState {
    /// The rest state: `scale == 1.0`, no offset.
    pub const REST: Self = Self {
        scale: scale_bounds::MIN,
        offset: Offset::ZERO,
    };

    #[must_use]
    pub const fn new(scale: f32, offset: Offset) -> Self {
        Self { scale, offset }
    }

    #[must_use]
    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }

    /// Whether the scale is inside the settled band.
    #[must_use]
    pub fn is_in_bounds(&self) -> bool {
        scale_bounds::contains(self.scale)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::REST
    }
}
