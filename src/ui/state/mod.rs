// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains all the viewer state logic separated from the main
//! App struct, so gestures, selection and animation can be tested without a
//! window.

pub mod animation;
pub mod gesture;
pub mod selection;
pub mod transform;

// Re-export commonly used types for convenience
pub use animation::{AnimatedTransform, AnimationSettings, Curve, Transition};
pub use gesture::{Gesture, GestureRecognizer, GestureSettings};
pub use selection::PageSelector;
pub use transform::TransformController;
