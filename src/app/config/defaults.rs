// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Transition durations
//! - **Gestures**: Double-tap, drag and wheel thresholds
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Linear follow while dragging or pinching (in milliseconds).
pub const DEFAULT_TRANSFORM_MS: u64 = 1000;

/// Spring settle for double-tap and reset (in milliseconds).
pub const DEFAULT_SPRING_MS: u64 = 500;

/// Ease used by the step buttons (in milliseconds).
pub const DEFAULT_EASE_MS: u64 = 350;

/// Drawer slide (in milliseconds).
pub const DEFAULT_DRAWER_MS: u64 = 500;

/// Upper bound for any configured animation duration (in milliseconds).
pub const MAX_ANIMATION_MS: u64 = 5000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum delay between the two taps of a double-tap (in milliseconds).
pub const DEFAULT_DOUBLE_TAP_MS: u64 = 350;

/// Minimum accepted double-tap delay (in milliseconds).
pub const MIN_DOUBLE_TAP_MS: u64 = 100;

/// Maximum accepted double-tap delay (in milliseconds).
pub const MAX_DOUBLE_TAP_MS: u64 = 1000;

/// Maximum distance between the two taps of a double-tap (in pixels).
pub const DEFAULT_DOUBLE_TAP_DISTANCE: f32 = 8.0;

/// Distance a press must travel before it becomes a drag (in pixels).
pub const DEFAULT_DRAG_SLOP: f32 = 4.0;

/// Upper bound for the configured distances (in pixels).
pub const MAX_GESTURE_DISTANCE: f32 = 64.0;

/// Wheel silence that ends a wheel magnification (in milliseconds).
pub const DEFAULT_WHEEL_IDLE_MS: u64 = 250;

/// Minimum accepted wheel idle delay (in milliseconds).
pub const MIN_WHEEL_IDLE_MS: u64 = 50;

/// Maximum accepted wheel idle delay (in milliseconds).
pub const MAX_WHEEL_IDLE_MS: u64 = 2000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DOUBLE_TAP_MS >= MIN_DOUBLE_TAP_MS);
    assert!(DEFAULT_DOUBLE_TAP_MS <= MAX_DOUBLE_TAP_MS);
    assert!(DEFAULT_WHEEL_IDLE_MS >= MIN_WHEEL_IDLE_MS);
    assert!(DEFAULT_WHEEL_IDLE_MS <= MAX_WHEEL_IDLE_MS);
    assert!(DEFAULT_TRANSFORM_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_SPRING_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_EASE_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_DRAWER_MS <= MAX_ANIMATION_MS);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
