// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - The single viewer screen: page canvas, info panel, controls, drawer
//! - [`state`] - Window-free state machines (transform, selection, gestures, animation)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod state;
pub mod theming;
pub mod viewer;
