// SPDX-License-Identifier: MPL-2.0
//! Image viewer module responsible for rendering the active page and the
//! overlays around it.
//!
//! - [`canvas`] - Page drawn under the displayed transform
//! - [`info_panel`] - Scale and offset readout
//! - [`controls`] - Step down, reset and step up buttons
//! - [`drawer`] - Thumbnail drawer with its handle
//! - [`component`] - State and update logic tying them together

pub mod canvas;
pub mod component;
pub mod controls;
pub mod drawer;
pub mod info_panel;

pub use component::{Effect, Message, State};
