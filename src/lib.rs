// SPDX-License-Identifier: MPL-2.0
//! `pinch` is a single-screen image viewer built with the Iced GUI framework.
//!
//! Double-tap, drag and pinch gestures drive a bounded zoom and pan transform
//! over the active page, and a thumbnail drawer switches between a small,
//! fixed set of pages. Every state machine lives in [`ui::state`] and can be
//! driven without a window.

pub mod app;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
