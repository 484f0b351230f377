// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the gesture and
//! selection logic can be tested without a window.
//!
//! # Modules
//!
//! - [`page`]: The static page catalog ([`Page`](page::Page),
//!   [`PageId`](page::PageId), [`PageList`](page::PageList))
//! - [`ui`]: UI value objects ([`TransformState`](ui::TransformState),
//!   [`Offset`](ui::Offset), [`SelectionState`](ui::SelectionState))

pub mod page;
pub mod ui;
