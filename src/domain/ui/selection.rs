// SPDX-License-Identifier: MPL-2.0
//! Active page and drawer visibility.

/// Which page is displayed and whether the thumbnail drawer is open.
///
/// `active_index` is only ever set by the page selector, which checks it
/// against the page list first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub active_index: usize,
    pub drawer_open: bool,
}
