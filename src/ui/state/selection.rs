// SPDX-License-Identifier: MPL-2.0
//! Page selection state management
//!
//! Tracks which page of the static catalog is displayed and whether the
//! thumbnail drawer is visible.

use crate::domain::page::{Page, PageId, PageList};
use crate::domain::ui::SelectionState;
use crate::error::{Error, Result};

/// Owns the page list and the selection over it.
#[derive(Debug, Clone)]
pub struct PageSelector {
    pages: PageList,
    state: SelectionState,
}

impl PageSelector {
    /// Creates a selector showing the first page with the drawer closed.
    #[must_use]
    pub fn new(pages: PageList) -> Self {
        Self {
            pages,
            state: SelectionState::default(),
        }
    }

    /// Makes the page carrying `id` the active one.
    ///
    /// The active index is the id's position in the page list, so ids
    /// `10, 20` select indices `0, 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageId`] when no page has that id; the
    /// selection is left untouched.
    pub fn select_page(&mut self, id: PageId) -> Result<()> {
        let index = self
            .pages
            .position_of(id)
            .ok_or(Error::InvalidPageId(id))?;
        self.state.active_index = index;
        Ok(())
    }

    /// Opens the drawer if closed, closes it if open.
    pub fn toggle_drawer(&mut self) {
        self.state.drawer_open = !self.state.drawer_open;
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.state.drawer_open
    }

    #[must_use]
    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    /// The displayed page.
    #[must_use]
    pub fn active_page(&self) -> &Page {
        // active_index only ever comes from position_of on the same list
        self.pages
            .get(self.state.active_index)
            .unwrap_or_else(|| self.pages.first())
    }
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::new(PageList::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_pages() -> PageList {
        PageList::new(vec![
            Page::new(10, "first"),
            Page::new(20, "second"),
            Page::new(30, "third"),
        ])
        .expect("valid page list")
    }

    #[test]
    fn starts_on_first_page_with_drawer_closed() {
        let selector = PageSelector::new(three_pages());
        assert_eq!(selector.active_index(), 0);
        assert!(!selector.is_drawer_open());
        assert_eq!(selector.active_page().image_name(), "first");
    }

    #[test]
    fn select_page_accepts_every_listed_id() {
        let mut selector = PageSelector::new(three_pages());
        let ids: Vec<PageId> = selector.pages().iter().map(Page::id).collect();

        for (index, id) in ids.into_iter().enumerate() {
            selector.select_page(id).expect("listed id");
            assert_eq!(selector.active_index(), index);
            assert_eq!(selector.active_page().id(), id);
        }
    }

    #[test]
    fn select_page_with_builtin_ids_uses_id_as_index() {
        let mut selector = PageSelector::default();
        selector.select_page(PageId::new(1)).expect("builtin id");
        assert_eq!(selector.active_index(), 1);
    }

    #[test]
    fn unknown_id_is_rejected_without_state_change() {
        let mut selector = PageSelector::new(three_pages());
        selector.select_page(PageId::new(20)).expect("listed id");
        selector.toggle_drawer();
        let before = selector.state();

        let result = selector.select_page(PageId::new(99));

        assert_eq!(result, Err(Error::InvalidPageId(PageId::new(99))));
        assert_eq!(selector.state(), before);
    }

    #[test]
    fn toggle_drawer_twice_restores_original() {
        let mut selector = PageSelector::default();
        let original = selector.is_drawer_open();
        selector.toggle_drawer();
        assert_ne!(selector.is_drawer_open(), original);
        selector.toggle_drawer();
        assert_eq!(selector.is_drawer_open(), original);
    }
}
