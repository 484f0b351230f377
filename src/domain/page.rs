// SPDX-License-Identifier: MPL-2.0
//! The static page catalog.
//!
//! Pages are loaded once at startup (built-in list or `[[pages]]` in the
//! settings file) and never mutated afterwards. A [`PageList`] is guaranteed
//! to be non-empty with unique ids, so any index it hands out stays valid for
//! the lifetime of the process.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Prefix prepended to an image name to form its thumbnail resource name.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// Stable identifier of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u32);

impl PageId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single displayable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    image_name: String,
}

impl Page {
    #[must_use]
    pub fn new(id: u32, image_name: impl Into<String>) -> Self {
        Self {
            id: PageId::new(id),
            image_name: image_name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Resource name of the drawer thumbnail (`thumb-<image name>`).
    #[must_use]
    pub fn thumbnail_name(&self) -> String {
        format!("{THUMBNAIL_PREFIX}{}", self.image_name)
    }
}

/// Reasons a page list can be rejected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageListError {
    Empty,
    DuplicateId(PageId),
}

impl fmt::Display for PageListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageListError::Empty => write!(f, "page list is empty"),
            PageListError::DuplicateId(id) => write!(f, "duplicate page id {id}"),
        }
    }
}

/// Non-empty, ordered list of pages with unique ids.
///
/// Cloning is cheap: the pages are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList {
    pages: Arc<[Page]>,
}

impl PageList {
    /// Validates and wraps the given pages.
    ///
    /// # Errors
    ///
    /// Returns [`PageListError::Empty`] for an empty list and
    /// [`PageListError::DuplicateId`] for the first repeated id.
    pub fn new(pages: Vec<Page>) -> Result<Self, PageListError> {
        if pages.is_empty() {
            return Err(PageListError::Empty);
        }

        let mut seen = HashSet::with_capacity(pages.len());
        for page in &pages {
            if !seen.insert(page.id()) {
                return Err(PageListError::DuplicateId(page.id()));
            }
        }

        Ok(Self {
            pages: pages.into(),
        })
    }

    /// The two magazine covers shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            pages: Arc::from(vec![
                Page::new(0, "magazine-front-cover"),
                Page::new(1, "magazine-back-cover"),
            ]),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Returns the first page. Never fails since the list is non-empty.
    #[must_use]
    pub fn first(&self) -> &Page {
        &self.pages[0]
    }

    /// Index of the page carrying `id`, if any.
    #[must_use]
    pub fn position_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|page| page.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }
}

impl Default for PageList {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_name_is_prefixed() {
        let page = Page::new(0, "magazine-front-cover");
        assert_eq!(page.thumbnail_name(), "thumb-magazine-front-cover");
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(PageList::new(Vec::new()), Err(PageListError::Empty));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = PageList::new(vec![Page::new(1, "a"), Page::new(2, "b"), Page::new(1, "c")]);
        assert_eq!(result, Err(PageListError::DuplicateId(PageId::new(1))));
    }

    #[test]
    fn position_of_follows_list_order() {
        let list = PageList::new(vec![Page::new(7, "a"), Page::new(3, "b")]).unwrap();
        assert_eq!(list.position_of(PageId::new(3)), Some(1));
        assert_eq!(list.position_of(PageId::new(7)), Some(0));
        assert_eq!(list.position_of(PageId::new(0)), None);
    }

    #[test]
    fn builtin_ids_match_their_positions() {
        let list = PageList::builtin();
        assert_eq!(list.len(), 2);
        for (index, page) in list.iter().enumerate() {
            assert_eq!(list.position_of(page.id()), Some(index));
            assert_eq!(page.id().value() as usize, index);
        }
    }
}
