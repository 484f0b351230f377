// SPDX-License-Identifier: MPL-2.0
//! Resolves page and thumbnail names to files inside an assets directory.

use super::extensions::{FALLBACK_EXTENSION, IMAGE_EXTENSIONS};
use crate::domain::page::{Page, PageList};
use std::path::{Path, PathBuf};

/// Returns the first existing `<dir>/<name>.<ext>` over the supported
/// extensions, or `<dir>/<name>.png` when none exists.
#[must_use]
pub fn resolve_image(dir: &Path, name: &str) -> PathBuf {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| dir.join(format!("{name}.{FALLBACK_EXTENSION}")))
}

/// Image locations for the pages of one assets directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAssets {
    dir: PathBuf,
}

impl PageAssets {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn image_path(&self, page: &Page) -> PathBuf {
        resolve_image(&self.dir, page.image_name())
    }

    /// Thumbnail file for `page`; the full image when no thumbnail exists.
    #[must_use]
    pub fn thumbnail_path(&self, page: &Page) -> PathBuf {
        let thumbnail = resolve_image(&self.dir, &page.thumbnail_name());
        if thumbnail.is_file() {
            thumbnail
        } else {
            self.image_path(page)
        }
    }

    /// Page images that do not exist on disk.
    #[must_use]
    pub fn missing_images(&self, pages: &PageList) -> Vec<PathBuf> {
        pages
            .iter()
            .map(|page| self.image_path(page))
            .filter(|path| !path.is_file())
            .collect()
    }
}
