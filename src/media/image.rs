// SPDX-License-Identifier: MPL-2.0
//! Page image decoding.

use super::assets::PageAssets;
use crate::domain::page::Page;
use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::{GenericImageView, ImageError};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Natural size in logical pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Decoded full image and thumbnail of one page.
#[derive(Debug, Clone)]
pub struct PageImages {
    pub image: ImageData,
    pub thumbnail: ImageData,
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Loads the full image and thumbnail of `page`.
///
/// # Errors
///
/// Returns [`Error::Io`] if either file cannot be read or decoded.
pub fn load_page(assets: &PageAssets, page: &Page) -> Result<PageImages> {
    let image = load_image(assets.image_path(page))?;
    let thumbnail_path = assets.thumbnail_path(page);
    let thumbnail = if thumbnail_path == assets.image_path(page) {
        image.clone()
    } else {
        load_image(thumbnail_path)?
    };

    Ok(PageImages { image, thumbnail })
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Io(err.to_string())
    }
}
