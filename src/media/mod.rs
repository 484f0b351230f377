// SPDX-License-Identifier: MPL-2.0
//! Page image files on disk.
//!
//! [`assets`] decides which file a page or its thumbnail is read from;
//! [`image`] decodes it into an iced image handle.

pub mod assets;
pub mod image;

pub use assets::{resolve_image, PageAssets};
pub use image::{load_image, load_page, ImageData, PageImages};
pub use extensions::IMAGE_EXTENSIONS;

/// Supported image extensions
pub mod extensions {
    /// Extensions tried, in order, when resolving an image name.
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

    /// Extension assumed when no candidate file exists.
    pub const FALLBACK_EXTENSION: &str = "png";
}

#[cfg(test)]
mod tests {
    use super::extensions;

    #[test]
    fn fallback_is_a_supported_extension() {
        assert!(extensions::IMAGE_EXTENSIONS.contains(&extensions::FALLBACK_EXTENSION));
    }
}
