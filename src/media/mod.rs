// SPDX-License-Identifier: MPL-2.0
//! Image files and the information shown about them.
//!
//! - [`file`] - file handles: parent folder, URI, content type sniffing
//! - [`image`] - the shared image model and its background loader
//! - [`exif_util`] - parsed EXIF tags and their display formatting
//! - [`format`] - human-readable sizes and content type descriptions

pub mod exif_util;
pub mod file;
pub mod format;
pub mod image;

pub use exif_util::ExifData;
pub use file::FileHandle;
pub use image::{load_image_info, Image, ImageInfo};

use std::path::Path;

/// Supported image extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "avif", "tga", "qoi",
        "pnm", "pbm", "pgm", "ppm", "hdr", "exr",
    ];
}

/// Returns true if the path has a supported image extension (case-insensitive).
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_image_formats() {
        assert!(is_supported_image("photo.jpg"));
        assert!(is_supported_image("image.PNG"));
        assert!(is_supported_image("scan.tif"));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!is_supported_image("notes.txt"));
        assert!(!is_supported_image("movie.mp4"));
        assert!(!is_supported_image("no_extension"));
    }
}
