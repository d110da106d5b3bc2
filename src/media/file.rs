// SPDX-License-Identifier: MPL-2.0
//! File handles for images shown in the viewer.

use image_rs::{ImageFormat, ImageReader};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// A local file, addressed by absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    /// Creates a handle, making relative paths absolute against the
    /// current directory when possible.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The containing directory, or `None` for a filesystem root.
    pub fn parent(&self) -> Option<FileHandle> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(|parent| FileHandle {
                path: parent.to_path_buf(),
            })
    }

    /// Last path component; a root is its own basename (`/`).
    pub fn basename(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.to_string_lossy().into_owned(),
        }
    }

    /// Absolute local path, if the handle has one.
    pub fn local_path(&self) -> Option<&Path> {
        self.path.is_absolute().then_some(self.path.as_path())
    }

    /// `file://` URI with reserved bytes percent-encoded.
    pub fn uri(&self) -> String {
        let mut uri = String::from("file://");
        let raw = path_bytes(&self.path);
        if raw.first() != Some(&b'/') {
            uri.push('/');
        }
        for byte in raw {
            if byte.is_ascii_alphanumeric() || b"-._~/:".contains(&byte) {
                uri.push(byte as char);
            } else {
                let _ = write!(uri, "%{byte:02X}");
            }
        }
        uri
    }

    /// MIME type of the file.
    ///
    /// Sniffs the header first and falls back to the extension. Returns
    /// `None` when the file cannot be opened or the format is unknown.
    pub fn query_content_type(&self) -> Option<String> {
        let reader = match ImageReader::open(&self.path) {
            Ok(reader) => reader,
            Err(err) => {
                log::debug!("content type query failed for {}: {err}", self.path.display());
                return None;
            }
        };

        let sniffed = reader
            .with_guessed_format()
            .ok()
            .and_then(|reader| reader.format());
        if let Some(format) = sniffed.or_else(|| ImageFormat::from_path(&self.path).ok()) {
            return Some(format.to_mime_type().to_string());
        }

        let is_svg = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        is_svg.then(|| "image/svg+xml".to_string())
    }
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Vec<u8> {
    path.to_string_lossy().replace('\\', "/").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parent_and_basename_of_regular_file() {
        let file = FileHandle::new("/photos/2024/beach.jpg");
        let parent = file.parent().expect("has parent");
        assert_eq!(parent.basename(), "2024");
        assert_eq!(file.basename(), "beach.jpg");
    }

    #[cfg(not(windows))]
    #[test]
    fn root_has_no_parent_and_is_its_own_basename() {
        let root = FileHandle::new("/");
        assert!(root.parent().is_none());
        assert_eq!(root.basename(), "/");
        assert_eq!(root.local_path(), Some(Path::new("/")));
    }

    #[test]
    fn relative_paths_become_absolute() {
        let file = FileHandle::new("some/relative.png");
        assert!(file.path().is_absolute());
        assert!(file.local_path().is_some());
    }

    #[cfg(not(windows))]
    #[test]
    fn uri_percent_encodes_reserved_characters() {
        let file = FileHandle::new("/home/me/My Photos/été#1.jpg");
        assert_eq!(
            file.uri(),
            "file:///home/me/My%20Photos/%C3%A9t%C3%A9%231.jpg"
        );
    }

    #[test]
    fn content_type_is_sniffed_from_header() {
        let dir = tempdir().expect("temp dir");
        // PNG signature under a misleading extension
        let path = dir.path().join("picture.jpg");
        fs::write(&path, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").expect("write");

        let file = FileHandle::new(&path);
        assert_eq!(file.query_content_type().as_deref(), Some("image/png"));
    }

    #[test]
    fn content_type_falls_back_to_extension() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("picture.jpeg");
        fs::write(&path, b"not really a jpeg").expect("write");

        let file = FileHandle::new(&path);
        assert_eq!(file.query_content_type().as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn content_type_of_missing_file_is_none() {
        let file = FileHandle::new("/nonexistent/path/image.jpg");
        assert!(file.query_content_type().is_none());
    }

    #[test]
    fn content_type_of_unknown_file_is_none() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"plain text").expect("write");

        assert!(FileHandle::new(&path).query_content_type().is_none());
    }
}
