// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for the images next to the opened file.
//!
//! The folder is scanned once for supported image extensions and sorted by
//! file name; navigation wraps around at both ends.

use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// The images of one folder with a current position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageList {
    images: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the folder containing `current_file`.
    ///
    /// The scan succeeds even if `current_file` itself is gone; the list then
    /// has no current position.
    pub fn scan_directory(current_file: &Path) -> Result<Self> {
        let parent = current_file
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?;

        let images = scan(parent)?;
        let current_index = images.iter().position(|p| p == current_file);
        Ok(Self {
            images,
            current_index,
        })
    }

    /// Scans `directory`, starting at its first image.
    pub fn scan_folder(directory: &Path) -> Result<Self> {
        let images = scan(directory)?;
        let current_index = (!images.is_empty()).then_some(0);
        Ok(Self {
            images,
            current_index,
        })
    }

    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.images.get(idx))
            .map(PathBuf::as_path)
    }

    /// The image after the current one, wrapping to the first.
    pub fn next(&self) -> Option<&Path> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        let index = self.current_index.map_or(0, |idx| (idx + 1) % len);
        self.images.get(index).map(PathBuf::as_path)
    }

    /// The image before the current one, wrapping to the last.
    pub fn previous(&self) -> Option<&Path> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        let index = self.current_index.map_or(len - 1, |idx| (idx + len - 1) % len);
        self.images.get(index).map(PathBuf::as_path)
    }

    /// Moves to `path` if it is in the list; otherwise the list has no
    /// current position.
    pub fn set_current(&mut self, path: &Path) {
        self.current_index = self.images.iter().position(|p| p == path);
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn scan(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && media::is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("found {} image(s) in {}", images.len(), directory.display());
    Ok(images)
}
