// SPDX-License-Identifier: MPL-2.0
//! The image model shared between the viewer and the sidebar.
//!
//! An [`Image`] starts with what the filesystem knows (path, byte size).
//! Dimensions and EXIF arrive later from [`load_image_info`] and are applied
//! with [`Image::apply_info`], which notifies `content_changed` observers.

use crate::error::{Error, Result};
use crate::media::exif_util::ExifData;
use crate::media::file::FileHandle;
use crate::signal::Signal;
use image_rs::ImageReader;
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ImageState {
    width: u32,
    height: u32,
    byte_size: u64,
    exif: Option<Arc<ExifData>>,
}

/// An image file known to the viewer.
///
/// Shared as `Rc<Image>`; identity (pointer equality) distinguishes two
/// opens of the same path.
#[derive(Debug)]
pub struct Image {
    file: FileHandle,
    state: RefCell<ImageState>,
    content_changed: Signal<()>,
}

/// Everything the background loader learns about a file.
///
/// Plain data so it can travel through an iced `Message`.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub byte_size: u64,
    pub exif: Option<Arc<ExifData>>,
}

impl Image {
    /// Creates an image with the byte size from filesystem metadata and
    /// unknown (0 × 0) dimensions.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = FileHandle::new(path);
        let byte_size = fs::metadata(file.path()).map(|m| m.len()).unwrap_or(0);
        Self {
            file,
            state: RefCell::new(ImageState {
                byte_size,
                ..ImageState::default()
            }),
            content_changed: Signal::new(),
        }
    }

    /// Creates an image from known values without touching the filesystem.
    pub fn from_parts(
        file: FileHandle,
        width: u32,
        height: u32,
        byte_size: u64,
        exif: Option<ExifData>,
    ) -> Self {
        Self {
            file,
            state: RefCell::new(ImageState {
                width,
                height,
                byte_size,
                exif: exif.map(Arc::new),
            }),
            content_changed: Signal::new(),
        }
    }

    pub fn file(&self) -> &FileHandle {
        &self.file
    }

    /// Pixel width and height; `(0, 0)` until loaded.
    pub fn dimensions(&self) -> (u32, u32) {
        let state = self.state.borrow();
        (state.width, state.height)
    }

    pub fn byte_size(&self) -> u64 {
        self.state.borrow().byte_size
    }

    pub fn exif(&self) -> Option<Arc<ExifData>> {
        self.state.borrow().exif.clone()
    }

    /// Fired after the image data changed.
    pub fn content_changed(&self) -> &Signal<()> {
        &self.content_changed
    }

    /// Replaces the loaded data and notifies observers.
    pub fn apply_info(&self, info: ImageInfo) {
        {
            let mut state = self.state.borrow_mut();
            state.width = info.width;
            state.height = info.height;
            state.byte_size = info.byte_size;
            state.exif = info.exif;
        }
        self.content_changed.emit(&());
    }
}

/// Identity comparison of two optional images; two `None`s are the same.
pub fn same_image(a: Option<&Rc<Image>>, b: Option<&Rc<Image>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Reads dimensions, byte size and EXIF on a blocking thread.
pub async fn load_image_info(path: PathBuf) -> Result<ImageInfo> {
    tokio::task::spawn_blocking(move || read_image_info(&path))
        .await
        .map_err(|err| Error::Io(format!("image loader task failed: {err}")))?
}

/// Reads dimensions, byte size and EXIF of the file at `path`.
///
/// A file without EXIF is not an error.
pub fn read_image_info(path: &Path) -> Result<ImageInfo> {
    let byte_size = fs::metadata(path)?.len();
    let (width, height) = ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()?;

    Ok(ImageInfo {
        path: path.to_path_buf(),
        width,
        height,
        byte_size,
        exif: read_exif(path).map(Arc::new),
    })
}

fn read_exif(path: &Path) -> Option<ExifData> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Some(ExifData::from_exif(&exif)),
        Err(exif::Error::NotFound(_)) => None,
        Err(err) => {
            log::debug!("ignoring unreadable EXIF in {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        image_rs::RgbImage::new(width, height)
            .save(path)
            .expect("write png");
    }

    #[test]
    fn open_reads_byte_size_only() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("a.png");
        fs::write(&path, [0u8; 42]).expect("write");

        let image = Image::open(&path);
        assert_eq!(image.byte_size(), 42);
        assert_eq!(image.dimensions(), (0, 0));
        assert!(image.exif().is_none());
    }

    #[test]
    fn identity_not_path_decides_sameness() {
        let a = Rc::new(Image::open("/tmp/same.png"));
        let b = Rc::new(Image::open("/tmp/same.png"));
        assert!(same_image(Some(&a), Some(&a.clone())));
        assert!(!same_image(Some(&a), Some(&b)));
        assert!(!same_image(Some(&a), None));
        assert!(same_image(None, None));
    }

    #[test]
    fn open_missing_file_has_zero_size() {
        let image = Image::open("/nonexistent/missing.png");
        assert_eq!(image.byte_size(), 0);
    }

    #[test]
    fn read_image_info_reports_dimensions() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("wide.png");
        write_png(&path, 7, 3);

        let info = read_image_info(&path).expect("info");
        assert_eq!((info.width, info.height), (7, 3));
        assert_eq!(info.byte_size, fs::metadata(&path).expect("meta").len());
        assert!(info.exif.is_none());
    }

    #[test]
    fn read_image_info_rejects_non_images() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("fake.png");
        fs::write(&path, b"definitely not an image").expect("write");

        assert!(matches!(read_image_info(&path), Err(Error::Image(_))));
    }

    #[test]
    fn read_image_info_missing_file_is_io_error() {
        let result = read_image_info(Path::new("/nonexistent/missing.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn load_image_info_runs_off_thread() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("tall.png");
        write_png(&path, 2, 5);

        let info = load_image_info(path.clone()).await.expect("info");
        assert_eq!(info.path, path);
        assert_eq!((info.width, info.height), (2, 5));
    }

    #[test]
    fn apply_info_updates_state_and_notifies() {
        let image = Image::from_parts(FileHandle::new("/tmp/x.png"), 0, 0, 0, None);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _subscription = image
            .content_changed()
            .connect(move |_| counter.set(counter.get() + 1));

        image.apply_info(ImageInfo {
            path: PathBuf::from("/tmp/x.png"),
            width: 640,
            height: 480,
            byte_size: 1234,
            exif: Some(Arc::new(ExifData::default())),
        });

        assert_eq!(image.dimensions(), (640, 480));
        assert_eq!(image.byte_size(), 1234);
        assert!(image.exif().is_some());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn observers_may_read_the_image_while_notified() {
        let image = Rc::new(Image::from_parts(FileHandle::new("/tmp/y.png"), 1, 1, 1, None));
        let seen = Rc::new(Cell::new((0, 0)));
        let sink = seen.clone();
        let weak = Rc::downgrade(&image);
        let _subscription = image.content_changed().connect(move |_| {
            if let Some(image) = weak.upgrade() {
                sink.set(image.dimensions());
            }
        });

        image.apply_info(ImageInfo {
            path: PathBuf::from("/tmp/y.png"),
            width: 3,
            height: 9,
            byte_size: 10,
            exif: None,
        });
        assert_eq!(seen.get(), (3, 9));
    }
}
