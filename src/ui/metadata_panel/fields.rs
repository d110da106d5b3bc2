// SPDX-License-Identifier: MPL-2.0
//! Display values of the sidebar, computed from an image.

use crate::i18n::fluent::I18n;
use crate::media::exif_util::{self, ExifData};
use crate::media::format::{describe_content_type, format_file_size, format_image_size};
use crate::media::{FileHandle, Image};
use exif::Tag;

/// The containing folder, shown as a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderLink {
    /// Folder name.
    pub label: String,
    /// Full local path of the folder.
    pub tooltip: String,
    /// `file://` URI of the folder.
    pub uri: String,
}

impl FolderLink {
    /// Link to the folder containing `file`; a root links to itself.
    pub fn for_file(file: &FileHandle) -> Self {
        let folder = file.parent().unwrap_or_else(|| file.clone());
        Self {
            label: folder.basename(),
            tooltip: folder
                .local_path()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            uri: folder.uri(),
        }
    }
}

/// File attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralFields {
    pub size: String,
    pub content_type: String,
    pub file_size: String,
    pub folder: Option<FolderLink>,
}

impl GeneralFields {
    /// Blanks size, type and file size. The folder link is kept.
    pub fn clear(&mut self) {
        self.size.clear();
        self.content_type.clear();
        self.file_size.clear();
    }

    pub fn fill(&mut self, image: &Image, i18n: &I18n) {
        // 0 × 0 means the loader has not read the header (yet).
        self.size = match image.dimensions() {
            (0, _) | (_, 0) => String::new(),
            (width, height) => format_image_size(i18n, width, height),
        };

        let file = image.file();
        self.content_type = match file.query_content_type() {
            Some(mime) => describe_content_type(i18n, &mime),
            None => i18n.tr("metadata-value-unknown"),
        };

        self.file_size = format_file_size(i18n, image.byte_size());
        self.folder = Some(FolderLink::for_file(file));
    }
}

/// Photographic metadata read from EXIF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFields {
    pub aperture: String,
    pub exposure: String,
    pub focal_length: String,
    pub iso: String,
    pub metering: String,
    pub model: String,
    pub date: String,
    pub time: String,
}

impl MetadataFields {
    /// Recomputes every field; a missing blob blanks them all.
    pub fn fill(&mut self, blob: Option<&ExifData>, i18n: &I18n) {
        self.aperture = exif_util::format_tag(blob, Tag::FNumber, i18n);
        self.exposure = exif_util::format_tag(blob, Tag::ExposureTime, i18n);
        self.focal_length = exif_util::format_focal_length(blob, i18n);
        self.iso = exif_util::format_tag(blob, Tag::PhotographicSensitivity, i18n);
        self.metering = exif_util::format_tag(blob, Tag::MeteringMode, i18n);
        self.model = exif_util::format_tag(blob, Tag::Model, i18n);

        let locale = Some(i18n.chrono_locale());
        self.date = exif_util::format_datetime_tag(
            blob,
            Tag::DateTimeOriginal,
            &i18n.tr("metadata-date-format"),
            locale,
        );
        self.time = exif_util::format_datetime_tag(
            blob,
            Tag::DateTimeOriginal,
            &i18n.tr("metadata-time-format"),
            locale,
        );
    }

    /// Label key and value of each field, in display order.
    pub fn rows(&self) -> [(&'static str, &str); 8] {
        [
            ("metadata-label-aperture", &self.aperture),
            ("metadata-label-exposure", &self.exposure),
            ("metadata-label-focal-length", &self.focal_length),
            ("metadata-label-iso", &self.iso),
            ("metadata-label-metering", &self.metering),
            ("metadata-label-model", &self.model),
            ("metadata-label-date", &self.date),
            ("metadata-label-time", &self.time),
        ]
    }
}
