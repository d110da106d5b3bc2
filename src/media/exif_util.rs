// SPDX-License-Identifier: MPL-2.0
//! Parsed EXIF tags and their display formatting.
//!
//! Every formatter takes an optional blob and returns [`PLACEHOLDER`] when
//! the blob or the tag is missing or cannot be interpreted.

use crate::i18n::fluent::I18n;
use chrono::NaiveDateTime;
use exif::{Field, In, Tag, Value};

/// Text shown for a metadata field without a value.
pub const PLACEHOLDER: &str = "";

/// EXIF timestamp layout (`YYYY:MM:DD HH:MM:SS`).
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// The EXIF fields of one image.
#[derive(Debug, Clone, Default)]
pub struct ExifData {
    fields: Vec<Field>,
}

impl ExifData {
    pub fn from_exif(exif: &exif::Exif) -> Self {
        Self {
            fields: exif.fields().cloned().collect(),
        }
    }

    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Looks `tag` up in the primary image first, then in any IFD.
    pub fn get(&self, tag: Tag) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.tag == tag && field.ifd_num == In::PRIMARY)
            .or_else(|| self.fields.iter().find(|field| field.tag == tag))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Formats `tag` for display.
///
/// Aperture, exposure time and metering mode get dedicated renderings;
/// every other tag uses the library's value display with ASCII quotes removed.
pub fn format_tag(blob: Option<&ExifData>, tag: Tag, i18n: &I18n) -> String {
    let Some(field) = blob.and_then(|data| data.get(tag)) else {
        return PLACEHOLDER.to_string();
    };

    let formatted = match tag {
        Tag::FNumber => first_rational(&field.value).map(|f| format!("f/{f:.1}")),
        Tag::ExposureTime => exposure_time(&field.value)
            .map(|value| i18n.tr_with_args("metadata-exposure-seconds", &[("value", &value)])),
        Tag::MeteringMode => field
            .value
            .get_uint(0)
            .map(|mode| i18n.tr(metering_mode_key(mode))),
        Tag::PhotographicSensitivity => field.value.get_uint(0).map(|iso| iso.to_string()),
        _ => None,
    };

    formatted.unwrap_or_else(|| generic_display(field))
}

/// Formats the focal length, adding the 35 mm film equivalent when recorded.
pub fn format_focal_length(blob: Option<&ExifData>, i18n: &I18n) -> String {
    let Some(data) = blob else {
        return PLACEHOLDER.to_string();
    };
    let Some(focal) = data
        .get(Tag::FocalLength)
        .and_then(|field| first_rational(&field.value))
    else {
        return PLACEHOLDER.to_string();
    };

    let focal_str = i18n.format_decimal(focal, 1);
    let equivalent = data
        .get(Tag::FocalLengthIn35mmFilm)
        .and_then(|field| field.value.get_uint(0))
        .filter(|value| *value > 0);

    match equivalent {
        Some(focal35) => i18n.tr_with_args(
            "metadata-focal-length-35mm",
            &[("focal", &focal_str), ("focal35", &focal35.to_string())],
        ),
        None => i18n.tr_with_args("metadata-focal-length", &[("focal", &focal_str)]),
    }
}

/// Formats a timestamp tag with a strftime `pattern`.
///
/// With a `locale`, month and day names and `%X`/`%x` follow that locale.
pub fn format_datetime_tag(
    blob: Option<&ExifData>,
    tag: Tag,
    pattern: &str,
    locale: Option<chrono::Locale>,
) -> String {
    let Some(datetime) = blob
        .and_then(|data| data.get(tag))
        .and_then(|field| first_ascii(&field.value))
        .and_then(|raw| parse_exif_datetime(&raw))
    else {
        return PLACEHOLDER.to_string();
    };

    match locale {
        Some(locale) => datetime
            .and_utc()
            .format_localized(pattern, locale)
            .to_string(),
        None => datetime.format(pattern).to_string(),
    }
}

/// Parse EXIF datetime format (YYYY:MM:DD HH:MM:SS).
pub fn parse_exif_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), EXIF_DATETIME_FORMAT).ok()
}

fn metering_mode_key(mode: u32) -> &'static str {
    match mode {
        1 => "metering-average",
        2 => "metering-center-weighted",
        3 => "metering-spot",
        4 => "metering-multi-spot",
        5 => "metering-pattern",
        6 => "metering-partial",
        255 => "metering-other",
        _ => "metering-unknown",
    }
}

/// Exposure below one second as a fraction (`1/250`), otherwise decimal.
fn exposure_time(value: &Value) -> Option<String> {
    let Value::Rational(rationals) = value else {
        return None;
    };
    let rational = rationals.first()?;
    if rational.denom == 0 || rational.num == 0 {
        return None;
    }

    let seconds = rational.to_f64();
    if seconds < 1.0 {
        let denominator = (1.0 / seconds).round();
        Some(format!("1/{denominator:.0}"))
    } else {
        let text = format!("{seconds:.1}");
        Some(text.strip_suffix(".0").map(str::to_string).unwrap_or(text))
    }
}

fn first_rational(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(rationals) => rationals
            .first()
            .filter(|r| r.denom != 0)
            .map(|r| r.to_f64()),
        _ => None,
    }
}

fn first_ascii(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(strings) => strings.first().map(|bytes| {
            String::from_utf8_lossy(bytes)
                .trim_end_matches('\0')
                .trim()
                .to_string()
        }),
        _ => None,
    }
}

fn generic_display(field: &Field) -> String {
    if let Some(text) = first_ascii(&field.value) {
        return text;
    }
    field
        .display_value()
        .to_string()
        .trim_matches('"')
        .trim()
        .to_string()
}
