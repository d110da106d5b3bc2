// SPDX-License-Identifier: MPL-2.0
//! Human-readable strings for the general section of the sidebar.

use crate::i18n::fluent::I18n;

const KB: u64 = 1000;
const MB: u64 = KB * 1000;
const GB: u64 = MB * 1000;
const TB: u64 = GB * 1000;
const PB: u64 = TB * 1000;
const EB: u64 = PB * 1000;

/// Format a byte count with decimal units and one fractional digit.
///
/// Sizes below 1 kB are spelled out with a pluralized unit ("1 byte",
/// "999 bytes").
pub fn format_file_size(i18n: &I18n, bytes: u64) -> String {
    if bytes < KB {
        return i18n.tr_with_numbers("file-size-bytes", &[("count", bytes)]);
    }

    let (unit, key) = match bytes {
        b if b >= EB => (EB, "file-size-eb"),
        b if b >= PB => (PB, "file-size-pb"),
        b if b >= TB => (TB, "file-size-tb"),
        b if b >= GB => (GB, "file-size-gb"),
        b if b >= MB => (MB, "file-size-mb"),
        _ => (KB, "file-size-kb"),
    };
    let value = i18n.format_decimal(bytes as f64 / unit as f64, 1);
    i18n.tr_with_args(key, &[("value", &value)])
}

/// "W × H pixels", pluralized on the height.
pub fn format_image_size(i18n: &I18n, width: u32, height: u32) -> String {
    i18n.tr_with_numbers(
        "metadata-image-size",
        &[("width", u64::from(width)), ("height", u64::from(height))],
    )
}

/// Localized description of a MIME type, or the MIME type itself when no
/// description is known.
pub fn describe_content_type(i18n: &I18n, mime: &str) -> String {
    let key: String = mime
        .chars()
        .map(|c| match c {
            '/' | '+' | '.' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect();
    i18n.try_tr(&format!("content-type-{key}"))
        .unwrap_or_else(|| mime.to_string())
}
