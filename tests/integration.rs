// SPDX-License-Identifier: MPL-2.0
use lens_sidebar::config::{self, Config};
use lens_sidebar::directory_scanner::ImageList;
use lens_sidebar::i18n::fluent::I18n;
use lens_sidebar::media::load_image_info;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_png(path: &Path, width: u32, height: u32) {
    image_rs::RgbImage::new(width, height)
        .save(path)
        .expect("Failed to write png");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("sidebar-section-general"), "Général");
}

#[test]
fn test_sidebar_settings_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.sidebar.visible = Some(false);
    config.sidebar.width = Some(320.0);
    config.sidebar.show_metadata = Some(false);
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);
    assert_eq!(loaded.sidebar.effective_width(), 320.0);
}

#[test]
fn test_folder_navigation_wraps_around() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["c.png", "a.png", "b.jpg", "notes.txt"] {
        fs::write(dir.path().join(name), b"x").expect("Failed to write file");
    }

    let mut list = ImageList::scan_directory(&dir.path().join("c.png")).expect("scan");
    assert_eq!(list.len(), 3);
    assert_eq!(list.current_index(), Some(2));

    let next = list.next().map(Path::to_path_buf).expect("next");
    assert_eq!(next, dir.path().join("a.png"));
    list.set_current(&next);
    let previous = list.previous().map(Path::to_path_buf).expect("previous");
    assert_eq!(previous, dir.path().join("c.png"));
}

#[tokio::test]
async fn test_background_loader_reads_png() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("pixel.png");
    write_png(&path, 5, 3);

    let info = load_image_info(path.clone()).await.expect("load");
    assert_eq!(info.path, path);
    assert_eq!((info.width, info.height), (5, 3));
    assert!(info.byte_size > 0);
    assert!(info.exif.is_none());
}

#[tokio::test]
async fn test_background_loader_reports_missing_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let err = load_image_info(dir.path().join("missing.png"))
        .await
        .expect_err("missing file");
    assert_eq!(err.i18n_key(), "error-io");
}
