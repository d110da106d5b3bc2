// SPDX-License-Identifier: MPL-2.0
//! `lens_sidebar` is an image viewer with a metadata sidebar built with the
//! Iced GUI framework.
//!
//! The sidebar follows the image shown in the viewer and lists its general
//! properties (dimensions, type, size, folder) along with the EXIF camera
//! settings when the `metadata` feature is enabled.

#![doc(html_root_url = "https://docs.rs/lens_sidebar/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod media;
pub mod platform;
pub mod signal;
pub mod ui;
