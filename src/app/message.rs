// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageInfo;
use crate::ui::metadata_panel;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    MetadataPanel(metadata_panel::Message),
    NextImage,
    PreviousImage,
    /// Read the current image again from disk.
    Reload,
    ToggleSidebar,
    /// Trigger the open file dialog.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The background loader finished; `token` identifies the request.
    ImageLoaded {
        token: u64,
        result: Result<ImageInfo, Error>,
    },
    WindowOpened(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image or folder to open on startup.
    pub file_path: Option<String>,
}
