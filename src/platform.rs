// SPDX-License-Identifier: MPL-2.0
//! Integration with the desktop's file manager.

use crate::error::{Error, Result};
use crate::media::FileHandle;
use iced::window;

/// Reveals files in the system file manager.
pub trait FileManager {
    /// Shows `file` selected in a file manager window.
    ///
    /// `parent` is the window on whose behalf the request is made, if any.
    fn show_file(&self, file: &FileHandle, parent: Option<window::Id>) -> Result<()>;
}

/// The platform's own file manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileManager;

impl FileManager for SystemFileManager {
    fn show_file(&self, file: &FileHandle, parent: Option<window::Id>) -> Result<()> {
        log::debug!("revealing {} (parent window: {parent:?})", file.path().display());
        reveal(file)
    }
}

#[cfg(target_os = "windows")]
fn reveal(file: &FileHandle) -> Result<()> {
    spawn(
        std::process::Command::new("explorer.exe")
            .arg("/select,")
            .arg(file.path()),
    )
}

#[cfg(target_os = "macos")]
fn reveal(file: &FileHandle) -> Result<()> {
    spawn(std::process::Command::new("open").arg("-R").arg(file.path()))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn reveal(file: &FileHandle) -> Result<()> {
    let folder = file
        .parent()
        .map(|parent| parent.path().to_path_buf())
        .unwrap_or_else(|| file.path().to_path_buf());
    open_folder(&folder)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn open_folder(folder: &std::path::Path) -> Result<()> {
    open::that_detached(folder)
        .map_err(|err| Error::Io(format!("cannot open {}: {err}", folder.display())))
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
fn spawn(command: &mut std::process::Command) -> Result<()> {
    command
        .spawn()
        .map(|_| ())
        .map_err(|err| Error::Io(format!("cannot start file manager: {err}")))
}
