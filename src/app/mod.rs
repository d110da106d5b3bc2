// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer and the
//! metadata sidebar.
//!
//! The `App` owns the viewer window, the folder's image list and the sidebar,
//! and translates messages into side effects: loading images in the
//! background, revealing files, persisting the sidebar visibility.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::directory_scanner::ImageList;
use crate::i18n::fluent::I18n;
use crate::media::{self, load_image_info, Image, ImageInfo};
use crate::platform::{FileManager, SystemFileManager};
use crate::ui::metadata_panel::{self, Capabilities, MetadataPanel};
use crate::ui::viewer::ViewerWindow;
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 650.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    i18n: Rc<I18n>,
    config: Config,
    window: Rc<ViewerWindow>,
    panel: MetadataPanel,
    images: ImageList,
    file_manager: Box<dyn FileManager>,
    sidebar_visible: bool,
    /// Token of the most recent load request; older results are dropped.
    load_token: u64,
    /// i18n key of the error shown above the viewer.
    error: Option<&'static str>,
    /// Directory `settings.toml` is written to; `None` uses the default.
    settings_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("panel", &self.panel)
            .field("images", &self.images.len())
            .field("sidebar_visible", &self.sidebar_visible)
            .field("load_token", &self.load_token)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and localization, then opens `flags.file_path` if given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = Rc::new(I18n::new(flags.lang.clone(), &config));

        let mut app = Self::with_config(config, i18n, Box::new(SystemFileManager));
        if let Some(key) = config_warning {
            log::warn!("{}", app.i18n.tr(&key));
        }

        let task = match flags.file_path {
            Some(path) => app.open_initial(PathBuf::from(path)),
            None => Task::none(),
        };
        (app, task)
    }

    /// Builds the application around `config` without touching the disk.
    pub fn with_config(config: Config, i18n: Rc<I18n>, file_manager: Box<dyn FileManager>) -> Self {
        let window = Rc::new(ViewerWindow::new());
        let panel = MetadataPanel::new(
            window.clone(),
            None,
            i18n.clone(),
            Capabilities::from_config(&config),
        );
        panel.set_width(config.sidebar.effective_width());
        let sidebar_visible = config
            .sidebar
            .visible
            .unwrap_or(config::DEFAULT_SIDEBAR_VISIBLE);

        Self {
            i18n,
            config,
            window,
            panel,
            images: ImageList::new(),
            file_manager,
            sidebar_visible,
            load_token: 0,
            error: None,
            settings_dir: None,
        }
    }

    /// Persists settings under `dir` instead of the default config directory.
    pub fn with_settings_dir(mut self, dir: PathBuf) -> Self {
        self.settings_dir = Some(dir);
        self
    }

    pub fn panel(&self) -> &MetadataPanel {
        &self.panel
    }

    pub fn window(&self) -> &Rc<ViewerWindow> {
        &self.window
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    fn title(&self) -> String {
        match self.window.current_image() {
            Some(image) => self.i18n.tr_with_args(
                "window-title-with-file",
                &[("file", &image.file().basename())],
            ),
            None => self.i18n.tr("window-title"),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            window: &self.window,
            images: &self.images,
            panel: &self.panel,
            sidebar_visible: self.sidebar_visible,
            error: self.error,
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MetadataPanel(message) => {
                match metadata_panel::update(message) {
                    metadata_panel::Event::RevealRequested(uri) => {
                        self.panel.folder_activated(&uri, self.file_manager.as_ref());
                    }
                    metadata_panel::Event::Close => self.set_sidebar_visible(false),
                }
                Task::none()
            }
            Message::NextImage => match self.images.next().map(Path::to_path_buf) {
                Some(path) => self.open(path),
                None => Task::none(),
            },
            Message::PreviousImage => match self.images.previous().map(Path::to_path_buf) {
                Some(path) => self.open(path),
                None => Task::none(),
            },
            Message::Reload => match self.window.current_image() {
                Some(image) => self.load(image.file().path().to_path_buf()),
                None => Task::none(),
            },
            Message::ToggleSidebar => {
                self.set_sidebar_visible(!self.sidebar_visible);
                Task::none()
            }
            Message::OpenFileDialog => open_file_dialog(self.i18n.tr("open-dialog-filter-images")),
            Message::OpenFileDialogResult(Some(path)) | Message::FileDropped(path) => {
                self.open_initial(path)
            }
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::ImageLoaded { token, result } => {
                self.apply_loaded(token, result);
                Task::none()
            }
            Message::WindowOpened(id) => {
                self.window.set_window_id(id);
                Task::none()
            }
        }
    }

    /// Opens `path` (a file or a folder) and scans its folder for navigation.
    fn open_initial(&mut self, path: PathBuf) -> Task<Message> {
        let path = std::path::absolute(&path).unwrap_or(path);
        let scanned = if path.is_dir() {
            ImageList::scan_folder(&path)
        } else {
            ImageList::scan_directory(&path)
        };

        match scanned {
            Ok(images) => self.images = images,
            Err(err) => {
                log::warn!("cannot scan folder of {}: {err}", path.display());
                self.images = ImageList::new();
            }
        }

        let target = if path.is_dir() {
            self.images.current().map(Path::to_path_buf)
        } else {
            Some(path)
        };
        match target {
            Some(file) => self.open(file),
            None => Task::none(),
        }
    }

    /// Shows `path` in the viewer and starts loading its details.
    fn open(&mut self, path: PathBuf) -> Task<Message> {
        if !media::is_supported_image(&path) {
            log::debug!("opening file with unrecognized extension: {}", path.display());
        }
        self.images.set_current(&path);
        self.error = None;

        let image = Rc::new(Image::open(path.clone()));
        self.window.view().set_image(Some(image));
        self.load(path)
    }

    /// Starts the background loader for `path`; only the latest request is
    /// applied when results arrive.
    fn load(&mut self, path: PathBuf) -> Task<Message> {
        self.load_token += 1;
        let token = self.load_token;
        Task::perform(load_image_info(path), move |result| Message::ImageLoaded {
            token,
            result,
        })
    }

    fn apply_loaded(&mut self, token: u64, result: crate::error::Result<ImageInfo>) {
        if token != self.load_token {
            log::debug!("dropping stale image load (token {token}, current {})", self.load_token);
            return;
        }

        match result {
            Ok(info) => match self.window.current_image() {
                Some(image) if image.file().path() == info.path => image.apply_info(info),
                _ => log::debug!("loaded {} is no longer shown", info.path.display()),
            },
            Err(err) => {
                log::warn!("{err}");
                self.error = Some(err.i18n_key());
            }
        }
    }

    fn set_sidebar_visible(&mut self, visible: bool) {
        if self.sidebar_visible == visible {
            return;
        }
        self.sidebar_visible = visible;
        self.config.sidebar.visible = Some(visible);
        if let Err(err) = config::save_with_override(&self.config, self.settings_dir.clone()) {
            log::warn!("failed to save settings: {err}");
        }
    }
}

fn open_file_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, media::extensions::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}
