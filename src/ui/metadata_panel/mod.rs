// SPDX-License-Identifier: MPL-2.0
//! Metadata sidebar showing properties of the image in the viewer.
//!
//! The panel follows the viewer window's current image: it subscribes to the
//! view's image changes and to the bound image's content changes, and
//! recomputes its display fields on each. The "General" section (size, type,
//! file size, folder) is always present; the "Details" section with EXIF
//! values only when the metadata capability is enabled.
//!
//! Subscriptions are [`Subscription`] guards owned by the panel, so dropping
//! the panel disconnects from both the view and the image.

pub mod fields;
pub mod view;

pub use fields::{FolderLink, GeneralFields, MetadataFields};
pub use view::PANEL_WIDTH;

use crate::config::{Config, DEFAULT_SHOW_METADATA};
use crate::i18n::fluent::I18n;
use crate::media::image::{same_image, Image};
use crate::platform::FileManager;
use crate::signal::{Signal, Subscription};
use crate::ui::viewer::ViewerWindow;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Optional parts of the panel, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// EXIF "Details" section.
    pub metadata: bool,
}

impl Capabilities {
    /// Everything the build supports.
    pub const fn full() -> Self {
        Self {
            metadata: cfg!(feature = "metadata"),
        }
    }

    /// What the build supports, narrowed by the user's settings.
    pub fn from_config(config: &Config) -> Self {
        let wanted = config
            .sidebar
            .show_metadata
            .unwrap_or(DEFAULT_SHOW_METADATA);
        Self {
            metadata: Self::full().metadata && wanted,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}

/// Messages emitted by the panel's widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The folder link was activated; carries the folder URI.
    FolderLinkPressed(String),
    /// Close the panel.
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Reveal the current image in the file manager.
    RevealRequested(String),
    /// Close the panel.
    Close,
}

/// Process a panel message and return the event for the host.
pub fn update(message: Message) -> Event {
    match message {
        Message::FolderLinkPressed(uri) => Event::RevealRequested(uri),
        Message::Close => Event::Close,
    }
}

#[derive(Default)]
struct PanelState {
    image: Option<Rc<Image>>,
    content_subscription: Option<Subscription>,
    general: GeneralFields,
    metadata: Option<MetadataFields>,
    revision: u64,
}

struct Inner {
    state: RefCell<PanelState>,
    context: Rc<ViewerWindow>,
    i18n: Rc<I18n>,
    capabilities: Capabilities,
    image_notify: Signal<Option<Rc<Image>>>,
}

impl Inner {
    fn set_image(self: &Rc<Self>, image: Option<Rc<Image>>) {
        let (old_subscription, old_image) = {
            let mut state = self.state.borrow_mut();
            if same_image(state.image.as_ref(), image.as_ref()) {
                return;
            }
            let old_subscription = state.content_subscription.take();
            let old_image = std::mem::replace(&mut state.image, image.clone());
            (old_subscription, old_image)
        };
        drop(old_subscription);
        drop(old_image);

        if let Some(bound) = &image {
            let weak: Weak<Inner> = Rc::downgrade(self);
            let subscription = bound.content_changed().connect(move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.recompute();
                }
            });
            self.state.borrow_mut().content_subscription = Some(subscription);
            self.recompute();
        }

        self.image_notify.emit(&image);
    }

    fn recompute(&self) {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        state.revision += 1;

        match &state.image {
            Some(image) => state.general.fill(image, &self.i18n),
            None => state.general.clear(),
        }

        if let Some(metadata) = state.metadata.as_mut() {
            let exif = state.image.as_ref().and_then(|image| image.exif());
            metadata.fill(exif.as_deref(), &self.i18n);
        }
    }
}

/// The metadata sidebar of a viewer window.
pub struct MetadataPanel {
    inner: Rc<Inner>,
    _view_subscription: Subscription,
    width: Cell<f32>,
}

impl MetadataPanel {
    /// Creates a panel following `context`'s view, initially showing
    /// `initial_image`.
    pub fn new(
        context: Rc<ViewerWindow>,
        initial_image: Option<Rc<Image>>,
        i18n: Rc<I18n>,
        capabilities: Capabilities,
    ) -> Self {
        let inner = Rc::new(Inner {
            state: RefCell::new(PanelState {
                metadata: capabilities.metadata.then(MetadataFields::default),
                ..PanelState::default()
            }),
            context,
            i18n,
            capabilities,
            image_notify: Signal::new(),
        });

        inner.recompute();

        let weak = Rc::downgrade(&inner);
        let view_subscription = inner.context.view().image_changed().connect(move |image| {
            if let Some(inner) = weak.upgrade() {
                inner.set_image(image.clone());
            }
        });

        inner.set_image(initial_image);

        Self {
            inner,
            _view_subscription: view_subscription,
            width: Cell::new(PANEL_WIDTH),
        }
    }

    /// The image whose properties are shown.
    pub fn image(&self) -> Option<Rc<Image>> {
        self.inner.state.borrow().image.clone()
    }

    /// Binds `image`; rebinding the bound image does nothing.
    pub fn set_image(&self, image: Option<Rc<Image>>) {
        self.inner.set_image(image);
    }

    /// The window the panel belongs to.
    pub fn context(&self) -> &Rc<ViewerWindow> {
        &self.inner.context
    }

    pub fn capabilities(&self) -> Capabilities {
        self.inner.capabilities
    }

    /// Refreshes every field from the bound image.
    pub fn recompute(&self) {
        self.inner.recompute();
    }

    /// Number of recomputations so far.
    pub fn revision(&self) -> u64 {
        self.inner.state.borrow().revision
    }

    pub fn general(&self) -> GeneralFields {
        self.inner.state.borrow().general.clone()
    }

    /// EXIF fields, `None` without the metadata capability.
    pub fn metadata(&self) -> Option<MetadataFields> {
        self.inner.state.borrow().metadata.clone()
    }

    /// Notifies `handler` after each change of the bound image.
    #[must_use = "dropping the subscription disconnects the handler immediately"]
    pub fn connect_image_notify(
        &self,
        handler: impl Fn(&Option<Rc<Image>>) + 'static,
    ) -> Subscription {
        self.inner.image_notify.connect(handler)
    }

    pub fn width(&self) -> f32 {
        self.width.get()
    }

    pub fn set_width(&self, width: f32) {
        self.width.set(width);
    }

    /// Reveals the window's current image in the file manager.
    ///
    /// The image is looked up at call time, so a click always targets what
    /// the window shows now.
    pub fn folder_activated(&self, uri: &str, file_manager: &dyn FileManager) {
        let context = &self.inner.context;
        let Some(image) = context.current_image() else {
            log::debug!("folder link {uri} activated without a current image");
            return;
        };

        if let Err(err) = file_manager.show_file(image.file(), context.window_id()) {
            log::warn!(
                "failed to show {} in the file manager: {err}",
                image.file().path().display()
            );
        }
    }
}

impl std::fmt::Debug for MetadataPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("MetadataPanel")
            .field("image", &state.image.as_ref().map(|image| image.file().path()))
            .field("revision", &state.revision)
            .field("capabilities", &self.inner.capabilities)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::exif_util::{ExifData, PLACEHOLDER};
    use crate::media::{FileHandle, ImageInfo};
    use crate::platform::testing::RecordingFileManager;
    use exif::{Field, In, Rational, Tag, Value};

    fn i18n() -> Rc<I18n> {
        Rc::new(I18n::new(Some("en-US".to_string()), &Config::default()))
    }

    fn image(path: &str, width: u32, height: u32) -> Rc<Image> {
        Rc::new(Image::from_parts(FileHandle::new(path), width, height, 1500, None))
    }

    fn panel(context: &Rc<ViewerWindow>) -> MetadataPanel {
        MetadataPanel::new(context.clone(), None, i18n(), Capabilities { metadata: true })
    }

    fn camera_exif() -> ExifData {
        ExifData::from_fields(vec![
            Field {
                tag: Tag::FNumber,
                ifd_num: In::PRIMARY,
                value: Value::Rational(vec![Rational { num: 56, denom: 10 }]),
            },
            Field {
                tag: Tag::Model,
                ifd_num: In::PRIMARY,
                value: Value::Ascii(vec![b"X-T4".to_vec()]),
            },
        ])
    }

    #[test]
    fn update_maps_messages_to_events() {
        assert_eq!(
            update(Message::FolderLinkPressed("file:///a".into())),
            Event::RevealRequested("file:///a".into())
        );
        assert_eq!(update(Message::Close), Event::Close);
    }

    #[test]
    fn new_panel_without_image_is_blank() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);
        let general = panel.general();
        assert!(general.size.is_empty());
        assert!(general.content_type.is_empty());
        assert!(general.file_size.is_empty());
        assert!(general.folder.is_none());
        assert_eq!(panel.revision(), 1);
    }

    #[test]
    fn initial_image_is_bound_and_shown() {
        let context = Rc::new(ViewerWindow::new());
        let shown = image("/photos/a.png", 4, 2);
        let panel = MetadataPanel::new(
            context,
            Some(shown.clone()),
            i18n(),
            Capabilities { metadata: true },
        );

        assert!(Rc::ptr_eq(&panel.image().expect("bound"), &shown));
        assert_eq!(panel.general().size, "4 × 2 pixels");
        assert_eq!(shown.content_changed().handler_count(), 1);
    }

    #[test]
    fn follows_the_view_image() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);

        let shown = image("/photos/b.png", 3, 1);
        context.view().set_image(Some(shown.clone()));

        assert!(Rc::ptr_eq(&panel.image().expect("bound"), &shown));
        assert_eq!(panel.general().size, "3 × 1 pixel");
    }

    #[test]
    fn rebinding_moves_the_single_subscription() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);
        let first = image("/photos/a1.png", 2, 2);
        let second = image("/photos/b1.png", 3, 3);

        panel.set_image(Some(first.clone()));
        let before = panel.revision();
        panel.set_image(Some(second.clone()));

        assert_eq!(first.content_changed().handler_count(), 0);
        assert_eq!(second.content_changed().handler_count(), 1);
        assert_eq!(panel.revision(), before + 1);
        assert_eq!(panel.general().size, "3 × 3 pixels");
    }

    #[test]
    fn rebinding_the_same_image_does_not_recompute() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);
        let shown = image("/photos/b2.png", 3, 3);

        panel.set_image(Some(shown.clone()));
        let before = panel.revision();
        panel.set_image(Some(shown.clone()));

        assert_eq!(panel.revision(), before);
        assert_eq!(shown.content_changed().handler_count(), 1);
        assert!(Rc::ptr_eq(&panel.image().expect("bound"), &shown));
    }

    #[test]
    fn content_change_triggers_recompute() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);
        let shown = image("/photos/c.png", 0, 0);
        panel.set_image(Some(shown.clone()));
        let before = panel.revision();

        shown.apply_info(ImageInfo {
            path: "/photos/c.png".into(),
            width: 1,
            height: 1,
            byte_size: 999,
            exif: Some(std::sync::Arc::new(camera_exif())),
        });

        assert_eq!(panel.revision(), before + 1);
        assert_eq!(panel.general().size, "1 × 1 pixel");
        assert_eq!(panel.general().file_size, "999 bytes");
        let metadata = panel.metadata().expect("metadata enabled");
        assert_eq!(metadata.aperture, "f/5.6");
        assert_eq!(metadata.model, "X-T4");
    }

    #[test]
    fn unbinding_keeps_fields_until_next_recompute() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);
        let shown = image("/photos/d.png", 8, 8);
        panel.set_image(Some(shown.clone()));
        let revision = panel.revision();

        panel.set_image(None);
        assert_eq!(panel.revision(), revision);
        assert_eq!(panel.general().size, "8 × 8 pixels");
        assert_eq!(shown.content_changed().handler_count(), 0);

        panel.recompute();
        let general = panel.general();
        assert!(general.size.is_empty());
        assert_eq!(
            general.folder.map(|folder| folder.label).as_deref(),
            Some("photos")
        );
    }

    #[test]
    fn image_notify_fires_on_rebind_only() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _subscription = panel.connect_image_notify(move |_| counter.set(counter.get() + 1));

        let shown = image("/photos/e.png", 1, 1);
        panel.set_image(Some(shown.clone()));
        panel.set_image(Some(shown));
        panel.set_image(None);

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn observers_may_query_the_panel_when_notified() {
        let context = Rc::new(ViewerWindow::new());
        let panel = Rc::new(panel(&context));
        let seen = Rc::new(RefCell::new(String::new()));
        let sink = seen.clone();
        let weak = Rc::downgrade(&panel);
        let _subscription = panel.connect_image_notify(move |_| {
            if let Some(panel) = weak.upgrade() {
                *sink.borrow_mut() = panel.general().size;
            }
        });

        panel.set_image(Some(image("/photos/f.png", 2, 2)));
        assert_eq!(*seen.borrow(), "2 × 2 pixels");
    }

    #[test]
    fn without_metadata_capability_there_is_no_details_section() {
        let context = Rc::new(ViewerWindow::new());
        let panel = MetadataPanel::new(
            context,
            Some(image("/photos/g.png", 1, 2)),
            i18n(),
            Capabilities { metadata: false },
        );
        assert!(panel.metadata().is_none());
        assert_eq!(panel.general().size, "1 × 2 pixels");
    }

    #[test]
    fn image_without_exif_shows_placeholders() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);
        panel.set_image(Some(image("/photos/h.png", 5, 5)));

        let metadata = panel.metadata().expect("metadata enabled");
        for (_, value) in metadata.rows() {
            assert_eq!(value, PLACEHOLDER);
        }
    }

    #[test]
    fn folder_activation_uses_the_window_image() {
        let context = Rc::new(ViewerWindow::new());
        let panel = panel(&context);
        let manager = RecordingFileManager::default();

        panel.folder_activated("file:///nowhere", &manager);
        assert!(manager.requests.borrow().is_empty());

        let shown = image("/photos/i.png", 1, 1);
        context.view().set_image(Some(shown.clone()));
        let id = iced::window::Id::unique();
        context.set_window_id(id);

        panel.folder_activated("file:///photos", &manager);
        let requests = manager.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(&requests[0].0, shown.file());
        assert_eq!(requests[0].1, Some(id));
    }

    #[test]
    fn reveal_failure_is_contained() {
        let context = Rc::new(ViewerWindow::new());
        context.view().set_image(Some(image("/photos/j.png", 1, 1)));
        let panel = panel(&context);
        let manager = RecordingFileManager {
            fail: true,
            ..RecordingFileManager::default()
        };

        panel.folder_activated("file:///photos", &manager);
        assert_eq!(manager.requests.borrow().len(), 1);
    }

    #[test]
    fn dropping_the_panel_disconnects_everything() {
        let context = Rc::new(ViewerWindow::new());
        let shown = image("/photos/k.png", 1, 1);
        let panel = MetadataPanel::new(
            context.clone(),
            Some(shown.clone()),
            i18n(),
            Capabilities::full(),
        );
        assert_eq!(context.view().image_changed().handler_count(), 1);

        drop(panel);
        assert_eq!(context.view().image_changed().handler_count(), 0);
        assert_eq!(shown.content_changed().handler_count(), 0);
    }

    #[test]
    fn capabilities_follow_settings() {
        let mut config = Config::default();
        assert_eq!(Capabilities::from_config(&config), Capabilities::full());
        config.sidebar.show_metadata = Some(false);
        assert!(!Capabilities::from_config(&config).metadata);
    }
}
