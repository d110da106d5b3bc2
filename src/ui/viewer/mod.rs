// SPDX-License-Identifier: MPL-2.0
//! The viewer window and the view that displays the current image.
//!
//! [`ScrollView`] owns the displayed image and announces every change of it;
//! [`ViewerWindow`] is the window hosting that view. Both are shared through
//! `Rc` with the components that follow the current image, such as the
//! metadata sidebar.

pub mod empty_state;
pub mod pane;

use crate::media::image::{same_image, Image};
use crate::signal::Signal;
use iced::window;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The view displaying the current image.
#[derive(Debug, Default)]
pub struct ScrollView {
    image: RefCell<Option<Rc<Image>>>,
    image_changed: Signal<Option<Rc<Image>>>,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<Rc<Image>> {
        self.image.borrow().clone()
    }

    /// Displays `image`, notifying observers when it differs from the
    /// current one.
    pub fn set_image(&self, image: Option<Rc<Image>>) {
        if same_image(self.image.borrow().as_ref(), image.as_ref()) {
            return;
        }
        self.image.replace(image.clone());
        self.image_changed.emit(&image);
    }

    /// Fired with the new image after it became current.
    pub fn image_changed(&self) -> &Signal<Option<Rc<Image>>> {
        &self.image_changed
    }
}

/// The window hosting the image view.
#[derive(Debug, Default)]
pub struct ViewerWindow {
    view: ScrollView,
    window_id: Cell<Option<window::Id>>,
}

impl ViewerWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// The image currently shown in the window's view.
    pub fn current_image(&self) -> Option<Rc<Image>> {
        self.view.image()
    }

    pub fn view(&self) -> &ScrollView {
        &self.view
    }

    /// Identifier of the native window, once it is open.
    pub fn window_id(&self) -> Option<window::Id> {
        self.window_id.get()
    }

    pub fn set_window_id(&self, id: window::Id) {
        self.window_id.set(Some(id));
    }
}
