// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and keyboard events to top-level messages. Keys are
//! only handled when no widget captured them.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::Opened { .. }) => Some(Message::WindowOpened(window_id)),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            shortcut(&key, modifiers)
        }
        _ => None,
    })
}

/// Message bound to a key press, if any.
fn shortcut(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(Message::NextImage),
        Key::Named(Named::ArrowLeft) => Some(Message::PreviousImage),
        Key::Named(Named::F5) => Some(Message::Reload),
        Key::Named(Named::F9) => Some(Message::ToggleSidebar),
        Key::Character(c) if modifiers.command() && c.as_str() == "o" => {
            Some(Message::OpenFileDialog)
        }
        _ => None,
    }
}
