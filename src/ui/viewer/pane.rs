// SPDX-License-Identifier: MPL-2.0
//! Viewer pane rendering the current image fitted to the available space,
//! with previous/next buttons and a position counter.

use crate::media::Image;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Button, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Position of the displayed image within its folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

/// Messages the pane produces for its host.
pub struct PaneMessages<Message> {
    pub previous: Message,
    pub next: Message,
}

pub fn view<'a, Message: Clone + 'a>(
    shown: &Image,
    position: Option<Position>,
    messages: PaneMessages<Message>,
) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(shown.file().path()))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let navigable = position.is_some_and(|p| p.total > 1);
    let previous = navigable.then_some(messages.previous);
    let next = navigable.then_some(messages.next);

    let counter = position
        .map(|p| format!("{} / {}", p.index + 1, p.total))
        .unwrap_or_default();

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(nav_button("‹", previous))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(counter).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(nav_button("›", next));

    let content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .push(picture)
        .push(footer);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn nav_button<'a, Message: Clone + 'a>(
    label: &'static str,
    on_press: Option<Message>,
) -> Button<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press_maybe(on_press)
}
