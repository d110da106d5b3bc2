// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the viewer pane (or the empty state)
//! with the metadata sidebar on its right.

use super::Message;
use crate::directory_scanner::ImageList;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::metadata_panel::MetadataPanel;
use crate::ui::viewer::{empty_state, pane, ViewerWindow};
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window: &'a ViewerWindow,
    pub images: &'a ImageList,
    pub panel: &'a MetadataPanel,
    pub sidebar_visible: bool,
    /// i18n key of the last error, if any.
    pub error: Option<&'static str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer: Element<'_, Message> = match ctx.window.current_image() {
        Some(image) => {
            let position = ctx.images.current_index().map(|index| pane::Position {
                index,
                total: ctx.images.len(),
            });
            pane::view(
                &image,
                position,
                pane::PaneMessages {
                    previous: Message::PreviousImage,
                    next: Message::NextImage,
                },
            )
        }
        None => empty_state::view(ctx.i18n, Message::OpenFileDialog),
    };

    let mut main = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.error {
        main = main.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            )
            .padding(spacing::XS),
        );
    }
    main = main.push(viewer);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(main);

    if ctx.sidebar_visible {
        row = row.push(ctx.panel.view(ctx.i18n).map(Message::MetadataPanel));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
