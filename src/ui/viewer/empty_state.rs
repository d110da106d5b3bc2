// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no image is open.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// A centered message with a button that emits `on_open`.
pub fn view<'a, Message: Clone + 'a>(i18n: &I18n, on_open: Message) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-state-message"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("empty-state-open-button")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(on_open);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
