// SPDX-License-Identifier: MPL-2.0
//! View rendering for the metadata panel.

use super::{FolderLink, Message, MetadataPanel};
use crate::config::DEFAULT_SIDEBAR_WIDTH;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::tooltip as styled_tooltip;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, rule, scrollable, tooltip, Column, Row, Space, Text};
use iced::{alignment::Vertical, Border, Element, Length, Theme};

/// Default width of the metadata panel in pixels.
pub const PANEL_WIDTH: f32 = DEFAULT_SIDEBAR_WIDTH;

impl MetadataPanel {
    /// Render the panel.
    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let width = self.width();
        let state = self.inner.state.borrow();

        let header = Row::new()
            .width(Length::Fill)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("sidebar-title")).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(close_button(i18n));

        let general = &state.general;
        let general_rows = Column::new()
            .spacing(spacing::XXS)
            .push(build_metadata_row(
                i18n.tr("metadata-label-size"),
                general.size.clone(),
            ))
            .push(build_metadata_row(
                i18n.tr("metadata-label-type"),
                general.content_type.clone(),
            ))
            .push(build_metadata_row(
                i18n.tr("metadata-label-file-size"),
                general.file_size.clone(),
            ))
            .push(build_folder_row(
                i18n.tr("metadata-label-folder"),
                general.folder.as_ref(),
            ));

        let mut sections = Column::new().spacing(spacing::MD).push(build_section(
            i18n.tr("sidebar-section-general"),
            general_rows.into(),
        ));

        if let Some(metadata) = &state.metadata {
            let rows = metadata
                .rows()
                .into_iter()
                .fold(Column::new().spacing(spacing::XXS), |column, (key, value)| {
                    column.push(build_metadata_row(i18n.tr(key), value.to_string()))
                });
            sections = sections.push(build_section(
                i18n.tr("sidebar-section-details"),
                rows.into(),
            ));
        }

        let panel_content = Column::new()
            .width(Length::Fill)
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(header)
            .push(rule::horizontal(1))
            .push(sections);

        let scrollable_content = scrollable(panel_content)
            .direction(Direction::Vertical(Scrollbar::default()))
            .width(Length::Fixed(width));

        container(scrollable_content)
            .width(Length::Fixed(width))
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }
}

fn close_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let close = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(button_styles::link);

    styled_tooltip::styled(close, i18n.tr("sidebar-close"), tooltip::Position::Bottom).into()
}

fn build_metadata_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(label_text(label))
        .push(
            Text::new(value)
                .size(typography::BODY)
                .width(Length::FillPortion(3)),
        )
        .into()
}

fn build_folder_row<'a>(label: String, folder: Option<&FolderLink>) -> Element<'a, Message> {
    let value: Element<'a, Message> = match folder {
        Some(folder) => {
            let link = button(Text::new(folder.label.clone()).size(typography::BODY))
                .padding(0)
                .style(button_styles::link)
                .on_press(Message::FolderLinkPressed(folder.uri.clone()));
            styled_tooltip::styled(link, folder.tooltip.clone(), tooltip::Position::Bottom)
                .into()
        }
        None => Text::new("").size(typography::BODY).into(),
    };

    Row::new()
        .spacing(spacing::SM)
        .push(label_text(label))
        .push(container(value).width(Length::FillPortion(3)))
        .into()
}

fn label_text<'a>(label: String) -> Text<'a> {
    Text::new(format!("{}:", label))
        .size(typography::BODY)
        .width(Length::FillPortion(2))
}

fn build_section<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::BODY_LG))
        .push(content)
        .into()
}
