pub mod analytics;
pub mod builder;
pub mod canvas;
pub mod config_panel;
pub mod dashboard;
pub mod field_widget;
pub mod header;
pub mod preview;
pub mod prompt;
pub mod style;
pub mod toast;

use iced::alignment::Horizontal;
use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::Message;

pub fn empty_state<'a>(title: &'a str, hint: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(18),
            text(hint).size(13).color(style::TEXT_MUTED),
        ]
        .spacing(6)
        .align_x(Horizontal::Center),
    )
    .center_x(Length::Fill)
    .padding(48)
    .into()
}

/// Headline number with a caption, used by the dashboard and analytics.
pub fn stat_card<'a>(title: &'a str, value: u64, note: Option<&'a str>) -> Element<'a, Message> {
    let mut body = column![
        text(title).size(12).color(style::TEXT_MUTED),
        text(value.to_string()).size(30),
    ]
    .spacing(6);
    if let Some(note) = note {
        body = body.push(text(note).size(12).color(style::TEXT_MUTED));
    }

    container(body)
        .padding(18)
        .width(Length::FillPortion(1))
        .style(|_| style::surface_style(style::SURFACE_1, 10.0))
        .into()
}
