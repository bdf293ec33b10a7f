//! Builder view: field palette, canvas and the configuration panel.

use iced::alignment::Alignment;
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, text_editor};
use iced::{Element, Length};

use crate::Message;
use crate::form::{FieldType, catalog};
use crate::render;
use crate::workspace::Workspace;

use super::{canvas, config_panel, style};

const NO_FORM_TITLE: &str = "No form open";

pub fn view<'a>(
    workspace: &'a Workspace,
    options_editor: &'a text_editor::Content,
) -> Element<'a, Message> {
    let title = workspace.working().map_or(NO_FORM_TITLE, |form| form.name.as_str());

    let toolbar = container(
        row![
            text(title).size(18),
            horizontal_space(),
            button(text("New Form").size(13))
                .on_press(Message::NewFormPressed)
                .padding([8, 14])
                .style(style::secondary_button),
            button(text("Save Form").size(13))
                .on_press(Message::SavePressed)
                .padding([8, 14])
                .style(style::primary_button),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([10, 16])
    .style(|_| style::surface_style(style::SURFACE_1, 0.0));

    let palette = container(palette())
        .width(210)
        .height(Length::Fill)
        .padding(12)
        .style(|_| style::surface_style(style::SURFACE_0, 0.0));

    let canvas = container(canvas::view(render::canvas::derive(
        workspace.working(),
        workspace.selection(),
    )))
    .width(Length::Fill)
    .height(Length::Fill);

    let settings = container(config_panel::view(
        render::config_panel::derive(workspace.working(), workspace.selection()),
        options_editor,
    ))
    .width(300)
    .height(Length::Fill)
    .style(|_| style::surface_style(style::SURFACE_0, 0.0));

    column![toolbar, row![palette, canvas, settings].height(Length::Fill)]
        .spacing(1)
        .height(Length::Fill)
        .into()
}

fn palette<'a>() -> Element<'a, Message> {
    let mut list = column![text("Field Types").size(12).color(style::TEXT_MUTED)].spacing(6);
    for kind in FieldType::ALL {
        list = list.push(
            button(text(catalog::entry(kind).label).size(13))
                .on_press(Message::AddFieldPressed(kind))
                .width(Length::Fill)
                .padding([8, 10])
                .style(style::palette_button),
        );
    }

    scrollable(list).height(Length::Fill).into()
}
