use iced::alignment::{Alignment, Horizontal};
use iced::widget::{checkbox, column, container, pick_list, radio, row, text, text_input, Column, Space};
use iced::{Element, Length};

use crate::Message;
use crate::render::field::FieldWidget;

use super::style;

const LINE_HEIGHT: f32 = 22.0;

/// Draws a field's input. Inputs are display-only; `on_interact` is sent
/// when a dropdown entry or radio button is clicked.
pub fn view<'a>(widget: FieldWidget, on_interact: Message) -> Element<'a, Message> {
    match widget {
        FieldWidget::SingleLine { input, placeholder } => row![
            text_input(&placeholder, "")
                .padding(10)
                .style(style::input_style)
                .width(Length::Fill),
            text(input.hint()).size(11).color(style::TEXT_MUTED),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into(),
        FieldWidget::MultiLine { rows, placeholder } => {
            container(text(placeholder).size(13).color(style::TEXT_MUTED))
                .padding(10)
                .width(Length::Fill)
                .height(f32::from(rows) * LINE_HEIGHT + 20.0)
                .style(|_| style::surface_style(style::SURFACE_1, 8.0))
                .into()
        }
        FieldWidget::Dropdown { prompt, options } => {
            pick_list(options, None::<String>, move |_| on_interact.clone())
                .placeholder(prompt)
                .width(Length::Fill)
                .padding([8, 10])
                .style(style::pick_list_style)
                .into()
        }
        FieldWidget::RadioGroup { choices } => Column::with_children(
            choices.into_iter().enumerate().map(|(i, choice)| {
                let message = on_interact.clone();
                radio(choice, i, None::<usize>, move |_| message).into()
            }),
        )
        .spacing(6)
        .into(),
        FieldWidget::CheckboxList { choices } => Column::with_children(
            choices
                .into_iter()
                .map(|choice| checkbox(choice, false).into()),
        )
        .spacing(6)
        .into(),
        FieldWidget::UploadBox {
            instructions,
            file_types,
            max_size,
        } => container(
            column![
                text("⇪").size(24),
                text(instructions).size(14),
                text(format!("{file_types} • Max {max_size}"))
                    .size(12)
                    .color(style::TEXT_MUTED),
            ]
            .spacing(4)
            .align_x(Horizontal::Center),
        )
        .padding(18)
        .center_x(Length::Fill)
        .style(|_| style::upload_box_style())
        .into(),
        FieldWidget::LabelOnly => Space::with_height(0).into(),
    }
}
