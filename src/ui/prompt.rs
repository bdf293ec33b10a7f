//! Modal dialogs for confirmations and the form-naming question.

use iced::alignment::Alignment;
use iced::widget::{button, center, column, container, horizontal_space, mouse_area, opaque, row, text, text_input};
use iced::Element;

use crate::Message;
use crate::workspace::Prompt;

use super::style;

pub fn view<'a>(prompt: &'a Prompt) -> Element<'a, Message> {
    let dialog: Element<'a, Message> = match prompt {
        Prompt::ConfirmDeleteForm { name, .. } => confirm(
            "Delete form",
            format!("Are you sure you want to delete \"{name}\"?"),
        ),
        Prompt::ConfirmDeleteField { label, .. } => confirm(
            "Delete field",
            format!("Are you sure you want to delete the field \"{label}\"?"),
        ),
        Prompt::NameForm { draft } => column![
            text("Enter form name:").size(15),
            text_input("Form name", draft)
                .on_input(Message::PromptDraftChanged)
                .on_submit(Message::PromptConfirmed)
                .padding(10)
                .style(style::input_style),
            row![
                horizontal_space(),
                button(text("Cancel").size(13))
                    .on_press(Message::PromptDismissed)
                    .padding([8, 14])
                    .style(style::secondary_button),
                button(text("OK").size(13))
                    .on_press(Message::PromptConfirmed)
                    .padding([8, 14])
                    .style(style::primary_button),
            ]
            .spacing(8),
        ]
        .spacing(14)
        .into(),
    };

    let panel = container(dialog)
        .width(400)
        .padding(20)
        .style(|_| style::surface_style(style::SURFACE_1, 12.0));

    opaque(
        mouse_area(center(opaque(panel)).style(|_| style::backdrop_style()))
            .on_press(Message::PromptDismissed),
    )
}

fn confirm<'a>(title: &'static str, question: String) -> Element<'a, Message> {
    column![
        text(title).size(16),
        text(question).size(13).color(style::TEXT_MUTED),
        row![
            horizontal_space(),
            button(text("Cancel").size(13))
                .on_press(Message::PromptDismissed)
                .padding([8, 14])
                .style(style::secondary_button),
            button(text("Delete").size(13))
                .on_press(Message::PromptConfirmed)
                .padding([8, 14])
                .style(style::danger_button),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(14)
    .into()
}
