use iced::widget::{checkbox, column, container, scrollable, text, text_editor, text_input};
use iced::{Element, Length};

use crate::Message;
use crate::form::FieldEdit;
use crate::form::catalog::DEFAULT_MAX_FILE_SIZE;
use crate::render::config_panel::{
    ConfigModel, FieldConfig, FileSettings, PlaceholderInput, FILE_TYPES_EXAMPLE, FILE_TYPES_HELP,
    UNSELECTED_HINT,
};

use super::style;

pub fn view<'a>(
    model: ConfigModel,
    options_editor: &'a text_editor::Content,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match model {
        ConfigModel::Unselected => container(text(UNSELECTED_HINT).size(13).color(style::TEXT_MUTED))
            .center_x(Length::Fill)
            .padding([32, 8])
            .into(),
        ConfigModel::Editing(config) => settings(config, options_editor),
    };

    scrollable(column![text("Field Settings").size(14), body].spacing(12).padding(16))
        .height(Length::Fill)
        .into()
}

fn settings<'a>(config: FieldConfig, options_editor: &'a text_editor::Content) -> Element<'a, Message> {
    let index = config.index;
    let mut section = column![labelled(
        "Label",
        text_input("", &config.label)
            .on_input(move |value| Message::FieldEdited(index, FieldEdit::Label(value)))
            .padding(8)
            .style(style::input_style),
    )]
    .spacing(14);

    match (&config.file, &config.placeholder) {
        (Some(file), placeholder) => {
            section = section.push(file_settings(index, file));
            if let Some(placeholder) = placeholder {
                section = section.push(placeholder_input(index, placeholder));
            }
        }
        (None, Some(placeholder)) => section = section.push(placeholder_input(index, placeholder)),
        (None, None) => {}
    }

    if config.options_text.is_some() {
        section = section.push(labelled(
            "Options (one per line)",
            text_editor(options_editor)
                .on_action(Message::OptionsEdited)
                .height(130)
                .style(style::editor_style),
        ));
    }

    section
        .push(
            checkbox("Required field", config.required)
                .on_toggle(move |checked| Message::FieldEdited(index, FieldEdit::Required(checked))),
        )
        .into()
}

fn placeholder_input<'a>(index: usize, input: &PlaceholderInput) -> Element<'a, Message> {
    labelled(
        input.caption,
        text_input(input.hint, &input.value)
            .on_input(move |value| Message::FieldEdited(index, FieldEdit::Placeholder(value)))
            .padding(8)
            .style(style::input_style),
    )
}

fn file_settings<'a>(index: usize, file: &FileSettings) -> Element<'a, Message> {
    column![
        labelled(
            "Allowed File Types",
            column![
                text_input(FILE_TYPES_EXAMPLE, &file.file_types)
                    .on_input(move |value| Message::FieldEdited(index, FieldEdit::FileTypes(value)))
                    .padding(8)
                    .style(style::input_style),
                text(FILE_TYPES_HELP).size(11).color(style::TEXT_MUTED),
            ]
            .spacing(4),
        ),
        labelled(
            "Max File Size",
            text_input(DEFAULT_MAX_FILE_SIZE, &file.max_file_size)
                .on_input(move |value| Message::FieldEdited(index, FieldEdit::MaxFileSize(value)))
                .padding(8)
                .style(style::input_style),
        ),
    ]
    .spacing(14)
    .into()
}

fn labelled<'a>(caption: &'static str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(caption).size(12).color(style::TEXT_MUTED), input.into()]
        .spacing(6)
        .into()
}
