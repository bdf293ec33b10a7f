use iced::alignment::Alignment;
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Element, Length};

use crate::Message;
use crate::render::dashboard::{DashboardModel, FormList, FormRow, EMPTY_HINT, EMPTY_TITLE};

use super::{empty_state, stat_card, style};

pub fn view<'a>(model: DashboardModel) -> Element<'a, Message> {
    let totals = model.totals;
    let stats = row![
        stat_card("Total Forms", totals.forms, None),
        stat_card("Total Fields", totals.fields, None),
        stat_card("Total Submissions", totals.submissions, None),
    ]
    .spacing(16);

    let heading = row![
        text("Your Forms").size(18),
        horizontal_space(),
        button(text("+ New Form").size(13))
            .on_press(Message::NewFormPressed)
            .padding([8, 14])
            .style(style::primary_button),
    ]
    .align_y(Alignment::Center);

    let list: Element<'a, Message> = match model.list {
        FormList::Empty => empty_state(EMPTY_TITLE, EMPTY_HINT),
        FormList::Rows(rows) => Column::with_children(rows.into_iter().map(form_row))
            .spacing(10)
            .into(),
    };

    scrollable(column![stats, heading, list].spacing(20).padding(24))
        .height(Length::Fill)
        .into()
}

fn form_row<'a>(entry: FormRow) -> Element<'a, Message> {
    let meta = format!(
        "{} fields • {} submissions • Created {}",
        entry.field_count, entry.submissions, entry.created
    );

    container(
        row![
            column![
                text(entry.name).size(15),
                text(meta).size(12).color(style::TEXT_MUTED),
            ]
            .spacing(4),
            horizontal_space(),
            button(text("Edit").size(12))
                .on_press(Message::EditFormPressed(entry.id.clone()))
                .padding([6, 12])
                .style(style::secondary_button),
            button(text("Add Subs").size(12))
                .on_press(Message::GenerateSubmissionsPressed(entry.id.clone()))
                .padding([6, 12])
                .style(style::secondary_button),
            button(text("Delete").size(12))
                .on_press(Message::DeleteFormPressed(entry.id))
                .padding([6, 12])
                .style(style::danger_button),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(14)
    .style(|_| style::surface_style(style::SURFACE_1, 8.0))
    .into()
}
