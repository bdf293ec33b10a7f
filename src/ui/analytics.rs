use iced::alignment::Alignment;
use iced::widget::{column, container, row, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

use crate::Message;
use crate::render::analytics::{AnalyticsModel, BreakdownBar, TableRow, EMPTY_HINT, EMPTY_TITLE};

use super::{empty_state, stat_card, style};

const BAR_HEIGHT: f32 = 8.0;

pub fn view<'a>(model: AnalyticsModel) -> Element<'a, Message> {
    let content: Element<'a, Message> = match model {
        AnalyticsModel::Empty => empty_state(EMPTY_TITLE, EMPTY_HINT),
        AnalyticsModel::Report {
            summary,
            breakdown,
            table,
        } => column![
            Row::with_children(
                summary
                    .cards()
                    .into_iter()
                    .map(|card| stat_card(card.title, card.value, Some(card.note))),
            )
            .spacing(16),
            card(
                "Submissions by Form",
                Column::with_children(breakdown.into_iter().map(bar)).spacing(12),
            ),
            card("All Forms Overview", overview(table)),
        ]
        .spacing(20)
        .into(),
    };

    scrollable(container(content).padding(24).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn card<'a>(title: &'static str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(column![text(title).size(15), body.into()].spacing(14))
        .padding(18)
        .width(Length::Fill)
        .style(|_| style::surface_style(style::SURFACE_1, 10.0))
        .into()
}

fn bar<'a>(entry: BreakdownBar) -> Element<'a, Message> {
    let filled = entry.percentage.min(100) as u16;

    let mut track = Row::new().width(Length::Fill);
    if filled > 0 {
        track = track.push(
            container(Space::with_height(BAR_HEIGHT))
                .width(Length::FillPortion(filled))
                .style(|_| style::bar_fill_style()),
        );
    }
    if filled < 100 {
        track = track.push(Space::new(Length::FillPortion(100 - filled), BAR_HEIGHT));
    }

    column![
        row![
            text(entry.name).size(13).width(Length::Fill),
            text(format!("{} ({}%)", entry.submissions, entry.percentage))
                .size(12)
                .color(style::TEXT_MUTED),
        ]
        .align_y(Alignment::Center),
        container(track)
            .width(Length::Fill)
            .style(|_| style::bar_track_style()),
    ]
    .spacing(6)
    .into()
}

fn overview<'a>(rows: Vec<TableRow>) -> Element<'a, Message> {
    let heading = table_line(
        ["Form Name", "Fields", "Submissions", "Created"].map(|caption| -> Element<'a, Message> {
            text(caption).size(12).color(style::TEXT_MUTED).into()
        }),
        text("Status").size(12).color(style::TEXT_MUTED).into(),
    );

    let mut table = column![heading].spacing(10);
    for entry in rows {
        table = table.push(table_line(
            [
                text(entry.name).size(13).into(),
                text(entry.field_count.to_string()).size(13).into(),
                text(entry.submissions.to_string()).size(13).into(),
                text(entry.created).size(13).into(),
            ],
            container(text(entry.status).size(11))
                .padding([2, 8])
                .style(|_| style::badge_style())
                .into(),
        ));
    }
    table.into()
}

fn table_line<'a>(
    cells: [Element<'a, Message>; 4],
    status: Element<'a, Message>,
) -> Element<'a, Message> {
    let [name, fields, submissions, created] = cells;
    row![
        container(name).width(Length::FillPortion(3)),
        container(fields).width(Length::FillPortion(1)),
        container(submissions).width(Length::FillPortion(1)),
        container(created).width(Length::FillPortion(2)),
        container(status).width(Length::FillPortion(1)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
