use iced::alignment::Alignment;
use iced::widget::{button, column, container, horizontal_space, mouse_area, row, scrollable, text, Column};
use iced::{Element, Length};

use crate::Message;
use crate::render::canvas::{CanvasItem, CanvasModel, EMPTY_HINT, EMPTY_TITLE};

use super::{empty_state, field_widget, style};

pub fn view<'a>(model: CanvasModel) -> Element<'a, Message> {
    let content: Element<'a, Message> = match model {
        CanvasModel::Empty => empty_state(EMPTY_TITLE, EMPTY_HINT),
        CanvasModel::Fields(items) => Column::with_children(items.into_iter().map(field_card))
            .spacing(12)
            .into(),
    };

    scrollable(container(content).padding(20).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

/// Clicking anywhere on the card selects the field; the delete button
/// captures its own press.
fn field_card<'a>(item: CanvasItem) -> Element<'a, Message> {
    let index = item.index;
    let selected = item.selected;

    let header = row![
        text(item.label).size(14),
        horizontal_space(),
        button(text("✕").size(12))
            .on_press(Message::DeleteFieldPressed(index))
            .padding([4, 8])
            .style(style::ghost_button),
    ]
    .align_y(Alignment::Center);

    mouse_area(
        container(
            column![header, field_widget::view(item.widget, Message::FieldSelected(index))]
                .spacing(8),
        )
        .padding(14)
        .width(Length::Fill)
        .style(move |_| style::field_card_style(selected)),
    )
    .on_press(Message::FieldSelected(index))
    .into()
}
