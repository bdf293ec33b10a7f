use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length};

use crate::Message;
use crate::render::preview::{PreviewModel, EMPTY_HINT, SUBMIT_LABEL};

use super::{field_widget, style};

pub fn view<'a>(model: PreviewModel) -> Element<'a, Message> {
    let content: Element<'a, Message> = match model {
        PreviewModel::Empty => container(text(EMPTY_HINT).size(14).color(style::TEXT_MUTED))
            .center_x(Length::Fill)
            .padding(32)
            .into(),
        PreviewModel::Form { title, fields } => {
            let mut form = column![text(title).size(22)].spacing(18);
            for item in fields {
                form = form.push(
                    column![
                        text(item.label).size(13),
                        field_widget::view(item.widget, Message::PreviewInteracted),
                    ]
                    .spacing(6),
                );
            }
            form.push(
                button(container(text(SUBMIT_LABEL).size(14)).center_x(Length::Fill))
                    .on_press(Message::PreviewSubmitted)
                    .width(Length::Fill)
                    .padding(12)
                    .style(style::primary_button),
            )
            .into()
        }
    };

    scrollable(
        container(
            container(content)
                .max_width(640)
                .padding(28)
                .style(|_| style::surface_style(style::SURFACE_1, 12.0)),
        )
        .center_x(Length::Fill)
        .padding(24),
    )
    .height(Length::Fill)
    .into()
}
