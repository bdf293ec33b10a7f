use iced::alignment::Alignment;
use iced::widget::{button, column, container, horizontal_space, row, text, Row, Space};
use iced::{Element, Length};

use crate::Message;
use crate::workspace::View;

use super::style;

pub fn view<'a>(active: View) -> Element<'a, Message> {
    let tabs = Row::with_children(View::ALL.into_iter().map(|view| nav_tab(view, active)))
        .height(44);

    container(
        row![
            text("FormCraft").size(16),
            text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10).color(style::TEXT_MUTED),
            horizontal_space(),
            tabs
        ]
        .spacing(8)
        .padding([0, 12])
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(|_| style::surface_style(style::SURFACE_1, 0.0))
    .into()
}

fn nav_tab<'a>(view: View, active: View) -> Element<'a, Message> {
    let is_active = view == active;
    let underline = if is_active { style::PRIMARY } else { style::SURFACE_0 };

    button(
        column![
            container(text(view.to_string()).size(13))
                .padding([0, 16])
                .center_y(Length::Fill),
            container(Space::with_height(2))
                .width(Length::Fill)
                .style(move |_| style::flat_surface_style(underline)),
        ]
        .height(Length::Fill),
    )
    .on_press(Message::ViewSelected(view))
    .padding(0)
    .height(Length::Fill)
    .style(move |theme, status| style::nav_tab_button(is_active, theme, status))
    .into()
}
