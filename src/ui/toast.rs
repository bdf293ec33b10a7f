use std::time::Duration;

use iced::time::Instant;
use iced::widget::{container, text};
use iced::{Element, Length};

use crate::Message;

use super::style;

/// Transient notification shown in the bottom-right corner.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: String, shown_at: Instant) -> Self {
        Self { message, shown_at }
    }

    pub fn expired(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= lifetime
    }
}

pub fn view(toast: &Toast) -> Element<'_, Message> {
    container(
        container(text(toast.message.as_str()).size(13))
            .padding([10, 16])
            .style(|_| style::toast_style()),
    )
    .align_right(Length::Fill)
    .align_bottom(Length::Fill)
    .padding(20)
    .into()
}
