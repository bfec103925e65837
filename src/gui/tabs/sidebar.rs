use crate::gui::{DraftsmithApp, Message, Tab};

use iced::widget::{button, column, text, Space};
use iced::{Element, Length};

pub fn view(app: &DraftsmithApp) -> Element<'_, Message> {
    let nav_button = |label: &'static str, tab: Tab| {
        let mut b = button(text(label).size(16)).width(Length::Fill);
        if app.current_tab != tab {
            b = b.style(button::secondary);
        }
        b.on_press(Message::TabSelected(tab))
    };

    let busy_line = if app.dispatcher.is_busy() {
        text("⏳ Working...").size(14)
    } else {
        text("").size(14)
    };

    let draft_line = match &app.draft_path {
        Some(path) => text(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        )
        .size(13)
        .style(text::secondary),
        None => text("unsaved draft").size(13).style(text::secondary),
    };

    column![
        text("DraftSmith").size(24),
        Space::with_height(20),
        nav_button("Write", Tab::Write),
        nav_button("Settings", Tab::Settings),
        Space::with_height(Length::Fill),
        busy_line,
        draft_line,
        text(&app.status).size(13),
    ]
    .spacing(10)
    .padding(10)
    .width(Length::Fixed(190.0))
    .into()
}
