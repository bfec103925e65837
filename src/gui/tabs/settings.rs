use crate::gui::{DraftsmithApp, Message};
use crate::preferences::{Audience, Tone};

use iced::widget::{button, column, pick_list, row, text, text_input, Space};
use iced::{Element, Length};

pub fn view(app: &DraftsmithApp) -> Element<'_, Message> {
    let service_section = column![
        text("AI Service").size(20),
        Space::with_height(10),
        row![
            text("Service URL:").width(Length::Fixed(140.0)),
            text_input("http://localhost:8000", &app.backend_url_input)
                .on_input(Message::BackendUrlChanged)
                .width(Length::Fixed(280.0)),
        ]
        .spacing(10),
        Space::with_height(5),
        row![
            text("Timeout (s):").width(Length::Fixed(140.0)),
            text_input("60", &app.timeout_input)
                .on_input(Message::TimeoutInputChanged)
                .width(Length::Fixed(80.0)),
        ]
        .spacing(10),
        Space::with_height(10),
        row![
            button("Check Connection").on_press(Message::CheckBackend),
            Space::with_width(10),
            match app.backend_status {
                Some(true) => text("✅ Connected").style(|_| text::Style {
                    color: Some(iced::Color::from_rgb(0.0, 0.8, 0.0)),
                }),
                Some(false) => text("❌ Connection Failed").style(|_| text::Style {
                    color: Some(iced::Color::from_rgb(0.8, 0.0, 0.0)),
                }),
                None => text("Not checked").style(text::secondary),
            }
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(5);

    let defaults_section = column![
        text("Writing Defaults").size(20),
        Space::with_height(10),
        row![
            text("Audience:").width(Length::Fixed(140.0)),
            pick_list(
                Audience::ALL,
                Some(app.config.default_audience),
                Message::DefaultAudienceSelected
            ),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
        row![
            text("Tone:").width(Length::Fixed(140.0)),
            pick_list(
                Tone::ALL,
                Some(app.config.default_tone),
                Message::DefaultToneSelected
            ),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    ]
    .spacing(5);

    column![
        service_section,
        Space::with_height(20),
        defaults_section,
        Space::with_height(20),
        button("Save Config").on_press(Message::SaveConfig),
    ]
    .spacing(10)
    .into()
}
