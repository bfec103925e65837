use crate::catalog::Operation;
use crate::dispatcher::ToolState;
use crate::gui::{DraftsmithApp, Message};
use crate::preferences::{Audience, Tone};

use iced::widget::{
    button, checkbox, column, container, pick_list, row, scrollable, text, text_editor, Space,
};
use iced::{Element, Length};

/// Longest selection snippet shown in the toolbar
const SNIPPET_LEN: usize = 40;

pub fn view(app: &DraftsmithApp) -> Element<'_, Message> {
    let toolbar = row![
        text("Audience:").size(14),
        pick_list(
            Audience::ALL,
            Some(app.prefs.audience),
            Message::AudienceSelected
        ),
        text("Tone:").size(14),
        pick_list(Tone::ALL, Some(app.prefs.tone), Message::ToneSelected),
        checkbox("Use selection only", app.tracker.use_selection_only())
            .on_toggle(Message::UseSelectionToggled),
        Space::with_width(Length::Fill),
        button(text("Open").size(14))
            .style(button::secondary)
            .on_press(Message::OpenDraft),
        button(text("Save").size(14))
            .style(button::secondary)
            .on_press(Message::SaveDraft),
        button(text("Save As").size(14))
            .style(button::secondary)
            .on_press(Message::SaveDraftAs),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    let selection_line = if app.tracker.has_selection() {
        text(format!(
            "Selection: \"{}\"",
            snippet(app.tracker.selection())
        ))
        .size(13)
        .style(text::secondary)
    } else {
        text("No selection captured - tools use the whole draft")
            .size(13)
            .style(text::secondary)
    };

    let editor = text_editor(&app.editor)
        .placeholder("Start drafting...")
        .on_action(Message::EditorAction)
        .height(Length::Fill);

    let mut panels = column![row![
        text("AI Tools").size(20),
        Space::with_width(Length::Fill),
        button(text("Clear All").size(13))
            .style(button::danger)
            .on_press(Message::ClearAllResults),
    ]
    .align_y(iced::Alignment::Center)]
    .spacing(10);

    for op in Operation::ALL {
        panels = panels.push(tool_panel(app, op));
    }

    column![
        toolbar,
        selection_line,
        row![
            container(editor).width(Length::FillPortion(3)),
            scrollable(panels.padding(5)).width(Length::FillPortion(2)),
        ]
        .spacing(20)
        .height(Length::Fill),
    ]
    .spacing(10)
    .into()
}

/// One expandable panel per catalog operation
fn tool_panel(app: &DraftsmithApp, op: Operation) -> Element<'_, Message> {
    let key = op.result_key();
    let expanded = app.expanded.contains(&key);

    let header = button(
        row![
            text(op.label()).size(15),
            Space::with_width(Length::Fill),
            text(if expanded { "▾" } else { "▸" }).size(15),
        ]
        .align_y(iced::Alignment::Center),
    )
    .style(button::secondary)
    .width(Length::Fill)
    .on_press(Message::PanelToggled(key));

    let mut body = column![].spacing(8);
    if expanded {
        body = body.push(text(op.description()).size(13).style(text::secondary));

        // The run trigger disappears while any call is in flight
        if app.dispatcher.is_busy() {
            body = body.push(text("⏳ Working...").size(14));
        } else {
            body = body.push(button(text("Run").size(14)).on_press(Message::RunTool(op)));
        }

        match app.dispatcher.state(key) {
            ToolState::Failed(reason) => {
                body = body.push(text(format!("❌ {reason}")).size(13).style(|_| {
                    text::Style {
                        color: Some(iced::Color::from_rgb(0.8, 0.2, 0.2)),
                    }
                }));
            }
            ToolState::Idle if app.dispatcher.result(key).is_none() => {
                body = body.push(text("Not run yet").size(13).style(text::secondary));
            }
            _ => {}
        }

        if let Some(output) = app.dispatcher.result(key) {
            body = body.push(
                container(text(output.summary_markdown()).size(13))
                    .padding(8)
                    .width(Length::Fill)
                    .style(container::rounded_box),
            );
            if !app.dispatcher.is_busy() {
                body = body.push(
                    row![
                        button(text("Apply").size(14)).on_press(Message::ApplyResult(key)),
                        button(text("Dismiss").size(14))
                            .style(button::secondary)
                            .on_press(Message::DismissResult(key)),
                    ]
                    .spacing(8),
                );
            }
        }
    }

    column![header, body].spacing(6).into()
}

fn snippet(selection: &str) -> String {
    let flattened = selection.replace('\n', " ");
    if flattened.chars().count() <= SNIPPET_LEN {
        flattened
    } else {
        let cut: String = flattened.chars().take(SNIPPET_LEN).collect();
        format!("{cut}…")
    }
}
