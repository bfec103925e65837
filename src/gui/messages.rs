//! Message types for the DraftSmith GUI
//!
//! All messages that can be sent to update the application state.

use iced::widget::text_editor;
use std::path::PathBuf;

use crate::catalog::{Operation, ResultKey};
use crate::preferences::{Audience, Tone};
use crate::results::ToolOutput;

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    None,
    // Navigation
    TabSelected(super::state::Tab),

    // Editor
    EditorAction(text_editor::Action),

    // Selection & preferences
    UseSelectionToggled(bool),
    AudienceSelected(Audience),
    ToneSelected(Tone),

    // AI tools
    RunTool(Operation),
    ToolSettled {
        key: ResultKey,
        generation: u64,
        outcome: Result<ToolOutput, String>,
    },
    PanelToggled(ResultKey),
    ApplyResult(ResultKey),
    DismissResult(ResultKey),
    ClearAllResults,

    // Draft file (None = dialog cancelled)
    OpenDraft,
    SaveDraft,
    SaveDraftAs,
    DraftOpened(Option<Result<(PathBuf, String), String>>),
    DraftSaved(Option<Result<PathBuf, String>>),

    // Settings
    BackendUrlChanged(String),
    TimeoutInputChanged(String),
    DefaultAudienceSelected(Audience),
    DefaultToneSelected(Tone),
    SaveConfig,
    CheckBackend,
    BackendHealthResponse(bool),
}
