//! GUI module using iced
//!
//! The writing studio shell: editor pane, AI tool panels, and settings.

use iced::widget::{container, row, text_editor};
use iced::{Element, Length, Subscription, Task};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::dispatcher::ToolState;
use crate::history;
use crate::service::{self, AiBackend, HttpBackend};

// Sub-modules
pub mod app;
pub mod messages;
pub mod state;
pub mod tabs;

// Re-exports for convenience
pub use app::{DraftsmithApp, Launch};
pub use messages::Message;
pub use state::Tab;

/// Probe the AI service and report back as a message
pub async fn probe_backend(backend: Arc<dyn AiBackend>) -> Message {
    Message::BackendHealthResponse(backend.health_check().await)
}

/// Read a draft file from disk
pub async fn load_draft(path: PathBuf) -> Option<Result<(PathBuf, String), String>> {
    Some(
        tokio::fs::read_to_string(&path)
            .await
            .map(|content| (path, content))
            .map_err(|e| e.to_string()),
    )
}

/// Ask the user for a draft file and read it
pub async fn pick_and_load_draft() -> Option<Result<(PathBuf, String), String>> {
    let handle = rfd::AsyncFileDialog::new()
        .add_filter("Markdown", &["md", "markdown", "txt"])
        .pick_file()
        .await?;
    load_draft(handle.path().to_path_buf()).await
}

/// Write the draft to a known path
pub async fn save_draft_to(path: PathBuf, content: String) -> Option<Result<PathBuf, String>> {
    Some(
        tokio::fs::write(&path, content)
            .await
            .map(|_| path)
            .map_err(|e| e.to_string()),
    )
}

/// Ask the user where to save the draft and write it
pub async fn pick_and_save_draft(content: String) -> Option<Result<PathBuf, String>> {
    let handle = rfd::AsyncFileDialog::new()
        .add_filter("Markdown", &["md", "markdown", "txt"])
        .set_file_name("draft.md")
        .save_file()
        .await?;
    save_draft_to(handle.path().to_path_buf(), content).await
}

impl DraftsmithApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.current_tab = tab;
            }
            Message::EditorAction(action) => {
                self.editor.perform(action);
                // Selection-finalized signal: capture whatever is selected
                // now. An empty selection leaves the previous capture alone.
                if let Some(selection) = self.editor.selection() {
                    self.tracker.capture(&selection);
                }
            }
            Message::UseSelectionToggled(enabled) => {
                self.tracker.set_use_selection_only(enabled);
            }
            Message::AudienceSelected(audience) => {
                self.prefs.audience = audience;
            }
            Message::ToneSelected(tone) => {
                self.prefs.tone = tone;
            }
            Message::RunTool(op) => {
                // Resolve the effective text at the moment of invocation
                let content = self.editor.text();
                let text = self.tracker.effective_text(&content).to_string();

                match op.build_request(&text, &self.prefs) {
                    Ok(request) => {
                        let key = op.result_key();
                        let generation = self.dispatcher.begin(key);
                        self.expanded.insert(key);
                        self.status = format!("Running {}...", op.label());

                        let backend = self.backend.clone();
                        return Task::perform(
                            async move {
                                service::execute(backend.as_ref(), request)
                                    .await
                                    .map_err(|e| e.to_string())
                            },
                            move |outcome| Message::ToolSettled {
                                key,
                                generation,
                                outcome,
                            },
                        );
                    }
                    Err(e) => {
                        warn!("{} not dispatched: {}", op.label(), e);
                        self.status = e.to_string();
                    }
                }
            }
            Message::ToolSettled {
                key,
                generation,
                outcome,
            } => {
                if self.dispatcher.settle(key, generation, outcome) {
                    let entry = match self.dispatcher.state(key) {
                        ToolState::Ready => {
                            self.status = format!("{} finished", key);
                            format!("{} -> ok", key)
                        }
                        ToolState::Failed(reason) => {
                            self.status = format!("{} failed: {}", key, reason);
                            format!("{} -> error: {}", key, reason)
                        }
                        _ => return Task::none(),
                    };
                    if let Err(e) = history::record(&entry) {
                        warn!("Could not write history entry: {}", e);
                    }
                } else {
                    debug!("Dropped stale completion for {}", key);
                }
            }
            Message::PanelToggled(key) => {
                if !self.expanded.remove(&key) {
                    self.expanded.insert(key);
                }
            }
            Message::ApplyResult(key) => {
                if let Some(output) = self.dispatcher.result(key) {
                    let merged = output.merged_into(&self.editor.text());
                    self.editor = text_editor::Content::with_text(&merged);
                    info!("📝 Applied {} to the draft", key);
                    self.status = format!("Applied {}", key);
                }
            }
            Message::DismissResult(key) => {
                self.dispatcher.clear_result(key);
                self.status = format!("Dismissed {}", key);
            }
            Message::ClearAllResults => {
                self.dispatcher.clear_all();
                self.status = "Cleared all results".to_string();
            }
            Message::OpenDraft => {
                return Task::perform(pick_and_load_draft(), Message::DraftOpened);
            }
            Message::DraftOpened(Some(Ok((path, content)))) => {
                info!("📂 Opened draft: {}", path.display());
                self.editor = text_editor::Content::with_text(&content);
                self.status = format!("Opened {}", path.display());
                self.draft_path = Some(path);
            }
            Message::DraftOpened(Some(Err(e))) => {
                warn!("Failed to open draft: {}", e);
                self.status = format!("Open failed: {}", e);
            }
            Message::DraftOpened(None) => {}
            Message::SaveDraft => {
                if let Some(path) = self.draft_path.clone() {
                    return Task::perform(
                        save_draft_to(path, self.editor.text()),
                        Message::DraftSaved,
                    );
                }
                return self.update(Message::SaveDraftAs);
            }
            Message::SaveDraftAs => {
                return Task::perform(
                    pick_and_save_draft(self.editor.text()),
                    Message::DraftSaved,
                );
            }
            Message::DraftSaved(Some(Ok(path))) => {
                info!("💾 Saved draft: {}", path.display());
                self.status = format!("Saved {}", path.display());
                self.draft_path = Some(path);
            }
            Message::DraftSaved(Some(Err(e))) => {
                warn!("Failed to save draft: {}", e);
                self.status = format!("Save failed: {}", e);
            }
            Message::DraftSaved(None) => {}
            Message::BackendUrlChanged(value) => {
                self.backend_url_input = value;
            }
            Message::TimeoutInputChanged(value) => {
                self.timeout_input = value;
            }
            Message::DefaultAudienceSelected(audience) => {
                self.config.default_audience = audience;
            }
            Message::DefaultToneSelected(tone) => {
                self.config.default_tone = tone;
            }
            Message::SaveConfig => {
                info!("💾 Saving configuration...");
                match self.timeout_input.trim().parse::<u64>() {
                    Ok(timeout) if timeout > 0 => self.config.request_timeout = timeout,
                    _ => {
                        self.status = format!("Invalid timeout: {}", self.timeout_input);
                        return Task::none();
                    }
                }
                self.config.backend_url = self.backend_url_input.trim().to_string();
                self.config.use_selection_only = self.tracker.use_selection_only();

                if let Err(e) = self.config.save() {
                    warn!("Failed to save config: {}", e);
                    self.status = format!("Save Error: {}", e);
                } else {
                    self.status = "Config Saved".to_string();
                }

                // The service client picks up the new URL/timeout immediately
                self.backend = Arc::new(HttpBackend::new(&self.config));
                self.backend_status = None;
                return Task::perform(probe_backend(self.backend.clone()), |m| m);
            }
            Message::CheckBackend => {
                return Task::perform(probe_backend(self.backend.clone()), |m| m);
            }
            Message::BackendHealthResponse(alive) => {
                self.backend_status = Some(alive);
            }
            Message::None => {}
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Periodic service reachability probe
        iced::time::every(std::time::Duration::from_secs(30)).map(|_| Message::CheckBackend)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = tabs::sidebar::view(self);

        let content = match self.current_tab {
            Tab::Write => tabs::write::view(self),
            Tab::Settings => tabs::settings::view(self),
        };

        row![sidebar, container(content).width(Length::Fill).padding(20)].into()
    }
}
