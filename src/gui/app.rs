//! Main application state for the DraftSmith GUI
//!
//! Contains the DraftsmithApp struct and initialization logic.

use iced::widget::text_editor;
use iced::Task;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::catalog::ResultKey;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::preferences::WritingPreferences;
use crate::selection::SelectionTracker;
use crate::service::{AiBackend, HttpBackend};

use super::messages::Message;
use super::state::Tab;

/// Startup options resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct Launch {
    /// Override the configured AI service URL
    pub backend_url: Option<String>,
    /// Draft file to open immediately
    pub draft: Option<PathBuf>,
}

/// Main application state
pub struct DraftsmithApp {
    /// Current view/tab
    pub(crate) current_tab: Tab,
    /// Status message
    pub(crate) status: String,
    /// The draft being written
    pub(crate) editor: text_editor::Content,
    /// Where the draft lives on disk, once opened or saved
    pub(crate) draft_path: Option<PathBuf>,
    /// Selection Tracker
    pub(crate) tracker: SelectionTracker,
    /// Audience/tone applied to operations
    pub(crate) prefs: WritingPreferences,
    /// Per-operation invocation state
    pub(crate) dispatcher: Dispatcher,
    /// Remote AI service
    pub(crate) backend: Arc<dyn AiBackend>,
    /// Which tool panels are expanded
    pub(crate) expanded: HashSet<ResultKey>,
    /// Service health (None = not checked, Some(true) = reachable, Some(false) = failed)
    pub(crate) backend_status: Option<bool>,
    /// Configuration
    pub(crate) config: Config,
    /// Settings tab input for the service URL
    pub(crate) backend_url_input: String,
    /// Settings tab input for the request timeout
    pub(crate) timeout_input: String,
}

impl DraftsmithApp {
    /// Create a new DraftsmithApp instance
    pub fn new(launch: Launch) -> (Self, Task<Message>) {
        let mut config = Config::load().unwrap_or_default();
        if let Some(url) = launch.backend_url {
            config.backend_url = url;
        }

        let backend: Arc<dyn AiBackend> = Arc::new(HttpBackend::new(&config));

        let mut tracker = SelectionTracker::new();
        tracker.set_use_selection_only(config.use_selection_only);

        let prefs = WritingPreferences {
            audience: config.default_audience,
            tone: config.default_tone,
        };

        info!("🚀 DraftSmith initialized (service at {})", config.backend_url);

        let app = Self {
            current_tab: Tab::Write,
            status: "Ready".to_string(),
            editor: text_editor::Content::new(),
            draft_path: None,
            tracker,
            prefs,
            dispatcher: Dispatcher::new(),
            backend: backend.clone(),
            expanded: HashSet::new(),
            backend_status: None,
            backend_url_input: config.backend_url.clone(),
            timeout_input: config.request_timeout.to_string(),
            config,
        };

        let mut tasks = vec![Task::perform(super::probe_backend(backend), |m| m)];
        if let Some(path) = launch.draft {
            tasks.push(Task::perform(super::load_draft(path), Message::DraftOpened));
        }

        (app, Task::batch(tasks))
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }
}
