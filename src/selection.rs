//! Selection Tracker
//!
//! Remembers the last non-empty text selection made in the editor and
//! resolves which text an AI operation should receive: the selection or
//! the whole draft.

use tracing::debug;

/// Tracks the editor selection and the "use selection only" preference.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    /// Last non-empty selection captured from the editor
    selected: String,
    /// Whether operations should receive only the selection
    use_selection_only: bool,
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self {
            selected: String::new(),
            use_selection_only: true,
        }
    }

    /// Record the editor's current selection.
    ///
    /// A non-empty selection replaces the stored value. An empty one is
    /// ignored so that clicking around the editor without dragging does not
    /// erase a previously captured selection.
    pub fn capture(&mut self, selection: &str) {
        if selection.is_empty() {
            return;
        }
        debug!("Captured selection ({} chars)", selection.len());
        self.selected = selection.to_string();
    }

    /// The last captured selection (empty string if none yet)
    pub fn selection(&self) -> &str {
        &self.selected
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn use_selection_only(&self) -> bool {
        self.use_selection_only
    }

    pub fn set_use_selection_only(&mut self, enabled: bool) {
        self.use_selection_only = enabled;
    }

    /// Resolve the text an operation should receive right now.
    ///
    /// Returns the stored selection when "use selection only" is on and a
    /// selection exists; otherwise the full draft. Resolved fresh on every
    /// invocation, never cached.
    pub fn effective_text<'a>(&'a self, content: &'a str) -> &'a str {
        if self.use_selection_only && !self.selected.is_empty() {
            &self.selected
        } else {
            content
        }
    }
}
