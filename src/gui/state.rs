//! State types for the DraftSmith GUI

/// Current tab/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Write,
    Settings,
}
