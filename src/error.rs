//! DraftSmith Error Types
//!
//! Centralized error handling for the drafting studio.

use thiserror::Error;

/// Central error type for DraftSmith
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("AI service error: {0}")]
    Service(String),

    #[error("AI service returned {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("nothing to send: the draft is empty and no text is selected")]
    EmptyInput,

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for DraftSmith operations
pub type DraftResult<T> = Result<T, DraftError>;
