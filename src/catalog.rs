//! Operation Catalog
//!
//! The fixed set of AI writing operations: each one knows its result slot
//! and how to assemble its argument record from the effective text and the
//! current writing preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DraftError, DraftResult};
use crate::preferences::{Audience, Tone, WritingPreferences};

/// Slot in the result map, one per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultKey {
    OrganizedThoughts,
    EditedContent,
    Titles,
    ExpandedPoints,
    ResearchDirections,
    AdjustedTone,
    Conclusion,
    Introduction,
}

impl ResultKey {
    pub const ALL: [ResultKey; 8] = [
        ResultKey::OrganizedThoughts,
        ResultKey::EditedContent,
        ResultKey::Titles,
        ResultKey::ExpandedPoints,
        ResultKey::ResearchDirections,
        ResultKey::AdjustedTone,
        ResultKey::Conclusion,
        ResultKey::Introduction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKey::OrganizedThoughts => "organizedThoughts",
            ResultKey::EditedContent => "editedContent",
            ResultKey::Titles => "titles",
            ResultKey::ExpandedPoints => "expandedPoints",
            ResultKey::ResearchDirections => "researchDirections",
            ResultKey::AdjustedTone => "adjustedTone",
            ResultKey::Conclusion => "conclusion",
            ResultKey::Introduction => "introduction",
        }
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the eight AI writing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    OrganizeThoughts,
    EditContent,
    GenerateTitles,
    ExpandPoints,
    ResearchDirections,
    AdjustTone,
    GenerateConclusion,
    GenerateIntroduction,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::OrganizeThoughts,
        Operation::EditContent,
        Operation::GenerateTitles,
        Operation::ExpandPoints,
        Operation::ResearchDirections,
        Operation::AdjustTone,
        Operation::GenerateConclusion,
        Operation::GenerateIntroduction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Operation::OrganizeThoughts => "Organize Thoughts",
            Operation::EditContent => "Edit Content",
            Operation::GenerateTitles => "Generate Titles",
            Operation::ExpandPoints => "Expand Points",
            Operation::ResearchDirections => "Research Directions",
            Operation::AdjustTone => "Adjust Tone",
            Operation::GenerateConclusion => "Generate Conclusion",
            Operation::GenerateIntroduction => "Generate Introduction",
        }
    }

    /// Short blurb shown under the panel header
    pub fn description(&self) -> &'static str {
        match self {
            Operation::OrganizeThoughts => "Turn raw notes into a topic and outline",
            Operation::EditContent => "Get editorial feedback for the current audience and tone",
            Operation::GenerateTitles => "Suggest titles from the draft and its first line",
            Operation::ExpandPoints => "Develop brief points into full paragraphs",
            Operation::ResearchDirections => "Suggest research to strengthen the topic",
            Operation::AdjustTone => "Rewrite the text in the selected tone",
            Operation::GenerateConclusion => "Draft a closing section",
            Operation::GenerateIntroduction => "Draft opening hooks for the topic",
        }
    }

    /// The result-map slot this operation writes to
    pub fn result_key(&self) -> ResultKey {
        match self {
            Operation::OrganizeThoughts => ResultKey::OrganizedThoughts,
            Operation::EditContent => ResultKey::EditedContent,
            Operation::GenerateTitles => ResultKey::Titles,
            Operation::ExpandPoints => ResultKey::ExpandedPoints,
            Operation::ResearchDirections => ResultKey::ResearchDirections,
            Operation::AdjustTone => ResultKey::AdjustedTone,
            Operation::GenerateConclusion => ResultKey::Conclusion,
            Operation::GenerateIntroduction => ResultKey::Introduction,
        }
    }

    /// Assemble this operation's argument record from the effective text
    /// and the current preferences, evaluated at call time.
    ///
    /// Text with no visible characters is rejected here so the remote
    /// service never sees an empty request.
    pub fn build_request(
        &self,
        text: &str,
        prefs: &WritingPreferences,
    ) -> DraftResult<OperationRequest> {
        if text.trim().is_empty() {
            return Err(DraftError::EmptyInput);
        }

        let request = match self {
            Operation::OrganizeThoughts => OperationRequest::OrganizeThoughts {
                raw_thoughts: text.to_string(),
            },
            Operation::EditContent => OperationRequest::EditContent {
                draft_content: text.to_string(),
                audience: prefs.audience,
                tone: prefs.tone,
            },
            Operation::GenerateTitles => OperationRequest::GenerateTitles {
                blog_content: text.to_string(),
                topic: first_line(text).to_string(),
            },
            Operation::ExpandPoints => OperationRequest::ExpandPoints {
                brief_points: text.to_string(),
                tone: prefs.tone,
            },
            Operation::ResearchDirections => OperationRequest::ResearchDirections {
                blog_topic: first_line(text).to_string(),
            },
            Operation::AdjustTone => OperationRequest::AdjustTone {
                content: text.to_string(),
                target_tone: prefs.tone,
            },
            Operation::GenerateConclusion => OperationRequest::GenerateConclusion {
                blog_content: text.to_string(),
            },
            Operation::GenerateIntroduction => OperationRequest::GenerateIntroduction {
                topic: first_line(text).to_string(),
                audience: prefs.audience,
            },
        };
        Ok(request)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Argument record for one invocation.
///
/// Named fields rather than positional lists, so adding an operation cannot
/// silently shuffle arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    OrganizeThoughts {
        raw_thoughts: String,
    },
    EditContent {
        draft_content: String,
        audience: Audience,
        tone: Tone,
    },
    GenerateTitles {
        blog_content: String,
        topic: String,
    },
    ExpandPoints {
        brief_points: String,
        tone: Tone,
    },
    ResearchDirections {
        blog_topic: String,
    },
    AdjustTone {
        content: String,
        target_tone: Tone,
    },
    GenerateConclusion {
        blog_content: String,
    },
    GenerateIntroduction {
        topic: String,
        audience: Audience,
    },
}

impl OperationRequest {
    pub fn result_key(&self) -> ResultKey {
        match self {
            OperationRequest::OrganizeThoughts { .. } => ResultKey::OrganizedThoughts,
            OperationRequest::EditContent { .. } => ResultKey::EditedContent,
            OperationRequest::GenerateTitles { .. } => ResultKey::Titles,
            OperationRequest::ExpandPoints { .. } => ResultKey::ExpandedPoints,
            OperationRequest::ResearchDirections { .. } => ResultKey::ResearchDirections,
            OperationRequest::AdjustTone { .. } => ResultKey::AdjustedTone,
            OperationRequest::GenerateConclusion { .. } => ResultKey::Conclusion,
            OperationRequest::GenerateIntroduction { .. } => ResultKey::Introduction,
        }
    }
}

/// Everything before the first newline. A single-line text is its own
/// first line.
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}
