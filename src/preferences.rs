//! Writing preferences
//!
//! Target audience and tone settings applied to AI operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who the draft is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    General,
    Technical,
    Business,
    Academic,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::General,
        Audience::Technical,
        Audience::Business,
        Audience::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::General => "general",
            Audience::Technical => "technical",
            Audience::Business => "business",
            Audience::Academic => "academic",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Audience::General => "General",
            Audience::Technical => "Technical",
            Audience::Business => "Business",
            Audience::Academic => "Academic",
        })
    }
}

/// Desired voice of the generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Formal,
    Friendly,
    Authoritative,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Formal,
        Tone::Friendly,
        Tone::Authoritative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Authoritative => "Authoritative",
        })
    }
}

/// Current audience/tone pair submitted with operations that take them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WritingPreferences {
    pub audience: Audience,
    pub tone: Tone,
}
