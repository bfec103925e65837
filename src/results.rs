//! AI result payloads
//!
//! Typed payloads returned by the remote text-generation service, one per
//! catalog operation, plus the rules for rendering them and merging an
//! applied result back into the draft.

use serde::{Deserialize, Serialize};

use crate::catalog::ResultKey;

/// Raw notes organized into a topic, key points, and a suggested structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizedThoughts {
    #[serde(default)]
    pub blog_topic: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub structure: Vec<String>,
    #[serde(default)]
    pub writing_prompts: Vec<String>,
}

/// Editorial feedback on a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditedContent {
    #[serde(default)]
    pub content_feedback: String,
    #[serde(default)]
    pub structure_suggestions: String,
    #[serde(default)]
    pub clarity_improvements: String,
}

/// Title candidates for the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleIdeas {
    #[serde(default)]
    pub clickable_titles: Vec<String>,
    #[serde(default)]
    pub seo_friendly_titles: Vec<String>,
    #[serde(default)]
    pub title_analysis: Vec<String>,
}

/// Brief points developed into full paragraphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedPoints {
    #[serde(default)]
    pub expanded_content: String,
    #[serde(default)]
    pub transition_suggestions: String,
}

/// Research suggestions to strengthen the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchDirections {
    #[serde(default)]
    pub research_areas: Vec<String>,
    #[serde(default)]
    pub statistics_needed: String,
    #[serde(default)]
    pub expert_perspectives: String,
    #[serde(default)]
    pub counter_arguments: String,
}

/// The draft rewritten in a target tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedTone {
    #[serde(default)]
    pub adjusted_content: String,
    #[serde(default)]
    pub tone_analysis: String,
    #[serde(default)]
    pub word_choice_suggestions: String,
}

/// A generated closing section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConclusionDraft {
    #[serde(default)]
    pub conclusion_paragraph: String,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    #[serde(default)]
    pub call_to_action: String,
}

/// Four alternative opening hooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroductionHooks {
    #[serde(default)]
    pub story_hook: String,
    #[serde(default)]
    pub question_hook: String,
    #[serde(default)]
    pub statistic_hook: String,
    #[serde(default)]
    pub contrast_hook: String,
}

/// Any payload the result map can hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolOutput {
    OrganizedThoughts(OrganizedThoughts),
    EditedContent(EditedContent),
    Titles(TitleIdeas),
    ExpandedPoints(ExpandedPoints),
    ResearchDirections(ResearchDirections),
    AdjustedTone(AdjustedTone),
    Conclusion(ConclusionDraft),
    Introduction(IntroductionHooks),
}

impl ToolOutput {
    /// The result-map slot this payload belongs to
    pub fn result_key(&self) -> ResultKey {
        match self {
            ToolOutput::OrganizedThoughts(_) => ResultKey::OrganizedThoughts,
            ToolOutput::EditedContent(_) => ResultKey::EditedContent,
            ToolOutput::Titles(_) => ResultKey::Titles,
            ToolOutput::ExpandedPoints(_) => ResultKey::ExpandedPoints,
            ToolOutput::ResearchDirections(_) => ResultKey::ResearchDirections,
            ToolOutput::AdjustedTone(_) => ResultKey::AdjustedTone,
            ToolOutput::Conclusion(_) => ResultKey::Conclusion,
            ToolOutput::Introduction(_) => ResultKey::Introduction,
        }
    }

    /// Markdown rendering for the result panel
    pub fn summary_markdown(&self) -> String {
        match self {
            ToolOutput::OrganizedThoughts(t) => format_organized_thoughts(t),
            ToolOutput::EditedContent(e) => format_editing_suggestions(e),
            ToolOutput::Titles(t) => {
                let mut out = String::from("Title ideas:\n");
                for title in &t.clickable_titles {
                    out.push_str(&format!("- {title}\n"));
                }
                if !t.seo_friendly_titles.is_empty() {
                    out.push_str("\nSEO variants:\n");
                    for title in &t.seo_friendly_titles {
                        out.push_str(&format!("- {title}\n"));
                    }
                }
                for note in &t.title_analysis {
                    out.push_str(&format!("\n{note}"));
                }
                out
            }
            ToolOutput::ExpandedPoints(e) => {
                let mut out = e.expanded_content.clone();
                if !e.transition_suggestions.is_empty() {
                    out.push_str("\n\nTransitions: ");
                    out.push_str(&e.transition_suggestions);
                }
                out
            }
            ToolOutput::ResearchDirections(r) => {
                let mut out = String::from("Research areas:\n");
                for area in &r.research_areas {
                    out.push_str(&format!("- {area}\n"));
                }
                if !r.statistics_needed.is_empty() {
                    out.push_str(&format!("\nStatistics needed: {}\n", r.statistics_needed));
                }
                if !r.expert_perspectives.is_empty() {
                    out.push_str(&format!("Expert perspectives: {}\n", r.expert_perspectives));
                }
                if !r.counter_arguments.is_empty() {
                    out.push_str(&format!("Counter-arguments: {}\n", r.counter_arguments));
                }
                out
            }
            ToolOutput::AdjustedTone(a) => {
                let mut out = a.adjusted_content.clone();
                if !a.tone_analysis.is_empty() {
                    out.push_str("\n\nAnalysis: ");
                    out.push_str(&a.tone_analysis);
                }
                if !a.word_choice_suggestions.is_empty() {
                    out.push_str("\nWord choices: ");
                    out.push_str(&a.word_choice_suggestions);
                }
                out
            }
            ToolOutput::Conclusion(c) => {
                let mut out = c.conclusion_paragraph.clone();
                if !c.key_takeaways.is_empty() {
                    out.push_str("\n\nKey takeaways:\n");
                    for takeaway in &c.key_takeaways {
                        out.push_str(&format!("- {takeaway}\n"));
                    }
                }
                if !c.call_to_action.is_empty() {
                    out.push_str(&format!("\nCall to action: {}", c.call_to_action));
                }
                out
            }
            ToolOutput::Introduction(i) => format!(
                "Story hook:\n{}\n\nQuestion hook:\n{}\n\nStatistic hook:\n{}\n\nContrast hook:\n{}",
                i.story_hook, i.question_hook, i.statistic_hook, i.contrast_hook
            ),
        }
    }

    /// Merge this payload into the draft, producing the new draft text.
    ///
    /// Prepends openers, appends closers, and replaces the draft for
    /// whole-text rewrites. The shell applies the returned text verbatim.
    pub fn merged_into(&self, draft: &str) -> String {
        match self {
            ToolOutput::OrganizedThoughts(t) => format_organized_thoughts(t),
            ToolOutput::EditedContent(e) => format_editing_suggestions(e),
            ToolOutput::Titles(t) => match t.clickable_titles.first() {
                Some(title) => format!("# {title}\n\n{draft}"),
                None => draft.to_string(),
            },
            ToolOutput::ExpandedPoints(e) => e.expanded_content.clone(),
            ToolOutput::ResearchDirections(r) => {
                let mut out = format!("{draft}\n\n## Further Research\n");
                for area in &r.research_areas {
                    out.push_str(&format!("- {area}\n"));
                }
                out
            }
            ToolOutput::AdjustedTone(a) => a.adjusted_content.clone(),
            ToolOutput::Conclusion(c) => {
                format!("{draft}\n\n{}", c.conclusion_paragraph)
            }
            ToolOutput::Introduction(i) => format!("{}\n\n{draft}", i.story_hook),
        }
    }
}

fn format_organized_thoughts(thoughts: &OrganizedThoughts) -> String {
    let mut out = format!("# {}\n\n", thoughts.blog_topic);

    out.push_str("## Key Points\n");
    for (i, point) in thoughts.key_points.iter().enumerate() {
        out.push_str(&format!("{}. {point}\n", i + 1));
    }

    out.push_str("\n## Suggested Structure\n");
    for (i, item) in thoughts.structure.iter().enumerate() {
        out.push_str(&format!("{}. {item}\n", i + 1));
    }

    out.push_str("\n## Writing Prompts\n");
    for prompt in &thoughts.writing_prompts {
        out.push_str(&format!("- {prompt}\n"));
    }

    out
}

fn format_editing_suggestions(edited: &EditedContent) -> String {
    let mut out = String::from("## Editing Suggestions\n\n");

    if !edited.content_feedback.is_empty() {
        out.push_str(&format!("### Content Feedback\n{}\n\n", edited.content_feedback));
    }
    if !edited.structure_suggestions.is_empty() {
        out.push_str(&format!(
            "### Structure Suggestions\n{}\n\n",
            edited.structure_suggestions
        ));
    }
    if !edited.clarity_improvements.is_empty() {
        out.push_str(&format!(
            "### Clarity Improvements\n{}\n\n",
            edited.clarity_improvements
        ));
    }

    out
}
