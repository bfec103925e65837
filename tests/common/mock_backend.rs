//! Mock AI Backend for Testing
//!
//! Records every argument record it receives and returns deterministic
//! payloads derived from the inputs, so tests can assert both the wiring
//! and idempotence.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use draftsmith::catalog::OperationRequest;
use draftsmith::error::{DraftError, DraftResult};
use draftsmith::preferences::{Audience, Tone};
use draftsmith::results::{
    AdjustedTone, ConclusionDraft, EditedContent, ExpandedPoints, IntroductionHooks,
    OrganizedThoughts, ResearchDirections, TitleIdeas,
};
use draftsmith::service::AiBackend;

/// Mock backend with scripted failures and call recording
pub struct MockBackend {
    /// Every request received, in order
    calls: Arc<Mutex<Vec<OperationRequest>>>,
    /// When set, every call fails with this reason
    fail_with: Mutex<Option<String>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Mutex::new(None),
        }
    }

    pub fn set_failure(&self, reason: Option<&str>) {
        *self.fail_with.lock().expect("failure lock") = reason.map(str::to_string);
    }

    /// Snapshot of the requests received so far
    pub fn calls(&self) -> Vec<OperationRequest> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn note(&self, request: OperationRequest) -> DraftResult<()> {
        self.calls.lock().expect("calls lock").push(request);
        if let Some(reason) = self.fail_with.lock().expect("failure lock").clone() {
            return Err(DraftError::Service(reason));
        }
        Ok(())
    }
}

#[async_trait]
impl AiBackend for MockBackend {
    async fn organize_thoughts(&self, raw_thoughts: &str) -> DraftResult<OrganizedThoughts> {
        self.note(OperationRequest::OrganizeThoughts {
            raw_thoughts: raw_thoughts.to_string(),
        })?;
        Ok(OrganizedThoughts {
            blog_topic: format!("Organized: {raw_thoughts}"),
            key_points: vec![raw_thoughts.to_string()],
            structure: vec!["intro".to_string(), "body".to_string()],
            writing_prompts: vec!["why now?".to_string()],
        })
    }

    async fn edit_content(
        &self,
        draft_content: &str,
        audience: Audience,
        tone: Tone,
    ) -> DraftResult<EditedContent> {
        self.note(OperationRequest::EditContent {
            draft_content: draft_content.to_string(),
            audience,
            tone,
        })?;
        Ok(EditedContent {
            content_feedback: format!("feedback for {audience}/{tone}"),
            structure_suggestions: "tighten".to_string(),
            clarity_improvements: "shorter sentences".to_string(),
        })
    }

    async fn generate_titles(&self, blog_content: &str, topic: &str) -> DraftResult<TitleIdeas> {
        self.note(OperationRequest::GenerateTitles {
            blog_content: blog_content.to_string(),
            topic: topic.to_string(),
        })?;
        Ok(TitleIdeas {
            clickable_titles: vec![format!("{topic}, Explained")],
            seo_friendly_titles: vec![format!("{topic} guide")],
            title_analysis: vec![],
        })
    }

    async fn expand_points(&self, brief_points: &str, tone: Tone) -> DraftResult<ExpandedPoints> {
        self.note(OperationRequest::ExpandPoints {
            brief_points: brief_points.to_string(),
            tone,
        })?;
        Ok(ExpandedPoints {
            expanded_content: format!("{brief_points} ... but longer"),
            transition_suggestions: String::new(),
        })
    }

    async fn research_directions(&self, blog_topic: &str) -> DraftResult<ResearchDirections> {
        self.note(OperationRequest::ResearchDirections {
            blog_topic: blog_topic.to_string(),
        })?;
        Ok(ResearchDirections {
            research_areas: vec![format!("history of {blog_topic}")],
            statistics_needed: String::new(),
            expert_perspectives: String::new(),
            counter_arguments: String::new(),
        })
    }

    async fn adjust_tone(&self, content: &str, target_tone: Tone) -> DraftResult<AdjustedTone> {
        self.note(OperationRequest::AdjustTone {
            content: content.to_string(),
            target_tone,
        })?;
        Ok(AdjustedTone {
            adjusted_content: format!("{content} (now {target_tone})"),
            tone_analysis: String::new(),
            word_choice_suggestions: String::new(),
        })
    }

    async fn generate_conclusion(&self, blog_content: &str) -> DraftResult<ConclusionDraft> {
        self.note(OperationRequest::GenerateConclusion {
            blog_content: blog_content.to_string(),
        })?;
        Ok(ConclusionDraft {
            conclusion_paragraph: format!("To conclude: {blog_content}"),
            key_takeaways: vec!["takeaway".to_string()],
            call_to_action: String::new(),
        })
    }

    async fn generate_introduction(
        &self,
        topic: &str,
        audience: Audience,
    ) -> DraftResult<IntroductionHooks> {
        self.note(OperationRequest::GenerateIntroduction {
            topic: topic.to_string(),
            audience,
        })?;
        Ok(IntroductionHooks {
            story_hook: format!("A story about {topic} for {audience} readers"),
            question_hook: format!("What if {topic}?"),
            statistic_hook: String::new(),
            contrast_hook: String::new(),
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
