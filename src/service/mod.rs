//! Remote AI service
//!
//! The `AiBackend` trait is the seam between the catalog and whatever
//! produces the text: the HTTP client in production, mocks in tests.

use async_trait::async_trait;

use crate::catalog::OperationRequest;
use crate::error::DraftResult;
use crate::preferences::{Audience, Tone};
use crate::results::{
    AdjustedTone, ConclusionDraft, EditedContent, ExpandedPoints, IntroductionHooks,
    OrganizedThoughts, ResearchDirections, TitleIdeas, ToolOutput,
};

pub mod http;

pub use http::HttpBackend;

/// Remote text-generation capability: one method per catalog operation.
#[async_trait]
pub trait AiBackend: Send + Sync {
    async fn organize_thoughts(&self, raw_thoughts: &str) -> DraftResult<OrganizedThoughts>;

    async fn edit_content(
        &self,
        draft_content: &str,
        audience: Audience,
        tone: Tone,
    ) -> DraftResult<EditedContent>;

    async fn generate_titles(&self, blog_content: &str, topic: &str) -> DraftResult<TitleIdeas>;

    async fn expand_points(&self, brief_points: &str, tone: Tone) -> DraftResult<ExpandedPoints>;

    async fn research_directions(&self, blog_topic: &str) -> DraftResult<ResearchDirections>;

    async fn adjust_tone(&self, content: &str, target_tone: Tone) -> DraftResult<AdjustedTone>;

    async fn generate_conclusion(&self, blog_content: &str) -> DraftResult<ConclusionDraft>;

    async fn generate_introduction(
        &self,
        topic: &str,
        audience: Audience,
    ) -> DraftResult<IntroductionHooks>;

    /// Verify the service is reachable
    async fn health_check(&self) -> bool {
        true
    }
}

/// Run one argument record against a backend and wrap the payload.
pub async fn execute(backend: &dyn AiBackend, request: OperationRequest) -> DraftResult<ToolOutput> {
    match request {
        OperationRequest::OrganizeThoughts { raw_thoughts } => backend
            .organize_thoughts(&raw_thoughts)
            .await
            .map(ToolOutput::OrganizedThoughts),
        OperationRequest::EditContent {
            draft_content,
            audience,
            tone,
        } => backend
            .edit_content(&draft_content, audience, tone)
            .await
            .map(ToolOutput::EditedContent),
        OperationRequest::GenerateTitles {
            blog_content,
            topic,
        } => backend
            .generate_titles(&blog_content, &topic)
            .await
            .map(ToolOutput::Titles),
        OperationRequest::ExpandPoints { brief_points, tone } => backend
            .expand_points(&brief_points, tone)
            .await
            .map(ToolOutput::ExpandedPoints),
        OperationRequest::ResearchDirections { blog_topic } => backend
            .research_directions(&blog_topic)
            .await
            .map(ToolOutput::ResearchDirections),
        OperationRequest::AdjustTone {
            content,
            target_tone,
        } => backend
            .adjust_tone(&content, target_tone)
            .await
            .map(ToolOutput::AdjustedTone),
        OperationRequest::GenerateConclusion { blog_content } => backend
            .generate_conclusion(&blog_content)
            .await
            .map(ToolOutput::Conclusion),
        OperationRequest::GenerateIntroduction { topic, audience } => backend
            .generate_introduction(&topic, audience)
            .await
            .map(ToolOutput::Introduction),
    }
}
