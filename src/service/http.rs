//! HTTP client for the blog AI service
//!
//! POSTs JSON argument records to the service's per-operation endpoints
//! and decodes the typed payloads.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{DraftError, DraftResult};
use crate::preferences::{Audience, Tone};
use crate::results::{
    AdjustedTone, ConclusionDraft, EditedContent, ExpandedPoints, IntroductionHooks,
    OrganizedThoughts, ResearchDirections, TitleIdeas,
};
use crate::service::AiBackend;

const MAX_ATTEMPTS: u32 = 3;

// Wire bodies, one per endpoint
#[derive(Serialize)]
struct OrganizeThoughtsBody<'a> {
    raw_thoughts: &'a str,
}

#[derive(Serialize)]
struct EditContentBody<'a> {
    draft_content: &'a str,
    target_audience: Audience,
    tone: Tone,
}

#[derive(Serialize)]
struct GenerateTitlesBody<'a> {
    blog_content: &'a str,
    topic: &'a str,
}

#[derive(Serialize)]
struct ExpandPointsBody<'a> {
    brief_points: &'a str,
    desired_tone: Tone,
}

#[derive(Serialize)]
struct ResearchDirectionsBody<'a> {
    blog_topic: &'a str,
}

#[derive(Serialize)]
struct AdjustToneBody<'a> {
    content: &'a str,
    target_tone: Tone,
}

#[derive(Serialize)]
struct GenerateConclusionBody<'a> {
    blog_content: &'a str,
}

#[derive(Serialize)]
struct GenerateIntroductionBody<'a> {
    topic: &'a str,
    target_audience: Audience,
}

/// Client for the remote blog AI endpoints
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client from config (base URL and request timeout).
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body to one AI endpoint and decode the payload.
    ///
    /// Transient send failures are retried with a short backoff before
    /// giving up.
    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> DraftResult<T> {
        let url = format!("{}/api/blog/ai/{}", self.base_url, endpoint);
        debug!("AI request: POST {}", url);

        for attempt in 1..=MAX_ATTEMPTS {
            let response = match self.client.post(&url).json(body).send().await {
                Ok(response) => response,
                Err(e) if attempt < MAX_ATTEMPTS => {
                    warn!(
                        "⚠️ AI request retry {}/{} for '{}': {}",
                        attempt, MAX_ATTEMPTS, endpoint, e
                    );
                    tokio::time::sleep(Duration::from_millis(250 * attempt as u64)).await;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let status = response.status();
            let body_text = response.text().await?;

            if !status.is_success() {
                warn!("❌ AI service error ({}) for '{}': {}", status, endpoint, body_text);
                return Err(DraftError::Api {
                    status: status.as_u16(),
                    detail: body_text,
                });
            }

            return serde_json::from_str(&body_text).map_err(|e| {
                warn!(
                    "❌ Failed to decode '{}' response: {} - Body: {}",
                    endpoint, e, body_text
                );
                DraftError::Service(format!("unexpected {} payload: {}", endpoint, e))
            });
        }

        unreachable!("retry loop either returns or continues")
    }
}

#[async_trait]
impl AiBackend for HttpBackend {
    async fn organize_thoughts(&self, raw_thoughts: &str) -> DraftResult<OrganizedThoughts> {
        self.post_json("organize-thoughts", &OrganizeThoughtsBody { raw_thoughts })
            .await
    }

    async fn edit_content(
        &self,
        draft_content: &str,
        audience: Audience,
        tone: Tone,
    ) -> DraftResult<EditedContent> {
        self.post_json(
            "edit-content",
            &EditContentBody {
                draft_content,
                target_audience: audience,
                tone,
            },
        )
        .await
    }

    async fn generate_titles(&self, blog_content: &str, topic: &str) -> DraftResult<TitleIdeas> {
        self.post_json(
            "generate-titles",
            &GenerateTitlesBody {
                blog_content,
                topic,
            },
        )
        .await
    }

    async fn expand_points(&self, brief_points: &str, tone: Tone) -> DraftResult<ExpandedPoints> {
        self.post_json(
            "expand-brief-points",
            &ExpandPointsBody {
                brief_points,
                desired_tone: tone,
            },
        )
        .await
    }

    async fn research_directions(&self, blog_topic: &str) -> DraftResult<ResearchDirections> {
        self.post_json(
            "generate-research-directions",
            &ResearchDirectionsBody { blog_topic },
        )
        .await
    }

    async fn adjust_tone(&self, content: &str, target_tone: Tone) -> DraftResult<AdjustedTone> {
        self.post_json(
            "adjust-tone",
            &AdjustToneBody {
                content,
                target_tone,
            },
        )
        .await
    }

    async fn generate_conclusion(&self, blog_content: &str) -> DraftResult<ConclusionDraft> {
        self.post_json("generate-conclusion", &GenerateConclusionBody { blog_content })
            .await
    }

    async fn generate_introduction(
        &self,
        topic: &str,
        audience: Audience,
    ) -> DraftResult<IntroductionHooks> {
        self.post_json(
            "generate-introduction",
            &GenerateIntroductionBody {
                topic,
                target_audience: audience,
            },
        )
        .await
    }

    /// Quick reachability probe against the service's health endpoint
    async fn health_check(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(2))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
