//! Story-generation service client.
//!
//! The application treats generation as an opaque collaborator behind the
//! [`StoryService`] trait: topic in, [`IllustratedStory`] out, errors as
//! human-readable messages. The production implementation talks to a
//! Gemini-style `generateContent` REST endpoint: one structured-text call
//! for the narrative, then a best-effort image call per page.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::domain::{CredentialHostError, Illustration, IllustratedStory, StoryPage, StoryServiceError};
use crate::infra::app_config::AppConfig;
use crate::infra::host::CredentialHost;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Page budget requested from the model. The service may return fewer.
const MAX_PAGES: usize = 6;

#[async_trait]
pub trait StoryService: Send + Sync {
    async fn generate_story(&self, topic: &str) -> Result<IllustratedStory, StoryServiceError>;
}

pub struct GeminiStoryClient {
    http: reqwest::Client,
    base_url: String,
    text_model: String,
    image_model: String,
    host: Arc<dyn CredentialHost>,
}

impl GeminiStoryClient {
    pub fn new(config: &AppConfig, host: Arc<dyn CredentialHost>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            host,
        }
    }

    async fn post_generate(
        &self,
        model: &str,
        api_key: &str,
        body: &serde_json::Value,
    ) -> Result<GenerateContentResponse, StoryServiceError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| StoryServiceError::OperationFailed(err.into()))?;

        let status = response.status();
        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|err| StoryServiceError::OperationFailed(err.into()))?;

        if !status.is_success() {
            // Surface the service's own message verbatim; credential
            // classification upstream depends on its exact wording.
            let message = payload
                .pointer("/error/message")
                .and_then(|value| value.as_str())
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Request failed with HTTP {status}"));
            return Err(StoryServiceError::Service(message));
        }

        serde_json::from_value(payload)
            .map_err(|err| StoryServiceError::OperationFailed(err.into()))
    }

    async fn generate_pages(
        &self,
        api_key: &str,
        topic: &str,
    ) -> Result<PlannedStory, StoryServiceError> {
        let prompt = format!(
            "Write a short illustrated children's story about: {topic}\n\
             Respond with JSON only: {{\"title\": string, \"pages\": \
             [{{\"text\": string, \"illustration_prompt\": string}}]}}. \
             Use at most {MAX_PAGES} pages."
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });

        let response = self.post_generate(&self.text_model, api_key, &body).await?;
        let text = response
            .first_text()
            .ok_or(StoryServiceError::EmptyStory)?;

        let planned: PlannedStory = serde_json::from_str(text.trim())
            .map_err(|err| StoryServiceError::OperationFailed(err.into()))?;
        if planned.pages.is_empty() {
            return Err(StoryServiceError::EmptyStory);
        }
        Ok(planned)
    }

    async fn generate_illustration(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<Option<Illustration>, StoryServiceError> {
        let body = json!({
            "contents": [{ "parts": [{
                "text": format!("A soft, warm storybook illustration: {prompt}")
            }] }],
            "generationConfig": { "responseModalities": ["IMAGE"] },
        });

        let response = self.post_generate(&self.image_model, api_key, &body).await?;
        Ok(response.first_inline_data().map(|inline| Illustration {
            mime_type: inline.mime_type.clone(),
            data: inline.data.clone(),
        }))
    }
}

#[async_trait]
impl StoryService for GeminiStoryClient {
    async fn generate_story(&self, topic: &str) -> Result<IllustratedStory, StoryServiceError> {
        let api_key = match self.host.api_key().await {
            Ok(Some(key)) if !key.trim().is_empty() => key,
            // No usable key. Use the service's canonical wording so the
            // request controller classifies this as a credential failure.
            Ok(_) => {
                return Err(StoryServiceError::Service(
                    "API key not valid. Please pass a valid API key.".to_string(),
                ));
            }
            Err(CredentialHostError::Unavailable) => {
                return Err(StoryServiceError::Service(
                    "API key not valid. Please pass a valid API key.".to_string(),
                ));
            }
            Err(err) => return Err(StoryServiceError::OperationFailed(err.into())),
        };

        let planned = self.generate_pages(&api_key, topic).await?;

        let mut pages = Vec::with_capacity(planned.pages.len());
        for planned_page in planned.pages.into_iter().take(MAX_PAGES) {
            // Illustrations are best-effort: a failed image call degrades the
            // page to text-only rather than failing the whole story.
            let illustration = match self
                .generate_illustration(&api_key, &planned_page.illustration_prompt)
                .await
            {
                Ok(illustration) => illustration,
                Err(err) => {
                    log::warn!("illustration generation failed: {err}");
                    None
                }
            };
            pages.push(StoryPage {
                text: planned_page.text,
                illustration,
            });
        }

        Ok(IllustratedStory {
            title: planned.title,
            pages,
        })
    }
}

/// Narrative plan parsed out of the structured-text call.
#[derive(Debug, Deserialize)]
struct PlannedStory {
    title: String,
    pages: Vec<PlannedPage>,
}

#[derive(Debug, Deserialize)]
struct PlannedPage {
    text: String,
    illustration_prompt: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.text.as_deref())
    }

    fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.inline_data.as_ref())
    }
}
