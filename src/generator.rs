//! Theme generation through a chat-completion model.
//!
//! One request per theme: the model is asked for a JSON object, the reply is
//! parsed into a [`ThemeSpec`], and the result is checked against the schema
//! before anything touches the filesystem.

use async_trait::async_trait;

use crate::api::ModelClient;
use crate::config::ApiConfig;
use crate::error::GenerationError;
use crate::prompt::{render_theme_prompt, SYSTEM_PROMPT};
use crate::theme::{schema, ThemeName, ThemeSpec};
use crate::types::{ChatRequest, Message, ResponseFormat};

/// Produces a complete theme for a keyword.
#[async_trait]
pub trait ThemeGenerator: Send + Sync {
    async fn generate(&self, name: &ThemeName) -> Result<ThemeSpec, GenerationError>;
}

/// [`ThemeGenerator`] backed by any [`ModelClient`].
pub struct ModelThemeGenerator<C> {
    client: C,
    model: String,
    temperature: Option<f64>,
}

impl<C: ModelClient> ModelThemeGenerator<C> {
    pub fn new(client: C, api: &ApiConfig) -> Self {
        Self {
            client,
            model: api.model.clone(),
            temperature: api.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, name: &ThemeName) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(SYSTEM_PROMPT),
                Message::user(render_theme_prompt(name)),
            ],
            response_format: Some(ResponseFormat::JsonObject),
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl<C: ModelClient> ThemeGenerator for ModelThemeGenerator<C> {
    async fn generate(&self, name: &ThemeName) -> Result<ThemeSpec, GenerationError> {
        let request = self.build_request(name);
        tracing::info!(theme = %name, model = %self.model, "requesting theme");

        let response = self.client.chat(&request).await?;
        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "theme request usage"
            );
        }

        let content = response
            .first_content()
            .ok_or(GenerationError::EmptyResponse)?;
        parse_theme_reply(content)
    }
}

/// Turn raw model output into a validated theme.
pub fn parse_theme_reply(content: &str) -> Result<ThemeSpec, GenerationError> {
    let body = strip_code_fence(content);
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|source| {
            tracing::warn!(error = %source, "model reply is not valid JSON");
            GenerationError::InvalidJson {
                source,
                raw: content.to_string(),
            }
        })?;

    let spec = ThemeSpec::from_json_value(value)?;
    schema::validate(&spec)?;
    tracing::debug!(entries = spec.len(), "theme reply validated");
    Ok(spec)
}

/// Remove one surrounding Markdown fence (```json ... ```), if present.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim().contains(&['{', '['][..]) => body.trim(),
        _ => inner.trim(),
    }
}
