//! Data model for the OpenAI Chat Completions API.
//!
//! These types are designed to serialize/deserialize directly to/from the
//! JSON payloads expected by any OpenAI-compatible endpoint. Only the subset
//! needed for single-turn JSON generation is modeled.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Message roles
// ---------------------------------------------------------------------------

/// Conversation participant role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction message.
    System,
    /// End-user message.
    User,
    /// Assistant/model message.
    Assistant,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A single message in the request or response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Author role for this conversation turn.
    pub role: Role,

    /// Text content. Providers may send null for refusals.
    pub content: Option<String>,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(content.into()),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Response format
// ---------------------------------------------------------------------------

/// Output constraint requested from the model.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Model must emit a single JSON object.
    JsonObject,
}

// ---------------------------------------------------------------------------
// Chat completion request / response
// ---------------------------------------------------------------------------

/// Request body for POST /chat/completions.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier used for request routing.
    pub model: String,
    /// Messages sent to the model.
    pub messages: Vec<Message>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response body from POST /chat/completions.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Provider response id.
    #[serde(default)]
    pub id: String,
    /// Ranked response choices.
    pub choices: Vec<Choice>,
    /// Optional token usage metadata.
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Trimmed text of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// A single choice in the API response.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Choice index in the provider response.
    #[serde(default)]
    pub index: u32,
    /// Assistant message payload for this choice.
    pub message: Message,
    /// Provider stop reason (`stop`, `length`, etc.).
    pub finish_reason: Option<String>,
}

/// Token usage reported by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Input tokens consumed by the request.
    pub prompt_tokens: u64,
    /// Output tokens generated by the model.
    pub completion_tokens: u64,
    /// Total tokens billed for the request.
    #[serde(default)]
    pub total_tokens: u64,
}
