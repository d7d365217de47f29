//! HTTP client for OpenAI-compatible APIs.
//!
//! The API layer is split into small modules:
//! - `completions`: `/chat/completions` request/response handling
//! - `client`: HTTP client construction and bearer auth

use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;

mod client;
mod completions;

pub use client::ApiClient;

/// Minimal model API interface used by the theme generator.
///
/// This trait lets tests provide deterministic mock responses without network
/// calls while the production path uses [`ApiClient`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}
