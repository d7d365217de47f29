//! Shared test fixtures for theme, config, install, and app test modules.

use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::api::ModelClient;
use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse, Choice, Message, Role};
use crate::ui::{ProgressHandle, RenderSink};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("vibejam-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// A complete, schema-valid theme as the model would return it.
pub fn full_theme_json_fixture() -> String {
    json!({
        "palette": {
            "0": "#1d1f21", "1": "#cc6666", "2": "#b5bd68", "3": "#f0c674",
            "4": "#81a2be", "5": "#b294bb", "6": "#8abeb7", "7": "#c5c8c6",
            "8": "#666666", "9": "#d54e53", "10": "#b9ca4a", "11": "#e7c547",
            "12": "#7aa6da", "13": "#c397d8", "14": "#70c0b1", "15": "#ffffff"
        },
        "background": "#1d1f21",
        "foreground": "#c5c8c6",
        "cursor-color": "#c5c8c6",
        "selection-background": "#373b41",
        "selection-foreground": "#ffffff"
    })
    .to_string()
}

/// Build a chat response whose first choice carries `content`.
pub fn chat_response_with_content(content: Option<&str>) -> ChatResponse {
    ChatResponse {
        id: "chatcmpl-test".to_string(),
        choices: vec![Choice {
            index: 0,
            message: Message {
                role: Role::Assistant,
                content: content.map(str::to_string),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

/// Model client that replays canned results and records requests.
pub struct ScriptedModelClient {
    responses: Mutex<Vec<Result<ChatResponse, ApiError>>>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedModelClient {
    pub fn new(responses: Vec<Result<ChatResponse, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Client answering once with `content` as the assistant message.
    pub fn replying(content: &str) -> Self {
        Self::new(vec![Ok(chat_response_with_content(Some(content)))])
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ApiError::Status(500, "no scripted response left".to_string()));
        }
        responses.remove(0)
    }
}

/// Render sink that records `kind: text` lines instead of printing.
#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    fn push(&self, kind: &str, text: &str) {
        self.lines.lock().unwrap().push(format!("{kind}: {text}"));
    }
}

impl RenderSink for RecordingSink {
    fn header(&self, model: &str) {
        self.push("header", model);
    }

    fn section(&self, title: &str) {
        self.push("section", title);
    }

    fn activity(&self, text: &str) {
        self.push("activity", text);
    }

    fn field(&self, key: &str, value: &str) {
        self.push("field", &format!("{key}: {value}"));
    }

    fn success(&self, text: &str) {
        self.push("success", text);
    }

    fn preview(&self, text: &str) {
        for line in text.lines() {
            self.push("preview", line);
        }
    }

    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }

    fn error(&self, msg: &str) {
        self.push("error", msg);
    }

    fn progress(&self, _label: &str) -> ProgressHandle {
        ProgressHandle::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn theme_fixture_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&full_theme_json_fixture()).unwrap();
        assert_eq!(value["palette"].as_object().unwrap().len(), 16);
    }
}
