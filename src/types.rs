//! Request and response bodies exchanged with the Endless backend.
//!
//! These mirror the JSON shapes served by the backend; fields the server may
//! omit are defaulted so a partial body still deserializes.

use serde::{Deserialize, Serialize};

/* ================= AUTH ================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub api_key_masked: Option<String>,
}

impl StatusResponse {
    /// Status string the backend reports once a session is fully usable.
    pub const RUNNING: &'static str = "running";

    pub fn is_running(&self) -> bool {
        self.logged_in && self.status == Self::RUNNING
    }
}

/* ================= CONVERSATIONS ================= */

/// Entry of `GET /api/conversations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    #[serde(default)]
    pub is_custom_assistant: bool,
    #[serde(default)]
    pub system_prompt_preview: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationsResponse {
    #[serde(default)]
    pub conversations: Vec<ConversationSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAssistantRequest {
    pub request: String,
    pub model: String,
}

/// Conversation returned after a custom assistant was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedAssistant {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    #[serde(default)]
    pub system_prompt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAssistantResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub conversation: Option<CreatedAssistant>,
    #[serde(default)]
    pub error: Option<String>,
}

/* ================= GENERATION ================= */

/// Token accounting reported by the backend for chat and completion calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Routes the message to a specific conversation, e.g. a custom assistant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub completion: String,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
