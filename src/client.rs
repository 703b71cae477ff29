//! Typed HTTP client for the Endless backend.
//!
//! The backend keeps the login in a session cookie, so a single
//! cookie-carrying [`Client`] is shared by every call.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::types::{
    ApiErrorResponse, ChatRequest, ChatResponse, CompletionRequest, CompletionResponse,
    ConversationSummary, ConversationsResponse, CreateAssistantRequest, CreateAssistantResponse,
    LoginRequest, LoginResponse, StatusResponse,
};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client rooted at `base_url` (e.g. "http://127.0.0.1:5000").
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder().cookie_store(true).build()?;
        // the browser's own cookie jar carries the session on web
        #[cfg(target_arch = "wasm32")]
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .json::<ApiErrorResponse>()
            .await
            .ok()
            .map(|body| body.error);
        ApiError::Api { status, message }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::handle_error(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// POST without a body where the response content is irrelevant.
    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.client.post(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(Self::handle_error(response).await);
        }
        Ok(())
    }

    /* ================= AUTH ================= */

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post("/login", request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/logout").await
    }

    pub async fn status(&self) -> Result<StatusResponse, ApiError> {
        self.get("/api/status").await
    }

    /* ================= CONVERSATIONS ================= */

    pub async fn conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        let body: ConversationsResponse = self.get("/api/conversations").await?;
        Ok(body.conversations)
    }

    pub async fn create_assistant(
        &self,
        request: &CreateAssistantRequest,
    ) -> Result<CreateAssistantResponse, ApiError> {
        self.post("/api/create_assistant", request).await
    }

    pub async fn clear_history(&self) -> Result<(), ApiError> {
        self.post_empty("/api/clear_history").await
    }

    /* ================= GENERATION ================= */

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post("/api/chat", request).await
    }

    pub async fn completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ApiError> {
        self.post("/api/completion", request).await
    }
}
