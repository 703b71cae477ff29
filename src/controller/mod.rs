//! Page state, kept apart from the network and the view.
//!
//! Every user gesture runs as `begin_*` (guard, validate, build the request),
//! then the caller awaits [`crate::client::HttpBackend`], then `finish_*`
//! consumes the result and hands back the [`Effect`]s the view must apply.

pub mod assistant;
pub mod chat;
pub mod completion;
pub mod login;
pub mod settings;
pub mod workspace;

use crate::error::ApiError;

/// Top-level pages a controller can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
}

/// Inputs a controller may ask the view to focus. The value is the DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ApiKey,
    ChatInput,
    CompletionPrompt,
    AssistantRequest,
}

impl Field {
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::ApiKey => "api-key",
            Self::ChatInput => "chat-input",
            Self::CompletionPrompt => "completion-prompt",
            Self::AssistantRequest => "assistant-request",
        }
    }
}

/// Side effects that only the view layer can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(Page),
    Focus(Field),
    ScrollTranscript,
    RefreshAssistants,
    CopyToClipboard(String),
}

/// One outstanding request per action; overlapping invocations are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight(bool);

impl InFlight {
    /// Returns `false` when a request is already pending.
    pub fn try_begin(&mut self) -> bool {
        if self.0 {
            return false;
        }
        self.0 = true;
        true
    }

    pub fn finish(&mut self) {
        self.0 = false;
    }

    pub fn is_active(&self) -> bool {
        self.0
    }
}

/// Shared 401 handling: push the login redirect onto `effects`.
pub(crate) fn redirect_if_unauthorized(err: &ApiError, effects: &mut Vec<Effect>) {
    if err.is_unauthorized() {
        tracing::warn!("session rejected by backend, returning to login");
        effects.push(Effect::Navigate(Page::Login));
    }
}
