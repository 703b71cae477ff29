use uuid::Uuid;

use crate::error::ApiError;
use crate::format::format_usage;
use crate::types::{ChatRequest, ChatResponse, Usage};

use super::settings::{SettingsForm, DEFAULT_CHAT_MODEL};
use super::{redirect_if_unauthorized, Effect, Field, InFlight};

pub const WELCOME_PLACEHOLDER: &str = "Start a conversation...";
pub const CLEARED_PLACEHOLDER: &str = "Chat history cleared, start a new conversation...";
pub const DEFAULT_INPUT_HINT: &str = "Type a message, Enter to send, Shift+Enter for a new line";
pub const ASSISTANT_INPUT_HINT: &str = "You can now talk to your custom assistant...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    Error,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
            Self::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
}

impl TranscriptEntry {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatPanel {
    pub input: String,
    pub settings: SettingsForm,
    transcript: Vec<TranscriptEntry>,
    placeholder: &'static str,
    conversation_id: Option<i64>,
    input_hint: &'static str,
    last_usage: Option<Usage>,
    notice: Option<String>,
    in_flight: InFlight,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self {
            input: String::new(),
            settings: SettingsForm::new(DEFAULT_CHAT_MODEL),
            transcript: Vec::new(),
            placeholder: WELCOME_PLACEHOLDER,
            conversation_id: None,
            input_hint: DEFAULT_INPUT_HINT,
            last_usage: None,
            notice: None,
            in_flight: InFlight::default(),
        }
    }
}

impl ChatPanel {
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Shown in place of the transcript while it is empty.
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn input_hint(&self) -> &'static str {
        self.input_hint
    }

    pub fn conversation_id(&self) -> Option<i64> {
        self.conversation_id
    }

    pub fn usage_line(&self) -> Option<String> {
        self.last_usage.as_ref().map(format_usage)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Send later messages to `id` (a custom assistant conversation).
    pub fn attach_conversation(&mut self, id: i64) {
        tracing::debug!(conversation_id = id, "chat attached to conversation");
        self.conversation_id = Some(id);
        self.input_hint = ASSISTANT_INPUT_HINT;
    }

    /// The returned effects scroll the new user message into view while the
    /// reply is pending.
    pub fn begin_send(&mut self) -> Option<(ChatRequest, Vec<Effect>)> {
        if self.in_flight.is_active() {
            return None;
        }
        let message = self.input.trim().to_string();
        if message.is_empty() {
            return None;
        }

        self.in_flight.try_begin();
        self.input.clear();
        self.notice = None;
        self.transcript
            .push(TranscriptEntry::new(Role::User, message.clone()));

        let settings = self.settings.resolve();
        let request = ChatRequest {
            message,
            model: settings.model,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            conversation_id: self.conversation_id,
        };
        Some((request, vec![Effect::ScrollTranscript]))
    }

    pub fn finish_send(&mut self, result: Result<ChatResponse, ApiError>) -> Vec<Effect> {
        self.in_flight.finish();
        let mut effects = Vec::new();

        match result {
            Ok(resp) => {
                if let Some(usage) = resp.usage {
                    tracing::debug!(
                        total = usage.total_tokens,
                        prompt = usage.prompt_tokens,
                        completion = usage.completion_tokens,
                        "chat token usage"
                    );
                    self.last_usage = Some(usage);
                }
                self.transcript
                    .push(TranscriptEntry::new(Role::Assistant, resp.response));
            }
            Err(err) => {
                tracing::error!(error = %err, "chat request failed");
                redirect_if_unauthorized(&err, &mut effects);
                self.transcript.push(TranscriptEntry::new(
                    Role::Error,
                    format!("Error: {}", err.user_message()),
                ));
            }
        }

        effects.push(Effect::ScrollTranscript);
        effects.push(Effect::Focus(Field::ChatInput));
        effects
    }

    /// Clearing shares the send guard so it never races a pending reply.
    pub fn begin_clear(&mut self) -> bool {
        self.in_flight.try_begin()
    }

    pub fn finish_clear(&mut self, result: Result<(), ApiError>) -> Vec<Effect> {
        self.in_flight.finish();
        let mut effects = Vec::new();

        match result {
            Ok(()) => {
                tracing::info!("chat history cleared");
                self.transcript.clear();
                self.last_usage = None;
                self.notice = None;
                self.placeholder = CLEARED_PLACEHOLDER;
                effects.push(Effect::Focus(Field::ChatInput));
            }
            Err(err) => {
                tracing::error!(error = %err, "clearing history failed");
                redirect_if_unauthorized(&err, &mut effects);
                self.notice = Some(format!("Failed to clear history: {}", err.user_message()));
            }
        }
        effects
    }
}
