use crate::error::ApiError;
use crate::format::format_usage;
use crate::types::{CompletionRequest, CompletionResponse, Usage};

use super::settings::{SettingsForm, DEFAULT_COMPLETION_MODEL};
use super::{redirect_if_unauthorized, Effect, InFlight};

pub const RESULT_PLACEHOLDER: &str = "The generated text will appear here...";

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionView {
    Placeholder,
    Generating,
    Text(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionPanel {
    pub prompt: String,
    pub settings: SettingsForm,
    view: CompletionView,
    last_usage: Option<Usage>,
    notice: Option<String>,
    in_flight: InFlight,
}

impl Default for CompletionPanel {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            settings: SettingsForm::new(DEFAULT_COMPLETION_MODEL),
            view: CompletionView::Placeholder,
            last_usage: None,
            notice: None,
            in_flight: InFlight::default(),
        }
    }
}

impl CompletionPanel {
    pub fn view(&self) -> &CompletionView {
        &self.view
    }

    pub fn usage_line(&self) -> Option<String> {
        self.last_usage.as_ref().map(format_usage)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_active()
    }

    pub fn begin_generate(&mut self) -> Option<CompletionRequest> {
        if self.in_flight.is_active() {
            return None;
        }
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            self.notice = Some("Please enter a prompt".to_string());
            return None;
        }

        self.in_flight.try_begin();
        self.notice = None;
        self.view = CompletionView::Generating;

        let settings = self.settings.resolve();
        Some(CompletionRequest {
            prompt,
            model: settings.model,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    pub fn finish_generate(&mut self, result: Result<CompletionResponse, ApiError>) -> Vec<Effect> {
        self.in_flight.finish();
        let mut effects = Vec::new();

        match result {
            Ok(resp) => {
                if let Some(usage) = resp.usage {
                    tracing::debug!(total = usage.total_tokens, "completion token usage");
                }
                self.last_usage = resp.usage;
                self.view = CompletionView::Text(resp.completion);
            }
            Err(err) => {
                tracing::error!(error = %err, "completion request failed");
                redirect_if_unauthorized(&err, &mut effects);
                self.view = CompletionView::Error(format!("Error: {}", err.user_message()));
            }
        }
        effects
    }
}
