//! Custom assistant creation and the list of assistants already created.

use crate::error::ApiError;
use crate::format::format_timestamp;
use crate::types::{
    ConversationSummary, CreateAssistantRequest, CreateAssistantResponse, CreatedAssistant,
};

use super::settings::DEFAULT_ASSISTANT_MODEL;
use super::{redirect_if_unauthorized, Effect, InFlight};

pub const RESULT_PLACEHOLDER: &str = "The created assistant will appear here...";
pub const NO_ASSISTANTS: &str = "You have not created any assistants yet...";
pub const NO_PREVIEW: &str = "No preview";

#[derive(Debug, Clone, PartialEq)]
pub enum AssistantView {
    Placeholder,
    Creating,
    Created(CreatedAssistant),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssistantList {
    Loading,
    Empty,
    Loaded(Vec<ConversationSummary>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantPanel {
    pub request: String,
    pub model: String,
    view: AssistantView,
    list: AssistantList,
    notice: Option<String>,
    in_flight: InFlight,
}

impl Default for AssistantPanel {
    fn default() -> Self {
        Self {
            request: String::new(),
            model: DEFAULT_ASSISTANT_MODEL.to_string(),
            view: AssistantView::Placeholder,
            list: AssistantList::Loading,
            notice: None,
            in_flight: InFlight::default(),
        }
    }
}

/// Plain-text rendering of a freshly created assistant.
pub fn describe_assistant(assistant: &CreatedAssistant) -> String {
    format!(
        "Assistant created!\nName: {}\nCreated: {}\nSystem Prompt:\n{}",
        assistant.title,
        format_timestamp(&assistant.created_at),
        assistant.system_prompt
    )
}

impl AssistantPanel {
    pub fn view(&self) -> &AssistantView {
        &self.view
    }

    pub fn list(&self) -> &AssistantList {
        &self.list
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_active()
    }

    pub fn begin_create(&mut self) -> Option<CreateAssistantRequest> {
        if self.in_flight.is_active() {
            return None;
        }
        let request = self.request.trim().to_string();
        if request.is_empty() {
            self.notice = Some("Please describe the assistant you need".to_string());
            return None;
        }

        self.in_flight.try_begin();
        self.notice = None;
        self.view = AssistantView::Creating;
        Some(CreateAssistantRequest {
            request,
            model: self.model.clone(),
        })
    }

    pub fn finish_create(
        &mut self,
        result: Result<CreateAssistantResponse, ApiError>,
    ) -> Vec<Effect> {
        self.in_flight.finish();
        let mut effects = Vec::new();

        match result {
            Ok(CreateAssistantResponse {
                success: true,
                conversation: Some(conversation),
                ..
            }) => {
                tracing::info!(id = conversation.id, title = %conversation.title, "assistant created");
                self.request.clear();
                self.view = AssistantView::Created(conversation);
                effects.push(Effect::RefreshAssistants);
            }
            Ok(resp) => {
                let reason = resp
                    .error
                    .unwrap_or_else(|| "unknown error".to_string());
                tracing::warn!(%reason, "backend refused to create assistant");
                self.view = AssistantView::Failed(format!("Creation failed: {reason}"));
            }
            Err(err) => {
                tracing::error!(error = %err, "create assistant request failed");
                redirect_if_unauthorized(&err, &mut effects);
                self.view = AssistantView::Failed(format!("Creation failed: {}", err.user_message()));
            }
        }
        effects
    }

    pub fn begin_load_assistants(&mut self) {
        if !matches!(self.list, AssistantList::Loaded(_)) {
            self.list = AssistantList::Loading;
        }
    }

    pub fn finish_load_assistants(
        &mut self,
        result: Result<Vec<ConversationSummary>, ApiError>,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.list = match result {
            Ok(conversations) => {
                let assistants: Vec<_> = conversations
                    .into_iter()
                    .filter(|c| c.is_custom_assistant)
                    .collect();
                if assistants.is_empty() {
                    AssistantList::Empty
                } else {
                    AssistantList::Loaded(assistants)
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "loading assistant list failed");
                redirect_if_unauthorized(&err, &mut effects);
                AssistantList::Failed
            }
        };
        effects
    }

    pub fn clear_form(&mut self) {
        self.request.clear();
        self.notice = None;
        self.view = AssistantView::Placeholder;
    }

    pub fn copy_result(&mut self) -> Vec<Effect> {
        match &self.view {
            AssistantView::Created(assistant) => {
                self.notice = None;
                vec![Effect::CopyToClipboard(describe_assistant(assistant))]
            }
            _ => {
                self.notice = Some("Nothing to copy".to_string());
                Vec::new()
            }
        }
    }
}
