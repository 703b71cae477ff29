use crate::error::ApiError;
use crate::types::StatusResponse;

use super::{redirect_if_unauthorized, Effect, Field, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Chat,
    Completion,
    Assistant,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Chat, Tab::Completion, Tab::Assistant];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Completion => "Completion",
            Self::Assistant => "Custom Assistants",
        }
    }

    pub const fn primary_field(self) -> Field {
        match self {
            Self::Chat => Field::ChatInput,
            Self::Completion => Field::CompletionPrompt,
            Self::Assistant => Field::AssistantRequest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Loading,
    Online,
    Offline,
}

impl Indicator {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

pub const NOT_LOGGED_IN: &str = "Not logged in";

/// Main page chrome: tabs, connection status and the logout action.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    tab: Tab,
    indicator: Indicator,
    status_text: String,
    api_key_masked: String,
    notice: Option<String>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            tab: Tab::Chat,
            indicator: Indicator::Loading,
            status_text: "Checking status...".to_string(),
            api_key_masked: NOT_LOGGED_IN.to_string(),
            notice: None,
        }
    }
}

impl Workspace {
    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn api_key_masked(&self) -> &str {
        &self.api_key_masked
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn switch_tab(&mut self, tab: Tab) -> Vec<Effect> {
        self.tab = tab;
        vec![Effect::Focus(tab.primary_field())]
    }

    pub fn finish_status(&mut self, result: Result<StatusResponse, ApiError>) -> Vec<Effect> {
        let status = match result {
            Ok(status) => status,
            Err(err) => {
                tracing::error!(error = %err, "status check failed");
                self.indicator = Indicator::Offline;
                self.status_text = "Unable to reach the server".to_string();
                self.api_key_masked = NOT_LOGGED_IN.to_string();
                if err.is_unauthorized() {
                    return vec![Effect::Navigate(Page::Login)];
                }
                return Vec::new();
            }
        };

        self.api_key_masked = match (&status.api_key_masked, status.logged_in) {
            (Some(masked), true) if !masked.is_empty() => masked.clone(),
            _ => NOT_LOGGED_IN.to_string(),
        };

        if status.is_running() {
            self.indicator = Indicator::Online;
            self.status_text = "System running, logged in".to_string();
            Vec::new()
        } else if !status.logged_in {
            self.indicator = Indicator::Offline;
            self.status_text = NOT_LOGGED_IN.to_string();
            vec![Effect::Navigate(Page::Login)]
        } else {
            self.indicator = Indicator::Offline;
            self.status_text = "Unable to reach the server".to_string();
            Vec::new()
        }
    }

    pub fn finish_logout(&mut self, result: Result<(), ApiError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                tracing::info!("logged out");
                vec![Effect::Navigate(Page::Login)]
            }
            Err(err) => {
                tracing::error!(error = %err, "logout failed");
                let mut effects = Vec::new();
                redirect_if_unauthorized(&err, &mut effects);
                self.notice = Some(format!("Logout failed: {}", err.user_message()));
                effects
            }
        }
    }
}
