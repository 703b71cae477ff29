//! Error type shared by the HTTP client and the page controllers.

use reqwest::StatusCode;

/// Message shown when the request never got a response.
pub const NETWORK_FAILURE: &str = "Network connection failed";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped.
    #[error("Network connection failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// The body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }

    /// Any action hitting a 401 sends the user back to the login page.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }

    /// The `error` field of the backend's response body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Text for result areas: server message first, then transport failure,
    /// then whatever the error itself says.
    pub fn user_message(&self) -> String {
        if let Some(msg) = self.server_message() {
            return msg.to_string();
        }
        match self {
            Self::Network(_) => NETWORK_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}
