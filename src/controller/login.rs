use crate::error::ApiError;
use crate::types::{LoginRequest, LoginResponse};

use super::{Effect, Field, InFlight, Page};

pub const API_KEY_PREFIX: &str = "sk-";
pub const MIN_API_KEY_LEN: usize = 20;

/// Why a key was refused before reaching the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyRejection {
    #[error("Please enter your API key")]
    Empty,
    #[error("API key format is invalid, it must start with sk-")]
    BadPrefix,
    #[error("API key length is invalid")]
    TooShort,
}

pub fn validate_api_key(key: &str) -> Result<(), KeyRejection> {
    if key.is_empty() {
        return Err(KeyRejection::Empty);
    }
    if !key.starts_with(API_KEY_PREFIX) {
        return Err(KeyRejection::BadPrefix);
    }
    if key.chars().count() < MIN_API_KEY_LEN {
        return Err(KeyRejection::TooShort);
    }
    Ok(())
}

/// Message for a failed login attempt.
pub fn login_error_message(err: &ApiError) -> String {
    if let Some(msg) = err.server_message() {
        return msg.to_string();
    }
    match (err, err.status()) {
        (_, Some(401)) => "Invalid API key, please check your key".to_string(),
        (_, Some(s)) if s >= 500 => "Server error, please try again later".to_string(),
        (ApiError::Network(_), None) => {
            "Network connection failed, please check your connection".to_string()
        }
        _ => "Login failed, please try again".to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub api_key: String,
    error: Option<String>,
    in_flight: InFlight,
}

impl LoginForm {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_active()
    }

    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.in_flight.is_active() {
            return None;
        }
        self.error = None;

        let api_key = self.api_key.trim().to_string();
        if let Err(rejection) = validate_api_key(&api_key) {
            self.error = Some(rejection.to_string());
            return None;
        }

        self.in_flight.try_begin();
        Some(LoginRequest { api_key })
    }

    pub fn finish_submit(&mut self, result: Result<LoginResponse, ApiError>) -> Vec<Effect> {
        self.in_flight.finish();
        match result {
            Ok(resp) if resp.success => {
                tracing::info!("login accepted");
                vec![Effect::Navigate(Page::Home)]
            }
            Ok(_) => {
                self.error = Some("Login failed, please try again".to_string());
                vec![Effect::Focus(Field::ApiKey)]
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.error = Some(login_error_message(&err));
                vec![Effect::Focus(Field::ApiKey)]
            }
        }
    }
}
