//! Generation parameters as typed into the settings row of a panel.

pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_ASSISTANT_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const MAX_TEMPERATURE: f64 = 2.0;

pub const CHAT_MODELS: &[&str] = &["gpt-3.5-turbo", "gpt-4", "gpt-4o", "gpt-4o-mini"];
pub const COMPLETION_MODELS: &[&str] = &["gpt-3.5-turbo-instruct", "davinci-002", "babbage-002"];
pub const ASSISTANT_MODELS: &[&str] = &["gpt-4", "gpt-4o", "gpt-3.5-turbo"];

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Raw form values; parsing happens only when a request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    default_model: &'static str,
    pub model: String,
    pub max_tokens: String,
    pub temperature: String,
}

impl SettingsForm {
    pub fn new(default_model: &'static str) -> Self {
        Self {
            default_model,
            model: default_model.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS.to_string(),
            temperature: DEFAULT_TEMPERATURE.to_string(),
        }
    }

    pub fn set_model(&mut self, model: String) {
        tracing::debug!(from = %self.model, to = %model, "model switched");
        self.model = model;
    }

    pub fn resolve(&self) -> GenerationSettings {
        let model = self.model.trim();
        GenerationSettings {
            model: if model.is_empty() {
                self.default_model.to_string()
            } else {
                model.to_string()
            },
            max_tokens: parse_max_tokens(&self.max_tokens),
            temperature: parse_temperature(&self.temperature),
        }
    }
}

// clamp into u32 so absurd input still yields a sendable value
fn parse_max_tokens(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(v) if v > 0 => u32::try_from(v).unwrap_or(u32::MAX),
        _ => DEFAULT_MAX_TOKENS,
    }
}

fn parse_temperature(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if (0.0..=MAX_TEMPERATURE).contains(&v) => v,
        _ => DEFAULT_TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_uses_defaults() {
        let mut form = SettingsForm::new(DEFAULT_COMPLETION_MODEL);
        form.model = "  ".into();
        form.max_tokens = "".into();
        form.temperature = "warm".into();
        assert_eq!(
            form.resolve(),
            GenerationSettings {
                model: DEFAULT_COMPLETION_MODEL.into(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
            }
        );
    }

    #[test]
    fn max_tokens_rejects_non_positive_and_clamps() {
        assert_eq!(parse_max_tokens("0"), DEFAULT_MAX_TOKENS);
        assert_eq!(parse_max_tokens("-5"), DEFAULT_MAX_TOKENS);
        assert_eq!(parse_max_tokens(" 256 "), 256);
        assert_eq!(parse_max_tokens("99999999999"), u32::MAX);
    }

    #[test]
    fn zero_temperature_is_kept() {
        assert_eq!(parse_temperature("0"), 0.0);
        assert_eq!(parse_temperature("2.5"), DEFAULT_TEMPERATURE);
    }
}
