//! Display helpers for values coming back from the backend.

use chrono::{DateTime, NaiveDateTime};

use crate::types::Usage;

/// `1500` -> `1.5K`, anything under a thousand is printed as is.
pub fn format_token_count(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}K", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

pub fn format_usage(usage: &Usage) -> String {
    format!(
        "Tokens: {} (prompt {}, completion {})",
        format_token_count(usage.total_tokens),
        format_token_count(usage.prompt_tokens),
        format_token_count(usage.completion_tokens)
    )
}

// the backend emits naive ISO timestamps, but tolerate an offset too
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}
