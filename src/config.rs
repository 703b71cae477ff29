use clap::Parser;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_FILTER: &str = "endless_chat=info,warn";

/// Endless Chat - desktop client for the Endless assistant service.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "endless-chat")]
#[command(author, version, about, long_about = None)]
pub struct ClientConfig {
    /// Backend base URL.
    #[arg(long = "server", env = "ENDLESS_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Tracing filter directives.
    #[arg(long = "log", env = "ENDLESS_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cfg = ClientConfig::try_parse_from([
            "endless-chat",
            "--server",
            "https://chat.example.com/",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(cfg.server, "https://chat.example.com/");
        assert_eq!(cfg.log_filter, "debug");
    }
}
