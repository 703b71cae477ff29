use clap::Parser;
use tracing_subscriber::EnvFilter;

use endless_chat::client::HttpBackend;
use endless_chat::config::{ClientConfig, DEFAULT_LOG_FILTER};
use endless_chat::ui::App;

fn main() {
    let config = ClientConfig::parse();

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let backend = match HttpBackend::new(&config.server) {
        Ok(backend) => backend,
        Err(err) => {
            tracing::error!(error = %err, "failed to build HTTP client");
            std::process::exit(1);
        }
    };
    tracing::info!(server = %backend.base_url(), "starting endless-chat");

    dioxus::LaunchBuilder::new().with_context(backend).launch(App);
}
