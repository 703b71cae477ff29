use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus::router::Navigator;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::{sleep, Duration};

use crate::controller::{Effect, Field, Page};

use super::Route;

/// Runs the view-side effects a controller asked for.
///
/// `RefreshAssistants` is left to the assistant tab, which owns that list.
pub(crate) fn apply(effects: Vec<Effect>, nav: Navigator) {
    for effect in effects {
        match effect {
            Effect::Navigate(page) => {
                nav.replace(route_for(page));
            }
            Effect::Focus(field) => {
                spawn(focus(field));
            }
            Effect::ScrollTranscript => {
                spawn(scroll_transcript());
            }
            Effect::CopyToClipboard(text) => {
                spawn(copy_to_clipboard(text));
            }
            Effect::RefreshAssistants => {}
        }
    }
}

fn route_for(page: Page) -> Route {
    match page {
        Page::Login => Route::Login {},
        Page::Home => Route::Home {},
    }
}

// Runs `script` one frame later, so a control re-enabled by the same update
// can take focus and freshly rendered messages are measured.
#[cfg(not(target_arch = "wasm32"))]
async fn run_next_frame(script: String, what: &'static str) {
    sleep(Duration::from_millis(16)).await;
    if let Err(err) = eval(&script).await {
        tracing::warn!(error = ?err, what, "dom script failed");
    }
}

#[cfg(target_arch = "wasm32")]
async fn run_next_frame(script: String, what: &'static str) {
    let deferred = format!("requestAnimationFrame(() => {{ {script} }});");
    if let Err(err) = eval(&deferred).await {
        tracing::warn!(error = ?err, what, "dom script failed");
    }
}

pub(crate) async fn focus(field: Field) {
    let script = format!(
        "const el = document.getElementById('{}'); if (el) {{ el.focus(); }}",
        field.dom_id()
    );
    run_next_frame(script, "focus").await;
}

async fn scroll_transcript() {
    let script = "const el = document.getElementById('chat-messages'); if (el) { el.scrollTop = el.scrollHeight; }";
    run_next_frame(script.to_string(), "scroll").await;
}

async fn copy_to_clipboard(text: String) {
    let literal = match serde_json::to_string(&text) {
        Ok(literal) => literal,
        Err(err) => {
            tracing::warn!(error = %err, "could not encode text for the clipboard");
            return;
        }
    };
    if let Err(err) = eval(&format!("navigator.clipboard.writeText({literal})")).await {
        tracing::warn!(error = ?err, "clipboard write failed");
    }
}
