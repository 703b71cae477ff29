use dioxus::prelude::*;

use crate::client::HttpBackend;
use crate::controller::completion::{CompletionPanel, CompletionView, RESULT_PLACEHOLDER};
use crate::controller::settings::COMPLETION_MODELS;
use crate::controller::Field;

use super::effects::apply;
use super::settings::SettingsRow;

#[component]
pub fn CompletionTab(mut panel: Signal<CompletionPanel>) -> Element {
    let backend = use_context::<HttpBackend>();
    let nav = use_navigator();

    let generate = use_callback(move |_: ()| {
        let Some(request) = panel.write().begin_generate() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = backend.completion(&request).await;
            let effects = panel.write().finish_generate(result);
            apply(effects, nav);
        });
    });

    let state = panel.read();
    let prompt = state.prompt.clone();
    let loading = state.is_loading();
    let view = state.view().clone();
    let notice = state.notice().map(str::to_string);
    let usage = state.usage_line();
    let settings = state.settings.clone();
    drop(state);

    let result = match view {
        CompletionView::Placeholder => rsx! {
            div { class: "result-placeholder dim-text", "{RESULT_PLACEHOLDER}" }
        },
        CompletionView::Generating => rsx! {
            div { class: "result-loading", "Generating..." }
        },
        CompletionView::Text(text) => rsx! {
            div { class: "result-content", "{text}" }
        },
        CompletionView::Error(msg) => rsx! {
            div { class: "result-error", "{msg}" }
        },
    };

    rsx! {
        div { class: "completion-window",
            SettingsRow {
                id_prefix: "completion",
                models: COMPLETION_MODELS,
                form: settings,
                on_model: move |v| panel.write().settings.set_model(v),
                on_max_tokens: move |v| panel.write().settings.max_tokens = v,
                on_temperature: move |v| panel.write().settings.temperature = v,
            }

            textarea {
                id: Field::CompletionPrompt.dom_id(),
                class: "textarea completion-prompt",
                placeholder: "Enter a prompt, Ctrl+Enter to generate",
                value: "{prompt}",
                disabled: loading,
                oninput: move |e| panel.write().prompt = e.value(),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter && e.modifiers().ctrl() {
                        e.prevent_default();
                        generate.call(());
                    }
                },
            }

            {notice.map(|msg| rsx! { div { class: "notice-banner", "{msg}" } })}

            button {
                id: "generate-completion-btn",
                class: "send-button big",
                disabled: loading,
                onclick: move |_| generate.call(()),
                if loading { "Generating..." } else { "Generate" }
            }

            div { id: "completion-result", class: "result-area", {result} }

            {usage.map(|line| rsx! { p { class: "usage-line dim-text", "{line}" } })}
        }
    }
}
