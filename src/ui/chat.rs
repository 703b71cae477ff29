use dioxus::prelude::*;

use crate::client::HttpBackend;
use crate::controller::chat::ChatPanel;
use crate::controller::settings::CHAT_MODELS;
use crate::controller::Field;

use super::effects::apply;
use super::message::Message;
use super::settings::SettingsRow;

#[component]
pub fn ChatTab(mut panel: Signal<ChatPanel>) -> Element {
    let backend = use_context::<HttpBackend>();
    let nav = use_navigator();

    let send = {
        let backend = backend.clone();
        use_callback(move |_: ()| {
            let Some((request, effects)) = panel.write().begin_send() else {
                return;
            };
            apply(effects, nav);
            let backend = backend.clone();
            spawn(async move {
                let result = backend.chat(&request).await;
                let effects = panel.write().finish_send(result);
                apply(effects, nav);
            });
        })
    };

    let clear = use_callback(move |_: ()| {
        if !panel.write().begin_clear() {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let result = backend.clear_history().await;
            let effects = panel.write().finish_clear(result);
            apply(effects, nav);
        });
    });

    let state = panel.read();
    let transcript: Vec<_> = state
        .transcript()
        .iter()
        .map(|entry| (entry.id.to_string(), entry.role, entry.content.clone()))
        .collect();
    let empty = transcript.is_empty();
    let placeholder = state.placeholder();
    let input = state.input.clone();
    let hint = state.input_hint();
    let loading = state.is_loading();
    let notice = state.notice().map(str::to_string);
    let usage = state.usage_line();
    let settings = state.settings.clone();
    drop(state);

    rsx! {
        div { class: "chat-window",
            SettingsRow {
                id_prefix: "chat",
                models: CHAT_MODELS,
                form: settings,
                on_model: move |v| panel.write().settings.set_model(v),
                on_max_tokens: move |v| panel.write().settings.max_tokens = v,
                on_temperature: move |v| panel.write().settings.temperature = v,
            }

            div { id: "chat-messages", class: "chat-messages",
                if empty {
                    div { class: "chat-placeholder", "{placeholder}" }
                }
                for (id, role, content) in transcript {
                    Message { key: "{id}", role: role, content: content }
                }
                if loading {
                    div { class: "message assistant-message loading-message",
                        p { "Thinking..." }
                        div { class: "loading-dots" }
                    }
                }
            }

            {notice.map(move |msg| rsx! {
                div { class: "notice-banner",
                    span { "{msg}" }
                    button { class: "notice-dismiss", onclick: move |_| panel.write().dismiss_notice(), "x" }
                }
            })}

            div { class: "chat-input-area",
                textarea {
                    id: Field::ChatInput.dom_id(),
                    class: "chat-input",
                    placeholder: "{hint}",
                    value: "{input}",
                    disabled: loading,
                    oninput: move |e| panel.write().input = e.value(),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter && !e.modifiers().shift() {
                            e.prevent_default();
                            send.call(());
                        }
                    },
                }
                button {
                    id: "send-chat-btn",
                    class: "send-button big",
                    disabled: loading || input.trim().is_empty(),
                    onclick: move |_| send.call(()),
                    "Send"
                }
                button {
                    id: "clear-history-btn",
                    class: "clear-button big",
                    disabled: loading,
                    onclick: move |_| clear.call(()),
                    "Clear history"
                }
            }

            {usage.map(|line| rsx! { p { class: "usage-line dim-text", "{line}" } })}
        }
    }
}
