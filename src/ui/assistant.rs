use dioxus::prelude::*;

use crate::client::HttpBackend;
use crate::controller::assistant::{
    AssistantList, AssistantPanel, AssistantView, NO_ASSISTANTS, NO_PREVIEW, RESULT_PLACEHOLDER,
};
use crate::controller::settings::ASSISTANT_MODELS;
use crate::controller::{Effect, Field};
use crate::format::{format_date, format_timestamp};
use crate::types::{ConversationSummary, CreatedAssistant};

use super::effects::apply;

#[component]
pub fn AssistantTab(mut panel: Signal<AssistantPanel>, on_use: EventHandler<i64>) -> Element {
    let backend = use_context::<HttpBackend>();
    let nav = use_navigator();

    let reload = {
        let backend = backend.clone();
        use_callback(move |_: ()| {
            panel.write().begin_load_assistants();
            let backend = backend.clone();
            spawn(async move {
                let result = backend.conversations().await;
                let effects = panel.write().finish_load_assistants(result);
                apply(effects, nav);
            });
        })
    };

    use_effect(move || reload.call(()));

    let create = use_callback(move |_: ()| {
        let Some(request) = panel.write().begin_create() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = backend.create_assistant(&request).await;
            let effects = panel.write().finish_create(result);
            if effects.contains(&Effect::RefreshAssistants) {
                reload.call(());
            }
            apply(effects, nav);
        });
    });

    let state = panel.read();
    let request = state.request.clone();
    let model = state.model.clone();
    let loading = state.is_loading();
    let view = state.view().clone();
    let list = state.list().clone();
    let notice = state.notice().map(str::to_string);
    drop(state);

    let can_copy = matches!(view, AssistantView::Created(_));

    let result = match view {
        AssistantView::Placeholder => rsx! {
            div { class: "result-placeholder dim-text", "{RESULT_PLACEHOLDER}" }
        },
        AssistantView::Creating => rsx! {
            div { class: "result-loading", "Creating your assistant, please wait..." }
        },
        AssistantView::Created(assistant) => rsx! {
            CreatedCard { assistant: assistant, on_use: on_use }
        },
        AssistantView::Failed(msg) => rsx! {
            div { class: "result-error", "{msg}" }
        },
    };

    let assistants = match list {
        AssistantList::Loading => rsx! {
            div { class: "assistant-placeholder dim-text", "Loading assistants..." }
        },
        AssistantList::Empty => rsx! {
            div { class: "assistant-placeholder dim-text", "{NO_ASSISTANTS}" }
        },
        AssistantList::Failed => rsx! {
            div { class: "result-error", "Failed to load the assistant list" }
        },
        AssistantList::Loaded(items) => {
            let keyed = items.into_iter().map(|item| (item.id.to_string(), item));
            rsx! {
                for (key, item) in keyed {
                    AssistantItem { key: "{key}", item: item, on_use: on_use }
                }
            }
        }
    };

    rsx! {
        div { class: "assistant-window",
            label { r#for: Field::AssistantRequest.dom_id(), "Describe the assistant you need" }
            textarea {
                id: Field::AssistantRequest.dom_id(),
                class: "textarea",
                placeholder: "e.g. A patient tutor who explains Rust lifetimes with small examples",
                value: "{request}",
                disabled: loading,
                oninput: move |e| panel.write().request = e.value(),
            }

            div { class: "settings-row",
                div { class: "settings-field",
                    label { r#for: "assistant-model", "Model" }
                    select {
                        id: "assistant-model",
                        class: "input",
                        value: "{model}",
                        onchange: move |e| panel.write().model = e.value(),
                        for m in ASSISTANT_MODELS.iter() {
                            option { selected: *m == model, value: "{m}", "{m}" }
                        }
                    }
                }
            }

            {notice.map(|msg| rsx! { div { class: "notice-banner", "{msg}" } })}

            div { class: "assistant-buttons",
                button {
                    id: "create-assistant-btn",
                    class: "send-button big",
                    disabled: loading,
                    onclick: move |_| create.call(()),
                    if loading { "Creating..." } else { "Create assistant" }
                }
                button {
                    class: "clear-button big",
                    disabled: loading,
                    onclick: move |_| panel.write().clear_form(),
                    "Clear"
                }
                if can_copy {
                    button {
                        id: "copy-assistant-btn",
                        class: "copy-button big",
                        onclick: move |_| {
                            let effects = panel.write().copy_result();
                            apply(effects, nav);
                        },
                        "Copy result"
                    }
                }
            }

            div { id: "assistant-result", class: "result-area", {result} }

            h3 { "Your assistants" }
            div { id: "assistant-list", class: "assistant-list", {assistants} }
        }
    }
}

#[component]
fn CreatedCard(assistant: CreatedAssistant, on_use: EventHandler<i64>) -> Element {
    let id = assistant.id;
    let title = assistant.title.clone();
    let system_prompt = assistant.system_prompt.clone();
    let created = format_timestamp(&assistant.created_at);

    rsx! {
        div { class: "success-result",
            h4 { "Assistant created!" }
            div { class: "assistant-info",
                p { strong { "Name: " } "{title}" }
                p { strong { "Created: " } "{created}" }
                p { strong { "System Prompt:" } }
                div { class: "system-prompt", "{system_prompt}" }
            }
            div { class: "assistant-actions",
                button { class: "btn btn-primary", onclick: move |_| on_use.call(id), "Use this assistant" }
            }
        }
    }
}

#[component]
fn AssistantItem(item: ConversationSummary, on_use: EventHandler<i64>) -> Element {
    let id = item.id;
    let title = item.title.clone();
    let date = format_date(&item.created_at);
    let preview = item
        .system_prompt_preview
        .clone()
        .unwrap_or_else(|| NO_PREVIEW.to_string());

    rsx! {
        div { class: "assistant-item",
            div { class: "assistant-header",
                h4 { "{title}" }
                span { class: "assistant-date", "{date}" }
            }
            div { class: "assistant-preview", "{preview}" }
            div { class: "assistant-actions",
                button { class: "btn btn-sm btn-primary", onclick: move |_| on_use.call(id), "Use" }
            }
        }
    }
}
