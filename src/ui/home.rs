use dioxus::prelude::*;

use crate::client::HttpBackend;
use crate::controller::assistant::AssistantPanel;
use crate::controller::chat::ChatPanel;
use crate::controller::completion::CompletionPanel;
use crate::controller::workspace::{Tab, Workspace};
use crate::controller::Field;

use super::assistant::AssistantTab;
use super::chat::ChatTab;
use super::completion::CompletionTab;
use super::effects::{apply, focus};

#[component]
pub fn Home() -> Element {
    let backend = use_context::<HttpBackend>();
    let nav = use_navigator();

    let mut workspace = use_signal(Workspace::default);
    let mut chat = use_signal(ChatPanel::default);
    let completion = use_signal(CompletionPanel::default);
    let assistant = use_signal(AssistantPanel::default);

    // status check once per page load
    {
        let backend = backend.clone();
        use_future(move || {
            let backend = backend.clone();
            async move {
                let result = backend.status().await;
                let effects = workspace.write().finish_status(result);
                apply(effects, nav);
            }
        });
    }

    use_effect(move || {
        spawn(focus(Field::ChatInput));
    });

    let logout = use_callback(move |_: ()| {
        let backend = backend.clone();
        spawn(async move {
            let result = backend.logout().await;
            let effects = workspace.write().finish_logout(result);
            apply(effects, nav);
        });
    });

    let use_assistant = move |id: i64| {
        chat.write().attach_conversation(id);
        let effects = workspace.write().switch_tab(Tab::Chat);
        apply(effects, nav);
    };

    let ws = workspace.read();
    let current = ws.tab();
    let indicator_class = format!("status-indicator {}", ws.indicator().css_class());
    let status_text = ws.status_text().to_string();
    let masked = ws.api_key_masked().to_string();
    let notice = ws.notice().map(str::to_string);
    drop(ws);

    let panel_class = |tab: Tab| {
        if tab == current {
            "tab-content active"
        } else {
            "tab-content hidden"
        }
    };

    rsx! {
        div { class: "app-container",
            header { class: "app-header",
                h1 { class: "logo", "Endless Chat" }
                div { class: "status",
                    span { id: "status-indicator", class: "{indicator_class}" }
                    span { id: "status-text", "{status_text}" }
                }
                div { class: "user-info",
                    span { class: "dim-text", "API key: " }
                    span { id: "api-key-masked", "{masked}" }
                    button { class: "logout-btn", onclick: move |_| logout.call(()), "Log out" }
                }
            }

            {notice.map(move |msg| rsx! {
                div { class: "notice-banner",
                    span { "{msg}" }
                    button { class: "notice-dismiss", onclick: move |_| workspace.write().dismiss_notice(), "x" }
                }
            })}

            div { class: "tab-bar",
                for (tab, label) in Tab::ALL.map(|t| (t, t.label())) {
                    button {
                        key: "{label}",
                        class: if tab == current { "tab-button active" } else { "tab-button" },
                        onclick: move |_| {
                            let effects = workspace.write().switch_tab(tab);
                            apply(effects, nav);
                        },
                        "{label}"
                    }
                }
            }

            div { class: panel_class(Tab::Chat), ChatTab { panel: chat } }
            div { class: panel_class(Tab::Completion), CompletionTab { panel: completion } }
            div { class: panel_class(Tab::Assistant),
                AssistantTab { panel: assistant, on_use: use_assistant }
            }
        }
    }
}
