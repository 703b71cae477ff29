use dioxus::prelude::*;

use crate::client::HttpBackend;
use crate::controller::login::LoginForm;
use crate::controller::Field;

use super::effects::{apply, focus};

#[component]
pub fn Login() -> Element {
    let backend = use_context::<HttpBackend>();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);

    use_effect(move || {
        spawn(focus(Field::ApiKey));
    });

    let submit = use_callback(move |_: ()| {
        let Some(request) = form.write().begin_submit() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = backend.login(&request).await;
            let effects = form.write().finish_submit(result);
            apply(effects, nav);
        });
    });

    let api_key = form.read().api_key.clone();
    let loading = form.read().is_loading();
    let error = form.read().error().map(str::to_string);

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { class: "logo", "Endless Chat" }
                p { class: "dim-text", "Sign in with your OpenAI API key" }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit.call(());
                    },
                    label { r#for: Field::ApiKey.dom_id(), "API key" }
                    input {
                        id: Field::ApiKey.dom_id(),
                        class: "input",
                        r#type: "password",
                        placeholder: "sk-...",
                        autocomplete: "off",
                        value: "{api_key}",
                        disabled: loading,
                        oninput: move |e| form.write().api_key = e.value(),
                        onkeydown: move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                e.prevent_default();
                                submit.call(());
                            }
                        },
                    }

                    {error.map(|msg| rsx! {
                        div { class: "error-banner", "{msg}" }
                    })}

                    button {
                        class: "login-btn big",
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "dim-text small",
                    "Your key is only sent to the Endless server and is never stored on this device."
                }
            }
        }
    }
}
