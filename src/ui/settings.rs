use dioxus::prelude::*;

use crate::controller::settings::SettingsForm;

/// Model / max tokens / temperature row shared by the chat and completion tabs.
#[component]
pub fn SettingsRow(
    id_prefix: &'static str,
    models: &'static [&'static str],
    form: SettingsForm,
    on_model: EventHandler<String>,
    on_max_tokens: EventHandler<String>,
    on_temperature: EventHandler<String>,
) -> Element {
    let selected = form.model.clone();
    let max_tokens = form.max_tokens.clone();
    let temperature = form.temperature.clone();
    // keep a model that is not in the preset list visible and selected
    let mut options: Vec<String> = models.iter().map(|m| m.to_string()).collect();
    if !selected.is_empty() && !options.contains(&selected) {
        options.insert(0, selected.clone());
    }

    rsx! {
        div { class: "settings-row",
            div { class: "settings-field",
                label { r#for: "{id_prefix}-model", "Model" }
                select {
                    id: "{id_prefix}-model",
                    class: "input",
                    value: "{selected}",
                    onchange: move |e| on_model.call(e.value()),
                    for m in options {
                        option { selected: m == selected, value: "{m}", "{m}" }
                    }
                }
            }
            div { class: "settings-field",
                label { r#for: "{id_prefix}-max-tokens", "Max tokens" }
                input {
                    id: "{id_prefix}-max-tokens",
                    class: "input",
                    r#type: "number",
                    min: "1",
                    step: "1",
                    value: "{max_tokens}",
                    oninput: move |e| on_max_tokens.call(e.value()),
                }
            }
            div { class: "settings-field",
                label { r#for: "{id_prefix}-temperature", "Temperature" }
                input {
                    id: "{id_prefix}-temperature",
                    class: "input",
                    r#type: "number",
                    min: "0.0",
                    max: "2.0",
                    step: "0.1",
                    value: "{temperature}",
                    oninput: move |e| on_temperature.call(e.value()),
                }
            }
        }
    }
}
