use dioxus::prelude::*;

use crate::controller::chat::Role;

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Splits a reply into (before, reasoning, after) when it carries a
/// `<think>...</think>` block.
fn split_think(content: &str) -> Option<(&str, &str, &str)> {
    let open = content.find(THINK_OPEN)?;
    let inner_start = open + THINK_OPEN.len();
    let close = inner_start + content[inner_start..].find(THINK_CLOSE)?;
    Some((
        &content[..open],
        content[inner_start..close].trim(),
        &content[close + THINK_CLOSE.len()..],
    ))
}

#[component]
pub fn Message(role: Role, content: String) -> Element {
    let class_name = format!("message {}-message", role.as_str());
    let role_label = role.display_name();

    if role == Role::Assistant {
        if let Some((before, think, after)) = split_think(&content) {
            return rsx! {
                div { class: "{class_name}",
                    div { class: "message-role", "{role_label}" }
                    if !before.trim().is_empty() {
                        p { class: "message-content", "{before}" }
                    }
                    div { class: "think-bubble",
                        p { class: "think-label", "Thinking..." }
                        div { class: "think-content dim-text", "{think}" }
                    }
                    if !after.trim().is_empty() {
                        p { class: "message-content", "{after}" }
                    }
                }
            };
        }
    }

    rsx! {
        div { class: "{class_name}",
            div { class: "message-role", "{role_label}" }
            p { class: "message-content", "{content}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_reasoning_block() {
        let (before, think, after) =
            split_think("Sure. <think> weigh options </think>Go with B.").unwrap();
        assert_eq!(before, "Sure. ");
        assert_eq!(think, "weigh options");
        assert_eq!(after, "Go with B.");
    }

    #[test]
    fn ignores_unbalanced_tags() {
        assert_eq!(split_think("</think> oops <think>"), None);
        assert_eq!(split_think("plain answer"), None);
    }
}
