use dioxus::prelude::*;

/// Spinner with a progress line, announced politely to screen readers
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading", role: "status", aria_live: "polite",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

/// Inline failure notice
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", aria_hidden: "true", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

/// Heading and hint shown in place of an empty collection
#[component]
pub fn EmptyState(title: String, description: String) -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { class: "empty-state__title", "{title}" }
            p { class: "empty-state__description", "{description}" }
        }
    }
}

/// `base`, plus the caller's extra classes when given
pub fn class_list(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Enter and Space activate `role="button"` elements
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}
