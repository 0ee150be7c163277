use dioxus::prelude::*;

use crate::domain::services::{hidden_search_count, visible_searches};

use super::common::{class_list, is_activation_key};

/// Clickable history chips, most recent first
#[component]
pub fn RecentSearchList(
    searches: Vec<String>,
    on_search_click: EventHandler<String>,
    on_clear: Option<EventHandler>,
    #[props(default)] class: String,
    max_display: Option<usize>,
) -> Element {
    if searches.is_empty() {
        return rsx! {
            div { class: class_list("recent-searches-empty", &class),
                p { class: "empty-message", "No recent searches" }
            }
        };
    }

    let visible = visible_searches(&searches, max_display).to_vec();
    let hidden = hidden_search_count(searches.len(), max_display);

    rsx! {
        div { class: class_list("recent-searches", &class),
            div { class: "recent-searches-header",
                h4 { "Recent Searches" }
                if let Some(on_clear) = on_clear {
                    button {
                        class: "clear-button",
                        r#type: "button",
                        aria_label: "Clear recent searches",
                        onclick: move |_| on_clear.call(()),
                        "Clear All"
                    }
                }
            }

            div { class: "recent-searches-list",
                for (index, search) in visible.into_iter().enumerate() {
                    RecentSearchChip {
                        key: "{search}-{index}",
                        search: search.clone(),
                        on_click: on_search_click,
                    }
                }
            }

            if hidden > 0 {
                div { class: "recent-searches-footer",
                    p { class: "more-searches", "+{hidden} more searches" }
                }
            }
        }
    }
}

#[component]
fn RecentSearchChip(search: String, on_click: EventHandler<String>) -> Element {
    let clicked = search.clone();
    let pressed = search.clone();

    rsx! {
        div {
            class: "recent-search-item",
            role: "button",
            tabindex: "0",
            onclick: move |_| on_click.call(clicked.clone()),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt.key()) {
                    evt.prevent_default();
                    on_click.call(pressed.clone());
                }
            },
            span { class: "search-text", "{search}" }
            span { class: "search-icon", "🔍" }
        }
    }
}
