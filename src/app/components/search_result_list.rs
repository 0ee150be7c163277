//! Normalized search results as clickable cards

use dioxus::prelude::*;

use crate::domain::models::SearchResult;
use crate::domain::services::{display_date, format_file_size, score_label};

use super::common::{class_list, is_activation_key, EmptyState, LoadingText};

#[component]
pub fn SearchResultList(
    results: Vec<SearchResult>,
    query: String,
    #[props(default)] loading: bool,
    #[props(default)] class: String,
    on_result_click: Option<EventHandler<SearchResult>>,
) -> Element {
    if loading {
        return rsx! {
            div { class: class_list("search-results-loading", &class),
                LoadingText { message: format!("Searching for \"{query}\"...") }
            }
        };
    }

    if results.is_empty() {
        return rsx! {
            div { class: class_list("search-results-empty", &class),
                EmptyState {
                    title: "No results found".to_string(),
                    description: "Try adjusting your search query or filters".to_string(),
                }
            }
        };
    }

    let count = results.len();

    rsx! {
        div { class: class_list("search-results", &class),
            div { class: "results-header",
                h3 { "Search Results ({count})" }
                span { class: "search-query", "for \"{query}\"" }
            }
            div { class: "results-grid",
                for result in results.into_iter() {
                    SearchResultCard {
                        key: "{result.id}",
                        result: result.clone(),
                        on_click: on_result_click,
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResultCard(
    result: SearchResult,
    on_click: Option<EventHandler<SearchResult>>,
) -> Element {
    let title = result.display_title().to_string();
    let kind = result.display_type().to_string();
    let date = display_date(result.display_date());
    let size = result.size.map(format_file_size);
    let description = result.display_description().to_string();
    let tags = result.tags.clone().unwrap_or_default();
    let score = score_label(result.score);

    let clicked = result.clone();
    let pressed = result.clone();

    rsx! {
        div {
            class: "result-card",
            role: "button",
            tabindex: "0",
            onclick: move |_| {
                if let Some(handler) = on_click {
                    handler.call(clicked.clone());
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt.key()) {
                    evt.prevent_default();
                    if let Some(handler) = on_click {
                        handler.call(pressed.clone());
                    }
                }
            },

            if let Some(thumbnail) = result.thumbnail.as_ref().filter(|t| !t.is_empty()) {
                div { class: "result-thumbnail",
                    img { src: "{thumbnail}", alt: "{title}" }
                }
            }

            div { class: "result-content",
                h4 { class: "result-title", "{title}" }

                div { class: "result-meta",
                    if !kind.is_empty() {
                        span { class: "result-type", "{kind}" }
                    }
                    if !date.is_empty() {
                        span { class: "result-date", "{date}" }
                    }
                    if let Some(size) = size {
                        span { class: "result-size", "{size}" }
                    }
                }

                if !description.is_empty() {
                    p { class: "result-description", "{description}" }
                }

                if !tags.is_empty() {
                    div { class: "result-tags",
                        for tag in tags.iter() {
                            span { class: "tag", "{tag}" }
                        }
                    }
                }

                if let Some(score) = score {
                    div { class: "result-score",
                        span { "{score}" }
                    }
                }
            }
        }
    }
}
