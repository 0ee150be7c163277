use dioxus::prelude::*;

use crate::app::components::{
    RecentSearchList, SearchResultList, SearchStatusBanner, ServiceStatusPanel,
};
use crate::config::ContentHubConfig;
use crate::domain::models::SearchResult;
use crate::shared::hooks::{use_content_search, use_service_status};

/// Content Hub search page with the default configuration
#[component]
pub fn App() -> Element {
    rsx! {
        ContentAccessPage { config: ContentHubConfig::default() }
    }
}

#[component]
pub fn ContentAccessPage(config: ContentHubConfig) -> Element {
    let search = use_content_search(&config);
    let snapshot = use_service_status(search.client().clone());
    let mut input = use_signal(String::new);

    let submit = {
        let search = search.clone();
        move || search.search(input())
    };
    let on_enter = submit.clone();

    let on_recent = {
        let search = search.clone();
        move |query: String| {
            input.set(query.clone());
            search.search_recent(query);
        }
    };

    let mut recent = search.recent;

    rsx! {
        div { class: "content-access-page",
            div { class: "access-header",
                h1 { "Content Access" }
                p { "Search across your uploaded documents" }
            }

            div { class: "c-search-bar",
                div { class: "c-search-bar__form",
                    input {
                        r#type: "text",
                        class: "c-search-bar__input",
                        placeholder: "Search content...",
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                on_enter();
                            }
                        },
                    }
                    button {
                        class: "c-btn c-btn--primary c-btn--sm",
                        disabled: *search.is_searching.read() || input().trim().is_empty(),
                        onclick: move |_| submit(),
                        if *search.is_searching.read() { "Searching..." } else { "Search" }
                    }
                }
            }

            SearchStatusBanner { status: search.status.status() }

            div { class: "access-layout",
                div { class: "access-main",
                    SearchResultList {
                        results: search.results.read().clone(),
                        query: search.query.read().clone(),
                        loading: *search.is_searching.read(),
                        on_result_click: move |result: SearchResult| open_result(&result),
                    }
                }

                aside { class: "access-sidebar",
                    RecentSearchList {
                        searches: recent.searches(),
                        on_search_click: on_recent,
                        on_clear: move |_| recent.clear(),
                        max_display: recent.store.read().max_items(),
                    }
                    ServiceStatusPanel { snapshot: snapshot.read().clone() }
                }
            }
        }
    }
}

fn open_result(result: &SearchResult) {
    let Some(url) = result.url.as_deref().filter(|u| !u.is_empty()) else {
        tracing::warn!("Search result {} has no url", result.id);
        return;
    };

    #[cfg(target_arch = "wasm32")]
    {
        let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
        if let Some(Err(e)) = opened {
            tracing::error!("Failed to open {}: {:?}", url, e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("Open search result {} at {}", result.id, url);
}
