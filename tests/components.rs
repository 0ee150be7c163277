//! Server-side renders of the search components

use std::sync::Arc;

use dioxus::prelude::*;

use content_hub::app::components::{
    RecentSearchList, SearchResultList, SearchStatusBanner, ServiceStatusPanel,
};
use content_hub::app::pages::ContentAccessPage;
use content_hub::config::{ContentHubConfig, RecentSearchConfig};
use content_hub::domain::models::{
    CustomService, DatabaseState, SearchResult, SearchServiceState, SearchStatus,
    SearchStatusKind, ServiceStatusSnapshot,
};
use content_hub::domain::services::{normalize, RecentSearchStore};
use content_hub::infrastructure::storage::MemoryStorage;
use content_hub::shared::hooks::{use_recent_searches_with, DynStorage};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn sample_results() -> Vec<SearchResult> {
    let report = SearchResult {
        id: "doc-1".into(),
        title: "Gold price outlook".into(),
        summary: "Quarterly commodity report".into(),
        mime_type: Some("application/pdf".into()),
        uploaded_at: Some("2025-02-10T08:30:00Z".into()),
        score: Some(0.87),
        size: Some(1536),
        tags: Some(vec!["commodities".into(), "GCC".into()]),
        ..Default::default()
    };
    let memo = SearchResult {
        id: "doc-2".into(),
        title: "Saffron sourcing memo".into(),
        thumbnail: Some("https://cdn.tamyla.com/t/doc-2.png".into()),
        ..Default::default()
    };
    vec![normalize(report), normalize(memo)]
}

#[test]
fn test_result_list_renders_cards() {
    fn app() -> Element {
        rsx! {
            SearchResultList { results: sample_results(), query: "gold".to_string() }
        }
    }

    let html = render(app);
    assert!(html.contains("Search Results (2)"));
    assert!(html.contains("Gold price outlook"));
    assert!(html.contains("application/pdf"));
    assert!(html.contains("2025-02-10"));
    assert!(html.contains("1.5 KB"));
    assert!(html.contains("Quarterly commodity report"));
    assert!(html.contains("commodities"));
    assert!(html.contains("Match: 87%"));
    assert!(html.contains("https://cdn.tamyla.com/t/doc-2.png"));
    assert!(html.contains("role=\"button\""));
}

#[test]
fn test_result_list_loading() {
    fn app() -> Element {
        rsx! {
            SearchResultList { results: sample_results(), query: "gold".to_string(), loading: true }
        }
    }

    let html = render(app);
    assert!(html.contains("search-results-loading"));
    assert!(html.contains("c-loading__spinner"));
    assert!(html.contains("Searching for"));
    assert!(!html.contains("Search Results ("));
}

#[test]
fn test_result_list_empty() {
    fn app() -> Element {
        rsx! {
            SearchResultList { results: Vec::new(), query: "gold".to_string(), class: "compact".to_string() }
        }
    }

    let html = render(app);
    assert!(html.contains("search-results-empty compact"));
    assert!(html.contains("No results found"));
    assert!(html.contains("Try adjusting your search query or filters"));
}

#[test]
fn test_recent_searches_empty() {
    fn app() -> Element {
        rsx! {
            RecentSearchList { searches: Vec::new(), on_search_click: move |_: String| {} }
        }
    }

    let html = render(app);
    assert!(html.contains("No recent searches"));
    assert!(!html.contains("Clear All"));
}

#[test]
fn test_recent_searches_with_clear_and_overflow() {
    fn app() -> Element {
        let searches = ["gold", "saffron", "tea", "cumin"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        rsx! {
            RecentSearchList {
                searches,
                on_search_click: move |_: String| {},
                on_clear: move |_| {},
                max_display: 2usize,
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Recent Searches"));
    assert!(html.contains("Clear All"));
    assert!(html.contains("gold"));
    assert!(html.contains("saffron"));
    assert!(!html.contains(">tea<"));
    assert!(html.contains("+2 more searches"));
}

#[test]
fn test_recent_searches_hook_renders_stored_query() {
    fn storage() -> DynStorage {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = RecentSearchStore::load(storage.clone(), &RecentSearchConfig::default());
        store.add("gold price");
        Box::new(storage)
    }

    fn app() -> Element {
        let recent = use_recent_searches_with(RecentSearchConfig::default(), storage);
        rsx! {
            RecentSearchList { searches: recent.searches(), on_search_click: move |_: String| {} }
        }
    }

    let html = render(app);
    assert!(html.contains("gold price"));
    assert!(!html.contains("No recent searches"));
}

#[test]
fn test_status_panel_online() {
    fn app() -> Element {
        rsx! {
            ServiceStatusPanel { snapshot: ServiceStatusSnapshot::default() }
        }
    }

    let html = render(app);
    assert!(html.contains("search-status--online"));
    assert!(html.contains("System Online"));
    assert!(html.contains("Search Service Online"));
    assert!(html.contains("Database Ready"));
    assert!(html.contains("Analytics Active"));
    assert!(!html.contains("You are currently offline"));
}

#[test]
fn test_status_panel_offline_with_custom_service() {
    fn app() -> Element {
        let snapshot = ServiceStatusSnapshot {
            is_connected: false,
            search_service: SearchServiceState::Disconnected,
            database: DatabaseState::Error,
            custom_services: vec![CustomService {
                name: "skimmer".into(),
                status: "loading".into(),
                display_name: "Content Skimmer".into(),
            }],
            ..Default::default()
        };
        rsx! {
            ServiceStatusPanel { snapshot }
        }
    }

    let html = render(app);
    assert!(html.contains("System Offline"));
    assert!(html.contains("Search Service Offline"));
    assert!(html.contains("Database Error"));
    assert!(html.contains("Content Skimmer: loading"));
    assert!(html.contains("You are currently offline. Search functionality may be limited."));
}

#[test]
fn test_status_banner() {
    fn app() -> Element {
        rsx! {
            SearchStatusBanner { status: SearchStatus::new(SearchStatusKind::Success, "Found 3 results") }
        }
    }

    let html = render(app);
    assert!(html.contains("c-search-status--success"));
    assert!(html.contains("Found 3 results"));
    assert!(!html.contains("c-error"));
}

#[test]
fn test_status_banner_error_renders_error_message() {
    fn app() -> Element {
        rsx! {
            SearchStatusBanner {
                status: SearchStatus::new(SearchStatusKind::Error, "Search failed: 401 - Invalid token"),
            }
        }
    }

    let html = render(app);
    assert!(html.contains("c-search-status--error"));
    assert!(html.contains("c-error__text"));
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Search failed: 401 - Invalid token"));
}

#[test]
fn test_content_access_page_initial_render() {
    fn app() -> Element {
        rsx! {
            ContentAccessPage { config: ContentHubConfig::default() }
        }
    }

    let html = render(app);
    assert!(html.contains("Ready to search"));
    assert!(html.contains("No results found"));
    assert!(html.contains("No recent searches"));
    assert!(html.contains("System Loading"));
}
