use dioxus::prelude::*;

use crate::config::ContentHubConfig;
use crate::domain::models::{SearchRequest, SearchResult};
use crate::domain::services::{normalize_hits, NormalizeOptions, SearchSequencer};
use crate::shared::services::SearchGatewayClient;

use super::use_recent_searches::{use_recent_searches, UseRecentSearchesReturn};
use super::use_search_status::{use_search_status, UseSearchStatusReturn};

/// Search page state: query, normalized results, status and history
#[derive(Clone)]
pub struct UseContentSearchReturn {
    pub query: Signal<String>,
    pub results: Signal<Vec<SearchResult>>,
    pub total_hits: Signal<usize>,
    pub is_searching: Signal<bool>,
    pub status: UseSearchStatusReturn,
    pub recent: UseRecentSearchesReturn,
    client: SearchGatewayClient,
    sequencer: SearchSequencer,
    options: NormalizeOptions,
}

impl UseContentSearchReturn {
    /// Run a search typed by the user; recorded in history when it succeeds
    pub fn search(&self, query: String) {
        self.run(query, false);
    }

    /// Re-run a history entry; it moves to the top whatever the outcome
    pub fn search_recent(&self, query: String) {
        self.run(query, true);
    }

    pub fn client(&self) -> &SearchGatewayClient {
        &self.client
    }

    fn run(&self, query: String, always_record: bool) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }

        let mut this = self.clone();
        let ticket = this.sequencer.begin(query.clone());
        this.query.set(query.clone());
        this.is_searching.set(true);
        this.status.show_loading(None);

        spawn(async move {
            let outcome = this.client.search(&SearchRequest::new(query.clone())).await;
            let succeeded = outcome.is_ok();
            if always_record || succeeded {
                this.recent.add(&query);
            }

            let Some(outcome) = this.sequencer.accept(&ticket, outcome) else {
                return;
            };
            this.is_searching.set(false);

            match outcome {
                Ok(response) => {
                    let hits = normalize_hits(response.hits, &this.options);
                    this.total_hits.set(response.estimated_total_hits);
                    if hits.is_empty() {
                        this.status.show_empty(None);
                    } else {
                        this.status.show_success(None, Some(hits.len()));
                    }
                    this.results.set(hits);
                }
                Err(e) => {
                    tracing::error!("Search failed: {}", e);
                    this.results.set(Vec::new());
                    this.total_hits.set(0);
                    this.status.show_error(None, Some(&e));
                }
            }
        });
    }
}

pub fn use_content_search(config: &ContentHubConfig) -> UseContentSearchReturn {
    let client = use_hook(|| {
        SearchGatewayClient::from_config(&config.gateway).unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            SearchGatewayClient::new(&config.gateway.base_url, &config.gateway.auth_token)
        })
    });
    let sequencer = use_hook(SearchSequencer::new);
    let options = use_hook(|| NormalizeOptions {
        url_template: config.results.url_template.clone(),
    });

    let query = use_signal(String::new);
    let results = use_signal(Vec::<SearchResult>::new);
    let total_hits = use_signal(|| 0usize);
    let is_searching = use_signal(|| false);
    let status = use_search_status(config.status.clone());
    let recent = use_recent_searches(config.recent_searches.clone());

    UseContentSearchReturn {
        query,
        results,
        total_hits,
        is_searching,
        status,
        recent,
        client,
        sequencer,
        options,
    }
}
