use std::collections::BTreeMap;

use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{GatewayConfig, DEFAULT_SEARCH_LIMIT};
use crate::domain::models::{SearchDocument, SearchRequest, SearchResponse};
use crate::shared::errors::{ContentHubError, Result};
use crate::shared::logging::{log_gateway_error, log_gateway_request, log_search_completed};

/// Client for the MeiliSearch gateway
#[derive(Debug, Clone)]
pub struct SearchGatewayClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
    default_limit: usize,
}

#[derive(Serialize)]
struct DeleteDocumentsBody<'a> {
    ids: &'a [String],
}

impl SearchGatewayClient {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, auth_token)
    }

    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.strip_suffix('/').unwrap_or(&base_url).to_string();
        Self {
            http,
            base_url,
            auth_token: auth_token.into(),
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        let mut client = Self::with_http_client(http, &config.base_url, &config.auth_token);
        client.default_limit = config.default_limit.max(1);
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        log_gateway_request(method.as_str(), endpoint);
        self.http
            .request(method, self.url(endpoint))
            .bearer_auth(&self.auth_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    /// Non-2xx responses become [`ContentHubError::Gateway`] carrying the
    /// body's `error` field or the status text
    async fn check(endpoint: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_error = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .filter(|e| !e.is_empty());
        let message = body_error
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());

        log_gateway_error(endpoint, status.as_u16(), &message);
        Err(ContentHubError::Gateway {
            status: status.as_u16(),
            message,
        })
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.request(Method::POST, endpoint).json(body).send().await?;
        let response = Self::check(endpoint, response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_without_reply<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<()> {
        let response = self.request(method, endpoint).json(body).send().await?;
        Self::check(endpoint, response).await?;
        Ok(())
    }

    /// `POST /search`; a missing or zero limit sends the default, offset defaults to 0
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let body = SearchRequest {
            q: request.q.clone(),
            limit: Some(request.limit.filter(|l| *l > 0).unwrap_or(self.default_limit)),
            offset: Some(request.offset.unwrap_or(0)),
            filter: request.filter.clone(),
            sort: request.sort.clone(),
        };
        let response: SearchResponse = self.post("/search", &body).await?;
        log_search_completed(&body.q, response.hits.len(), response.processing_time_ms);
        Ok(response)
    }

    /// Search with `field = "value"` clauses joined by `AND`
    pub async fn search_with_filters(
        &self,
        query: &str,
        filters: &BTreeMap<String, String>,
    ) -> Result<SearchResponse> {
        let mut request = SearchRequest::new(query);
        request.filter = filter_expression(filters);
        self.search(&request).await
    }

    pub async fn search_by_category(&self, query: &str, category: &str) -> Result<SearchResponse> {
        self.search(&SearchRequest::new(query).with_filter(equals_filter("category", category)))
            .await
    }

    pub async fn search_by_market(&self, query: &str, market: &str) -> Result<SearchResponse> {
        self.search(
            &SearchRequest::new(query).with_filter(equals_filter("tradeableMarkets", market)),
        )
        .await
    }

    pub async fn search_by_region(&self, query: &str, region: &str) -> Result<SearchResponse> {
        self.search(&SearchRequest::new(query).with_filter(equals_filter("regionTags", region)))
            .await
    }

    pub async fn index_document(&self, document: &SearchDocument, user_id: &str) -> Result<()> {
        self.index_documents(std::slice::from_ref(document), user_id)
            .await
    }

    /// `POST /documents`; every document is stamped with `user_id`
    pub async fn index_documents(&self, documents: &[SearchDocument], user_id: &str) -> Result<()> {
        let stamped: Vec<SearchDocument> = documents
            .iter()
            .cloned()
            .map(|mut doc| {
                doc.user_id = user_id.to_string();
                doc
            })
            .collect();
        self.send_without_reply(Method::POST, "/documents", &stamped)
            .await
    }

    pub async fn delete_document(&self, id: &str) -> Result<()> {
        self.delete_documents(&[id.to_string()]).await
    }

    /// `DELETE /documents` with `{ ids }`
    pub async fn delete_documents(&self, ids: &[String]) -> Result<()> {
        self.send_without_reply(Method::DELETE, "/documents", &DeleteDocumentsBody { ids })
            .await
    }

    /// Unauthenticated `GET /health`, raw body
    pub async fn health_check(&self) -> Result<serde_json::Value> {
        let (_, body) = self.probe_health().await?;
        Ok(body)
    }

    /// `GET /health` status code with its JSON body, whatever the status
    pub(crate) async fn probe_health(&self) -> Result<(reqwest::StatusCode, serde_json::Value)> {
        log_gateway_request("GET", "/health");
        let response = self.http.get(self.url("/health")).send().await?;
        let status = response.status();
        let body = response.json::<serde_json::Value>().await?;
        Ok((status, body))
    }
}

/// `field = "value"`
pub fn equals_filter(field: &str, value: &str) -> String {
    format!("{field} = \"{value}\"")
}

/// `a = "1" AND b = "2"`, or `None` without filters
pub fn filter_expression(filters: &BTreeMap<String, String>) -> Option<String> {
    if filters.is_empty() {
        return None;
    }
    Some(
        filters
            .iter()
            .map(|(field, value)| equals_filter(field, value))
            .collect::<Vec<_>>()
            .join(" AND "),
    )
}
