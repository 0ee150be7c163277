//! SearchGatewayClient against an in-process mock gateway

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use content_hub::config::GatewayConfig;
use content_hub::domain::models::{HealthState, SearchDocument, SearchRequest};
use content_hub::domain::services::{normalize_hits, NormalizeOptions};
use content_hub::{ContentHubError, HealthService, SearchGatewayClient};

const TOKEN: &str = "test-token";

#[derive(Clone, Default)]
struct MockGateway {
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockGateway {
    fn record(&self, route: &str, body: Value) {
        self.requests.lock().unwrap().push((route.to_string(), body));
    }

    fn last(&self, route: &str) -> Option<Value> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(r, _)| r == route)
            .map(|(_, body)| body.clone())
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {TOKEN}");
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str())
}

async fn search_handler(
    State(gateway): State<MockGateway>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid token" })));
    }
    gateway.record("search", body.clone());

    let q = body["q"].as_str().unwrap_or_default().to_string();
    if q == "explode" {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})));
    }

    let hits = if q == "nothing" {
        json!([])
    } else {
        json!([
            {
                "id": "doc-1",
                "title": "Gold price outlook",
                "summary": "Quarterly commodity report",
                "mimeType": "application/pdf",
                "uploadedAt": "2025-02-10T08:30:00Z",
                "_formatted": { "title": "<em>Gold</em> price outlook", "summary": "" }
            },
            { "id": "", "title": "orphan", "summary": "" }
        ])
    };

    (
        StatusCode::OK,
        Json(json!({
            "hits": hits,
            "query": q,
            "processingTimeMs": 3,
            "limit": body["limit"],
            "offset": body["offset"],
            "estimatedTotalHits": 42
        })),
    )
}

async fn documents_handler(
    State(gateway): State<MockGateway>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid token" })));
    }
    gateway.record("index", body);
    (StatusCode::OK, Json(json!({ "taskUid": 1 })))
}

async fn delete_documents_handler(
    State(gateway): State<MockGateway>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid token" })));
    }
    gateway.record("delete", body);
    (StatusCode::OK, Json(json!({ "taskUid": 2 })))
}

async fn health_handler(headers: HeaderMap) -> impl IntoResponse {
    let has_auth = headers.contains_key("authorization");
    Json(json!({
        "status": "ok",
        "timestamp": "2025-03-01T10:00:00Z",
        "meilisearch": { "status": "available", "code": 200, "message": "healthy" },
        "authHeaderSeen": has_auth
    }))
}

async fn spawn_gateway() -> (String, MockGateway) {
    let gateway = MockGateway::default();
    let app = Router::new()
        .route("/search", post(search_handler))
        .route(
            "/documents",
            post(documents_handler).delete(delete_documents_handler),
        )
        .route("/health", get(health_handler))
        .with_state(gateway.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/"), gateway)
}

#[tokio::test]
async fn test_search_sends_defaults_and_parses_response() {
    let (base, gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    let response = client.search(&SearchRequest::new("gold")).await.unwrap();

    let sent = gateway.last("search").unwrap();
    assert_eq!(sent["q"], "gold");
    assert_eq!(sent["limit"], 20);
    assert_eq!(sent["offset"], 0);
    assert!(sent.get("filter").is_none());

    assert_eq!(response.query, "gold");
    assert_eq!(response.estimated_total_hits, 42);
    assert_eq!(response.processing_time_ms, 3);
    assert_eq!(response.hits.len(), 2);
    assert!(response.has_more());
    assert_eq!(
        response.hits[0].formatted.as_ref().map(|f| f.title.as_str()),
        Some("<em>Gold</em> price outlook")
    );
}

#[tokio::test]
async fn test_search_hits_normalize_for_display() {
    let (base, _gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    let response = client.search(&SearchRequest::new("gold")).await.unwrap();
    let options = NormalizeOptions {
        url_template: Some("https://content.tamyla.com/access/{id}".into()),
    };
    let hits = normalize_hits(response.hits, &options);

    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.name.as_deref(), Some("Gold price outlook"));
    assert_eq!(hit.description.as_deref(), Some("Quarterly commodity report"));
    assert_eq!(hit.kind.as_deref(), Some("application/pdf"));
    assert_eq!(hit.date.as_deref(), Some("2025-02-10T08:30:00Z"));
    assert_eq!(
        hit.url.as_deref(),
        Some("https://content.tamyla.com/access/doc-1")
    );
}

#[tokio::test]
async fn test_search_with_filters_and_paging() {
    let (base, gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    let filters = BTreeMap::from([
        ("category".to_string(), "research".to_string()),
        ("regionTags".to_string(), "MENA".to_string()),
    ]);
    client.search_with_filters("spices", &filters).await.unwrap();
    assert_eq!(
        gateway.last("search").unwrap()["filter"],
        "category = \"research\" AND regionTags = \"MENA\""
    );

    client.search_by_market("saffron", "UAE").await.unwrap();
    assert_eq!(
        gateway.last("search").unwrap()["filter"],
        "tradeableMarkets = \"UAE\""
    );

    client.search_by_region("tea", "GCC").await.unwrap();
    assert_eq!(gateway.last("search").unwrap()["filter"], "regionTags = \"GCC\"");

    client.search_by_category("tea", "market-analysis").await.unwrap();
    assert_eq!(
        gateway.last("search").unwrap()["filter"],
        "category = \"market-analysis\""
    );

    let response = client
        .search(&SearchRequest::new("tea").with_page(10, 40))
        .await
        .unwrap();
    let sent = gateway.last("search").unwrap();
    assert_eq!(sent["limit"], 10);
    assert_eq!(sent["offset"], 40);
    assert!(!response.has_more());
}

#[tokio::test]
async fn test_search_without_hits() {
    let (base, _gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    let response = client.search(&SearchRequest::new("nothing")).await.unwrap();
    assert!(response.hits.is_empty());
    assert!(normalize_hits(response.hits, &NormalizeOptions::default()).is_empty());
}

#[tokio::test]
async fn test_config_default_limit_is_sent() {
    let (base, gateway) = spawn_gateway().await;
    let config = GatewayConfig {
        base_url: base,
        auth_token: TOKEN.into(),
        default_limit: 7,
        ..Default::default()
    };
    let client = SearchGatewayClient::from_config(&config).unwrap();

    client.search(&SearchRequest::new("gold")).await.unwrap();
    assert_eq!(gateway.last("search").unwrap()["limit"], 7);
}

#[tokio::test]
async fn test_zero_limit_falls_back_to_default() {
    let (base, gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    let request = SearchRequest {
        limit: Some(0),
        ..SearchRequest::new("gold")
    };
    client.search(&request).await.unwrap();
    assert_eq!(gateway.last("search").unwrap()["limit"], 20);
}

#[tokio::test]
async fn test_error_uses_body_error_field() {
    let (base, _gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, "wrong-token");

    let err = client.search(&SearchRequest::new("gold")).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "MeiliSearch request failed: 401 - Invalid token");
}

#[tokio::test]
async fn test_error_falls_back_to_status_text() {
    let (base, _gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    let err = client.search(&SearchRequest::new("explode")).await.unwrap_err();
    assert!(matches!(err, ContentHubError::Gateway { status: 500, .. }));
    assert_eq!(
        err.to_string(),
        "MeiliSearch request failed: 500 - Internal Server Error"
    );
}

#[tokio::test]
async fn test_transport_failure() {
    let client = SearchGatewayClient::new("http://127.0.0.1:9", TOKEN);
    let err = client.search(&SearchRequest::new("gold")).await.unwrap_err();
    assert!(matches!(err, ContentHubError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_index_documents_stamps_user_id() {
    let (base, gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    let docs = vec![
        SearchDocument {
            id: "a".into(),
            title: "Dubai free zones".into(),
            user_id: "someone-else".into(),
            ..Default::default()
        },
        SearchDocument {
            id: "b".into(),
            title: "Spices export".into(),
            ..Default::default()
        },
    ];
    client.index_documents(&docs, "user-42").await.unwrap();

    let sent = gateway.last("index").unwrap();
    let sent = sent.as_array().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|d| d["userId"] == "user-42"));

    client.index_document(&docs[0], "user-7").await.unwrap();
    let sent = gateway.last("index").unwrap();
    assert_eq!(sent.as_array().unwrap().len(), 1);
    assert_eq!(sent[0]["userId"], "user-7");
}

#[tokio::test]
async fn test_delete_documents_sends_ids() {
    let (base, gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    client
        .delete_documents(&["a".to_string(), "b".to_string()])
        .await
        .unwrap();
    assert_eq!(gateway.last("delete").unwrap(), json!({ "ids": ["a", "b"] }));

    client.delete_document("c").await.unwrap();
    assert_eq!(gateway.last("delete").unwrap(), json!({ "ids": ["c"] }));
}

#[tokio::test]
async fn test_health_check_is_unauthenticated() {
    let (base, _gateway) = spawn_gateway().await;
    let client = SearchGatewayClient::new(base, TOKEN);

    let body = client.health_check().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["authHeaderSeen"], false);
}

#[tokio::test]
async fn test_health_service_reports_online() {
    let (base, _gateway) = spawn_gateway().await;
    let service = HealthService::new(SearchGatewayClient::new(base, TOKEN));

    let health = service.check_health().await;
    assert_eq!(health.gateway, HealthState::Online);
    assert_eq!(health.meilisearch, HealthState::Online);
    assert_eq!(health.timestamp, "2025-03-01T10:00:00Z");

    let snapshot = health.to_snapshot();
    assert!(snapshot.is_connected);
}
