//! Client tests against an in-process stub of the Lookbook API.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use lookbook_client::{ClientConfig, ClientError, FeedLoader, LookbookApi, ProductDetailLoader};
use lookbook_core::catalog::ProductSlot;
use lookbook_core::detail::{DetailFailure, DetailState};
use lookbook_core::feed::FeedLoadState;
use lookbook_core::look::ContentType;
use lookbook_core::types::ResourceId;
use serde_json::json;

// ---------------------------------------------------------------------------
// Stub server
// ---------------------------------------------------------------------------

const P1: &str = "650000000000000000000101";
const P2: &str = "650000000000000000000102";
/// Always 404.
const P3: &str = "650000000000000000000103";
/// 500 on the first request, 200 afterwards.
const P4: &str = "650000000000000000000104";
/// Well-formed locally, rejected by the server.
const REJECTED_LOOK: &str = "0000000000000000000000ff";
const REJECTED_PRODUCT: &str = "0000000000000000000000fe";

#[derive(Clone, Default)]
struct Stub {
    flaky_calls: Arc<AtomicUsize>,
    looks_fail: bool,
    looks_empty: bool,
}

fn product_json(id: &str, name: &str, price: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "price": price,
        "description": "",
        "imageUrl": format!("https://example.com/{id}.jpg"),
        "createdAt": "2025-03-01T00:00:00Z",
        "updatedAt": "2025-03-01T00:00:00Z"
    })
}

async fn list_looks(State(stub): State<Stub>, Query(params): Query<HashMap<String, String>>) -> Response {
    if !params.contains_key("t") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "missing t" }))).into_response();
    }
    if stub.looks_fail {
        return (StatusCode::SERVICE_UNAVAILABLE, "down").into_response();
    }
    if stub.looks_empty {
        return Json(json!({ "data": [] })).into_response();
    }
    Json(json!({
        "data": [
            {
                "_id": "650000000000000000000001",
                "title": "Casual Streetwear",
                "contentType": "video",
                "mediaUrl": "https://example.com/street.mp4",
                "productIds": [{ "_id": P1, "name": "Sneakers" }, P2]
            },
            {
                "id": "650000000000000000000002",
                "title": "Urban Chic",
                "contentType": "image",
                "mediaUrl": "https://example.com/urban.jpg",
                "productIds": [P3, P4, P1],
                "hotspots": [{ "x": 30.0, "y": 40.0, "productId": P3 }]
            },
            {
                "id": "not-a-valid-id",
                "title": "Broken",
                "contentType": "video",
                "mediaUrl": "https://example.com/broken.mp4"
            }
        ]
    }))
    .into_response()
}

async fn get_product(State(stub): State<Stub>, Path(id): Path<String>) -> Response {
    match id.as_str() {
        P1 => Json(json!({ "data": product_json(P1, "Classic White Sneakers", 129.99) })).into_response(),
        P2 => Json(json!({ "data": product_json(P2, "Vintage Denim Jacket", 89.99) })).into_response(),
        P4 if stub.flaky_calls.fetch_add(1, Ordering::SeqCst) > 0 => {
            Json(json!({ "data": product_json(P4, "Minimalist Watch", 199.99) })).into_response()
        }
        P4 => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        REJECTED_PRODUCT => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid product ID format", "code": "VALIDATION_ERROR" })),
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Product not found", "code": "NOT_FOUND" })),
        )
            .into_response(),
    }
}

async fn get_look(Path(id): Path<String>) -> Response {
    if id == REJECTED_LOOK {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid look ID format", "code": "VALIDATION_ERROR" })),
        )
            .into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Look not found", "code": "NOT_FOUND" })),
    )
        .into_response()
}

async fn spawn_stub(stub: Stub) -> LookbookApi {
    let app = Router::new()
        .route("/api/looks", get(list_looks))
        .route("/api/looks/{id}", get(get_look))
        .route("/api/products/{id}", get(get_product))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    LookbookApi::new(&ClientConfig {
        api_url: format!("http://{addr}/api"),
        timeout_secs: 5,
    })
    .unwrap()
}

fn id(raw: &str) -> ResourceId {
    ResourceId::parse(raw).unwrap()
}

// ---------------------------------------------------------------------------
// LookbookApi
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_product_unwraps_envelope() {
    let api = spawn_stub(Stub::default()).await;
    let product = api.get_product(&id(P1)).await.unwrap();
    assert_eq!(product.name, "Classic White Sneakers");
    assert_eq!(product.display_price(), "$129.99");
}

#[tokio::test]
async fn not_found_carries_server_message() {
    let api = spawn_stub(Stub::default()).await;
    let err = api.get_product(&id(P3)).await.unwrap_err();
    assert_matches!(err, ClientError::NotFound(msg) if msg == "Product not found");
}

#[tokio::test]
async fn bad_request_is_a_validation_error() {
    let api = spawn_stub(Stub::default()).await;
    let err = api.get_look(&id(REJECTED_LOOK)).await.unwrap_err();
    assert!(!err.is_retryable());
    assert_matches!(err, ClientError::Validation(msg) if msg == "Invalid look ID format");
}

#[tokio::test]
async fn absent_look_is_not_found() {
    let api = spawn_stub(Stub::default()).await;
    let err = api.get_look(&id("650000000000000000000009")).await.unwrap_err();
    assert_matches!(err, ClientError::NotFound(msg) if msg == "Look not found");
}

#[tokio::test]
async fn server_error_is_transient() {
    let api = spawn_stub(Stub::default()).await;
    let err = api.get_product(&id(P4)).await.unwrap_err();
    assert!(err.is_retryable());
    assert_matches!(err, ClientError::Transient(msg) if msg.starts_with("HTTP 500"));
}

#[tokio::test]
async fn list_looks_sends_cache_buster() {
    let api = spawn_stub(Stub::default()).await;
    let looks = api.list_looks().await.unwrap();
    assert_eq!(looks.len(), 3);
}

#[tokio::test]
async fn unreachable_server_is_transient() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = LookbookApi::new(&ClientConfig {
        api_url: format!("http://{addr}/api"),
        timeout_secs: 2,
    })
    .unwrap();

    assert_matches!(api.list_looks().await, Err(ClientError::Transient(_)));
}

// ---------------------------------------------------------------------------
// FeedLoader
// ---------------------------------------------------------------------------

#[tokio::test]
async fn feed_loads_with_partial_product_failures() {
    let api = spawn_stub(Stub::default()).await;
    let mut loader = FeedLoader::new(api);

    let looks = match loader.load().await {
        FeedLoadState::Ready(looks) => looks.clone(),
        other => panic!("expected Ready, got {other:?}"),
    };

    // The malformed look is dropped; the other two survive.
    assert_eq!(looks.len(), 2);
    assert_eq!(looks[0].product_ids, vec![id(P1), id(P2)]);
    assert_eq!(looks[1].content_type, ContentType::Image);
    assert_eq!(looks[1].hotspots[0].product_id, id(P3));

    let slots = loader.products().for_look(&looks[1]);
    assert_eq!(slots[0], ProductSlot::Missing);
    assert_eq!(slots[1], ProductSlot::Missing);
    assert_matches!(&slots[2], ProductSlot::Loaded(p) if p.id == id(P1));
    assert_eq!(loader.products().missing_count(), 2);
}

#[tokio::test]
async fn feed_failure_offers_retry() {
    let api = spawn_stub(Stub {
        looks_fail: true,
        ..Stub::default()
    })
    .await;
    let mut loader = FeedLoader::new(api);

    let state = loader.load().await;
    assert_eq!(state, &FeedLoadState::Failed);
    assert_eq!(state.message(), Some("Failed to load looks. Please try again."));

    assert_eq!(loader.retry().await, Some(&FeedLoadState::Failed));
}

#[tokio::test]
async fn empty_feed_reports_empty() {
    let api = spawn_stub(Stub {
        looks_empty: true,
        ..Stub::default()
    })
    .await;
    let mut loader = FeedLoader::new(api);

    assert_eq!(loader.load().await, &FeedLoadState::Empty);
    assert!(loader.retry().await.is_none());
}

// ---------------------------------------------------------------------------
// ProductDetailLoader
// ---------------------------------------------------------------------------

#[tokio::test]
async fn detail_rejects_malformed_id_locally() {
    let api = spawn_stub(Stub::default()).await;
    let mut loader = ProductDetailLoader::new(api);

    assert_eq!(
        loader.open("xyz").await,
        &DetailState::Failed(DetailFailure::InvalidId)
    );
}

#[tokio::test]
async fn detail_server_rejection_reads_as_invalid_id() {
    let api = spawn_stub(Stub::default()).await;
    let mut loader = ProductDetailLoader::new(api);

    let state = loader.open(REJECTED_PRODUCT).await;
    assert_eq!(state, &DetailState::Failed(DetailFailure::InvalidId));
    assert_matches!(state, DetailState::Failed(f) if !f.retryable());
}

#[tokio::test]
async fn detail_not_found_is_final() {
    let api = spawn_stub(Stub::default()).await;
    let mut loader = ProductDetailLoader::new(api);

    assert_eq!(
        loader.open(P3).await,
        &DetailState::Failed(DetailFailure::NotFound)
    );
    assert_eq!(
        loader.retry().await,
        &DetailState::Failed(DetailFailure::NotFound)
    );
}

#[tokio::test]
async fn detail_transient_failure_recovers_on_retry() {
    let api = spawn_stub(Stub::default()).await;
    let mut loader = ProductDetailLoader::new(api);

    assert_eq!(
        loader.open(P4).await,
        &DetailState::Failed(DetailFailure::Transient)
    );
    assert_matches!(loader.retry().await, DetailState::Loaded(p) if p.name == "Minimalist Watch");
}
