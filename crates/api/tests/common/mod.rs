#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use lookbook_core::look::ContentType;
use lookbook_core::types::ResourceId;
use lookbook_db::models::look::{CreateHotspot, CreateLook, Look};
use lookbook_db::models::product::{CreateProduct, Product};
use lookbook_db::repositories::{LookRepo, ProductRepo};
use sqlx::PgPool;
use tower::ServiceExt;

use lookbook_api::config::ServerConfig;
use lookbook_api::router::build_app_router;
use lookbook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_product(pool: &PgPool, name: &str, price: f64) -> Product {
    ProductRepo::create(
        pool,
        &CreateProduct {
            name: name.to_string(),
            price,
            description: format!("{name} description"),
            image_url: "https://example.com/product.jpg".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn insert_look(
    pool: &PgPool,
    title: &str,
    content_type: ContentType,
    products: &[&Product],
    hotspots: Vec<(f64, f64, &Product)>,
) -> Look {
    let input = CreateLook {
        title: title.to_string(),
        content_type,
        media_url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        product_ids: products
            .iter()
            .map(|p| ResourceId::parse(&p.id).unwrap())
            .collect(),
        hotspots: hotspots
            .into_iter()
            .map(|(x, y, p)| CreateHotspot {
                x,
                y,
                product_id: ResourceId::parse(&p.id).unwrap(),
            })
            .collect(),
    };
    input.check().unwrap();
    LookRepo::create(pool, &input).await.unwrap()
}
