pub mod health;
pub mod looks;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /looks                  list, get_by_id
/// /products               list, get_by_id
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/looks", looks::router())
        .nest("/products", products::router())
}
