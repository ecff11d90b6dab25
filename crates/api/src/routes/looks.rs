//! Route definitions for the `/looks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::looks;
use crate::state::AppState;

/// Routes mounted at `/looks`.
///
/// ```text
/// GET    /                -> list
/// GET    /{id}            -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(looks::list))
        .route("/{id}", get(looks::get_by_id))
}
