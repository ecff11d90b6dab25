//! Handlers for the `/products` resource.

use axum::extract::{Path, State};
use axum::Json;
use lookbook_core::detail::MESSAGE_INVALID_ID;
use lookbook_core::error::CoreError;
use lookbook_db::models::product::Product;
use lookbook_db::repositories::ProductRepo;

use super::parse_path_id;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Product>>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DataResponse<Product>>> {
    let id = parse_path_id(&raw_id, MESSAGE_INVALID_ID)?;
    let product = ProductRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Product",
            id: id.to_string(),
        })?;
    Ok(Json(DataResponse { data: product }))
}
