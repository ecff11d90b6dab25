//! Handlers for the `/looks` resource.

use axum::extract::{Path, State};
use axum::Json;
use lookbook_core::error::CoreError;
use lookbook_db::models::look::Look;
use lookbook_db::repositories::LookRepo;

use super::parse_path_id;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/looks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Look>>>> {
    let looks = LookRepo::list(&state.pool).await?;
    tracing::debug!(count = looks.len(), "Listed looks");
    Ok(Json(DataResponse { data: looks }))
}

/// GET /api/looks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DataResponse<Look>>> {
    let id = parse_path_id(&raw_id, "Invalid look ID format")?;
    let look = LookRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Look",
            id: id.to_string(),
        })?;
    Ok(Json(DataResponse { data: look }))
}
