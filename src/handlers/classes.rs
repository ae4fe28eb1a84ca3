use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::models::ClassItem;
use crate::state::AppState;

/// GET /classes - list every class document
pub async fn list_classes(State(state): State<AppState>) -> Result<Json<Vec<ClassItem>>, ApiError> {
    Ok(Json(state.store.list_classes().await?))
}
