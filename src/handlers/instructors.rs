use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::models::Instructor;
use crate::state::AppState;

/// GET /instructors - list every instructor document
pub async fn list_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Instructor>>, ApiError> {
    Ok(Json(state.store.list_instructors().await?))
}
