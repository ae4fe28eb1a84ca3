use axum::{extract::State, Json};
use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /jwt - sign the posted user object into a bearer token
pub async fn create_token(
    State(state): State<AppState>,
    Json(user): Json<Map<String, Value>>,
) -> Result<Json<Value>, ApiError> {
    let token = state.tokens.issue(user)?;
    Ok(Json(json!({ "token": token })))
}
