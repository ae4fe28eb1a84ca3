use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::inserted_id;
use crate::error::ApiError;
use crate::models::User;
use crate::state::AppState;

/// POST /users - create a user unless one already holds the email
///
/// Idempotent on email: a repeated request for a stored email inserts
/// nothing and reports existence instead.
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<Value>, ApiError> {
    if state.store.find_user_by_email(&user.email).await?.is_some() {
        return Ok(Json(json!({ "message": "user already exists" })));
    }

    let result = state.store.insert_user(&user).await?;
    Ok(Json(json!({ "insertedId": inserted_id(result.inserted_id) })))
}
