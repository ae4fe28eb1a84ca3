use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::inserted_id;
use crate::error::ApiError;
use crate::models::CartEntry;
use crate::state::AppState;

/// POST /carts - add one item to the cart collection
pub async fn add_cart_entry(
    State(state): State<AppState>,
    Json(entry): Json<CartEntry>,
) -> Result<Json<Value>, ApiError> {
    let result = state.store.insert_cart_entry(&entry).await?;
    Ok(Json(json!({ "insertedId": inserted_id(result.inserted_id) })))
}
