use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::inserted_id;
use crate::error::ApiError;
use crate::models::{ClassItem, ProductUpdate, ProductView};
use crate::state::AppState;

/// GET /products/:id - fetch one class restricted to the listing fields
///
/// An unknown id serializes as `null`; a malformed one surfaces as a
/// store error.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<ProductView>>, ApiError> {
    Ok(Json(state.store.find_product(&id).await?))
}

/// POST /products - insert one class document
pub async fn create_product(
    State(state): State<AppState>,
    Json(item): Json<ClassItem>,
) -> Result<Json<Value>, ApiError> {
    let result = state.store.insert_product(&item).await?;
    Ok(Json(json!({ "insertedId": inserted_id(result.inserted_id) })))
}

/// PATCH /products/:id - overwrite the whitelisted fields
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Value>, ApiError> {
    let result = state.store.update_product(&id, &update).await?;
    Ok(Json(json!({
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
    })))
}

/// DELETE /products/:id - remove one class document
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let result = state.store.delete_product(&id).await?;
    Ok(Json(json!({ "deletedCount": result.deleted_count })))
}
