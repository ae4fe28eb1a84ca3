pub mod carts;
pub mod classes;
pub mod instructors;
pub mod products;
pub mod token;
pub mod users;

use mongodb::bson::Bson;
use serde_json::Value;

/// GET / - liveness banner
pub async fn root() -> &'static str {
    "Server is running"
}

/// Render a store-generated id for the response body. ObjectIds become
/// 24-char hex strings so they round-trip through `/products/:id`.
pub(crate) fn inserted_id(id: Bson) -> Value {
    match id.as_object_id() {
        Some(oid) => Value::String(oid.to_hex()),
        None => id.into_relaxed_extjson(),
    }
}
