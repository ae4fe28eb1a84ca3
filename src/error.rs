// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::TokenError;
use crate::db::StoreError;

/// HTTP-facing error. Clients only ever see the fixed unauthorized body
/// or a generic 500; the underlying cause goes to the log.
#[derive(Debug)]
pub enum ApiError {
    // 401 with the fixed contract body
    Unauthorized,

    // 500, cause logged server-side only
    Store(StoreError),
    Token(TokenError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Store(_) | ApiError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe message.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "unauthorized access",
            ApiError::Store(_) | ApiError::Token(_) => "internal server error",
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.message(),
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::Token(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ApiError::Store(err) => tracing::error!("store operation failed: {err}"),
            ApiError::Token(err) => tracing::error!("token operation failed: {err}"),
            ApiError::Unauthorized => {}
        }

        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn unauthorized_uses_the_fixed_contract_body() {
        let err = ApiError::Unauthorized;
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            err.to_json(),
            json!({ "error": true, "message": "unauthorized access" })
        );
    }

    #[test]
    fn store_failures_map_to_generic_500() {
        let oid_err = ObjectId::parse_str("nope").unwrap_err();
        let err = ApiError::from(StoreError::from(oid_err));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_json(),
            json!({ "error": true, "message": "internal server error" })
        );
    }
}
