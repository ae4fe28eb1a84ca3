use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;

/// Bearer-token middleware for routes that opt in.
///
/// Rejects with 401 `{error:true, message:"unauthorized access"}` when the
/// `Authorization` header is missing or its token does not verify. On
/// success the decoded [`Claims`] are attached as a request extension for
/// the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(ApiError::Unauthorized)?;
    let value = header.to_str().map_err(|_| ApiError::Unauthorized)?;

    // "Bearer <token>": everything after the first space. The scheme word
    // itself is not checked.
    let token = value
        .split_once(' ')
        .map(|(_, token)| token)
        .ok_or(ApiError::Unauthorized)?;

    let claims: Claims = state
        .tokens
        .verify(token)
        .map_err(|_| ApiError::Unauthorized)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
