//! Application state shared across handlers.

use std::sync::Arc;

use crate::auth::TokenService;
use crate::db::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub tokens: TokenService,
}
