pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assemble the application router.
///
/// No route opts into [`middleware::require_auth`] in this snapshot; the
/// middleware is wired per-route when an endpoint needs it.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/jwt", post(handlers::token::create_token))
        .route("/classes", get(handlers::classes::list_classes))
        .route("/instructors", get(handlers::instructors::list_instructors))
        .route("/carts", post(handlers::carts::add_cart_entry))
        .route("/users", post(handlers::users::create_user))
        .route("/products", post(handlers::products::create_product))
        .route(
            "/products/:id",
            get(handlers::products::get_product)
                .patch(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
