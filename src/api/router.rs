//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. A permissive CORS layer is applied so
//! the browser frontend can call the API from its own origin.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with a fresh context.
pub fn api_router() -> Router {
    build_router(ApiContext::new())
}

/// Build router from a pre-constructed `ApiContext`.
///
/// Used by tests that need to seed or inspect the session store directly.
pub fn api_router_with_ctx(ctx: ApiContext) -> Router {
    build_router(ctx)
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/about", get(endpoints::about::page))
        .route("/chat/send", post(endpoints::chat::send))
        .route("/chat/sessions/:id", get(endpoints::chat::transcript))
        .route("/chat/topics", get(endpoints::chat::topics))
        .with_state(ctx)
        .layer(CorsLayer::permissive());

    Router::new().nest("/api", routes)
}
