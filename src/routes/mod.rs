//! Router assembly. Everything is mounted under `/api`.

mod common;
mod hotel;

pub use common::common_routes;
pub use hotel::hotel_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Bodies carry inline base64 images, so the default limit is raised to 50 MiB.
pub const DEFAULT_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// The full application: `/api/*` resource and common routes with CORS, tracing and the body limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(hotel_routes(state));

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
