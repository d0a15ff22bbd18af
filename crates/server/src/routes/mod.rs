// crates/server/src/routes/mod.rs
//! API route modules.

pub mod health;
pub mod corpus;
pub mod analyze;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Assemble all API routes under `/api` with the shared state applied.
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(health::router())
                .merge(corpus::router())
                .merge(analyze::router()),
        )
        .with_state(state)
}
