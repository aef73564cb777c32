//! Router

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{create_invoice, health_check, list_invoices};
use crate::state::AppState;

/// Build the application router
///
/// Unknown paths fall through to the static frontend; client-side routes
/// such as `/success` and `/cancel` are answered with `index.html`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health
        .route("/health", get(health_check))

        // Invoices
        .route("/api/create-invoice", post(create_invoice))
        .route("/api/invoices", get(list_invoices))

        // Static files (WASM frontend)
        .fallback_service(frontend)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
