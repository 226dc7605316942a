//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `api_router` assembles them with the cross-cutting layers.

pub mod reader;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// Re-export key types for convenience
pub use reader::reader_router;
pub use reader::ReaderAppState;

/// Build the complete API with request tracing and permissive CORS.
pub fn api_router(state: ReaderAppState) -> Router {
    reader_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
