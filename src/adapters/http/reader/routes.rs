//! Axum router configuration for reader endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};

use super::handlers::{create_reader, delete_reader, list_readers, set_day_status, ReaderAppState};

/// Create the reader API routes.
///
/// # Routes
///
/// - `GET /` - List readers with their progress
/// - `POST /` - Add a reader
/// - `DELETE /:id` - Remove a reader and their progress
/// - `PUT /:id/progress/:day` - Mark or unmark one day
pub fn reader_routes() -> Router<ReaderAppState> {
    Router::new()
        .route("/", get(list_readers).post(create_reader))
        .route("/:id", delete(delete_reader))
        .route("/:id/progress/:day", put(set_day_status))
}

/// Create the complete reader module router, mounted at `/api/readers`.
///
/// # Example
///
/// ```ignore
/// use quran_tracker::adapters::http::reader::{reader_router, ReaderAppState};
///
/// let app = reader_router().with_state(ReaderAppState::sqlite(pool));
/// ```
pub fn reader_router() -> Router<ReaderAppState> {
    Router::new().nest("/api/readers", reader_routes())
}
