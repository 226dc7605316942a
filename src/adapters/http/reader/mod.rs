//! HTTP adapter for reader endpoints.
//!
//! Exposes the reading tracker via REST API:
//! - `GET /api/readers` - List readers with their 30-day progress
//! - `POST /api/readers` - Add a reader
//! - `PUT /api/readers/:id/progress/:day` - Mark or unmark one day
//! - `DELETE /api/readers/:id` - Remove a reader and their progress

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{ReaderApiError, ReaderAppState};
pub use routes::{reader_router, reader_routes};
