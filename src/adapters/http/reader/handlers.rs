//! HTTP handlers for reader endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::SqlitePool;

use crate::adapters::sqlite::{SqliteProgressReader, SqliteReaderRepository};
use crate::application::handlers::reader::{
    CreateReaderCommand, CreateReaderHandler, DeleteReaderCommand, DeleteReaderHandler,
    ListReadersHandler, ListReadersQuery, SetDayStatusCommand, SetDayStatusHandler,
};
use crate::domain::foundation::{ErrorCode, ReaderId};
use crate::domain::reader::ReaderError;
use crate::ports::{ProgressReader, ReaderRepository};

use super::dto::{
    CreateReaderRequest, ErrorResponse, ReaderResponse, SetDayStatusRequest, SuccessResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct ReaderAppState {
    pub reader_repository: Arc<dyn ReaderRepository>,
    pub progress_reader: Arc<dyn ProgressReader>,
}

impl ReaderAppState {
    pub fn new(
        reader_repository: Arc<dyn ReaderRepository>,
        progress_reader: Arc<dyn ProgressReader>,
    ) -> Self {
        Self {
            reader_repository,
            progress_reader,
        }
    }

    /// State backed by the SQLite adapters sharing one pool.
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self::new(
            Arc::new(SqliteReaderRepository::new(pool.clone())),
            Arc::new(SqliteProgressReader::new(pool)),
        )
    }

    /// Create handlers on demand from the shared state.
    pub fn list_readers_handler(&self) -> ListReadersHandler {
        ListReadersHandler::new(self.progress_reader.clone())
    }

    pub fn create_reader_handler(&self) -> CreateReaderHandler {
        CreateReaderHandler::new(self.reader_repository.clone())
    }

    pub fn set_day_status_handler(&self) -> SetDayStatusHandler {
        SetDayStatusHandler::new(self.reader_repository.clone())
    }

    pub fn delete_reader_handler(&self) -> DeleteReaderHandler {
        DeleteReaderHandler::new(self.reader_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/readers - List every reader with their progress
pub async fn list_readers(
    State(state): State<ReaderAppState>,
) -> Result<impl IntoResponse, ReaderApiError> {
    let handler = state.list_readers_handler();

    let views = handler.handle(ListReadersQuery).await?;

    let response: Vec<ReaderResponse> = views.into_iter().map(ReaderResponse::from).collect();
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/readers - Add a reader with an unmarked schedule
///
/// A missing or unparseable body is treated like a missing name.
pub async fn create_reader(
    State(state): State<ReaderAppState>,
    request: Option<Json<CreateReaderRequest>>,
) -> Result<impl IntoResponse, ReaderApiError> {
    let request = request.map(|Json(request)| request).unwrap_or_default();

    let handler = state.create_reader_handler();
    let cmd = CreateReaderCommand { name: request.name };

    let view = handler.handle(cmd).await?;

    Ok(Json(ReaderResponse::from(view)))
}

/// PUT /api/readers/:id/progress/:day - Mark or unmark one day
///
/// A missing body means "not completed". Path segments that are not integers
/// cannot match a stored day, so they succeed without touching storage.
pub async fn set_day_status(
    State(state): State<ReaderAppState>,
    Path((raw_id, raw_day)): Path<(String, String)>,
    request: Option<Json<SetDayStatusRequest>>,
) -> Result<impl IntoResponse, ReaderApiError> {
    let (Ok(reader_id), Ok(day_number)) = (raw_id.parse::<ReaderId>(), raw_day.parse::<i64>())
    else {
        tracing::debug!(%raw_id, %raw_day, "day status path matches no record");
        return Ok(Json(SuccessResponse::ok()));
    };
    let request = request.map(|Json(request)| request).unwrap_or_default();

    let handler = state.set_day_status_handler();
    let cmd = SetDayStatusCommand {
        reader_id,
        day_number,
        completed: request.is_completed(),
    };

    handler.handle(cmd).await?;

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/readers/:id - Remove a reader and their progress
///
/// A non-integer id matches no reader and succeeds.
pub async fn delete_reader(
    State(state): State<ReaderAppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ReaderApiError> {
    let Ok(reader_id) = raw_id.parse::<ReaderId>() else {
        tracing::debug!(%raw_id, "delete path matches no reader");
        return Ok(Json(SuccessResponse::ok()));
    };

    let handler = state.delete_reader_handler();
    let cmd = DeleteReaderCommand { reader_id };

    handler.handle(cmd).await?;

    Ok(Json(SuccessResponse::ok()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts reader errors to HTTP responses.
#[derive(Debug)]
pub struct ReaderApiError(ReaderError);

impl From<ReaderError> for ReaderApiError {
    fn from(err: ReaderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ReaderApiError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let error_code = match self.0.code() {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::DatabaseError => "STORAGE_ERROR",
        };

        match &self.0 {
            ReaderError::ValidationFailed { field, .. } => {
                tracing::debug!(%field, "reader request rejected");
            }
            ReaderError::Storage(_) => {
                tracing::error!(error = %self.0, "reader request failed");
            }
        }

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
