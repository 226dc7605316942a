//! HTTP DTOs (Data Transfer Objects) for reader endpoints.
//!
//! These types define the JSON request/response structure for the reader API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::reader::ReadingProgress;
use crate::ports::ReaderView;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to add a reader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReaderRequest {
    /// Display name; presence is validated by the application layer.
    #[serde(default)]
    pub name: Option<String>,
}

/// Request to mark or unmark one day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetDayStatusRequest {
    /// Any JSON value, interpreted by its truthiness.
    #[serde(default)]
    pub completed: Value,
}

impl SetDayStatusRequest {
    pub fn is_completed(&self) -> bool {
        is_truthy(&self.completed)
    }
}

/// JavaScript-style truthiness, so clients may send `1`, `"yes"` or `true`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A reader with their progress.
#[derive(Debug, Clone, Serialize)]
pub struct ReaderResponse {
    pub id: i64,
    pub name: String,
    /// One flag per schedule day, day 1 first.
    pub progress: ReadingProgress,
}

impl From<ReaderView> for ReaderResponse {
    fn from(view: ReaderView) -> Self {
        Self {
            id: view.id.as_i64(),
            name: view.name,
            progress: view.progress,
        }
    }
}

/// Acknowledgement for commands without a payload.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_code: error_code.into(),
        }
    }
}
