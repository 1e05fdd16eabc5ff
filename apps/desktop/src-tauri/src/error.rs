//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bazaar List                        │
//! │                                                                     │
//! │  Frontend                    Rust Backend                           │
//! │  ────────                    ────────────                           │
//! │                                                                     │
//! │  invoke('toggle_item', { id })                                      │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                             │  │
//! │  │  Result<ListResponse, ApiError>                               │  │
//! │  │         │                                                     │  │
//! │  │         ▼                                                     │  │
//! │  │  Unknown id? ─── CoreError::ItemNotFound ──► ApiError ──────► │  │
//! │  │         │                                                     │  │
//! │  │         ▼                                                     │  │
//! │  │  Success ────────────────────────────────────────────────────►│  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  Share failures never take this path: they are logged and           │
//! │  swallowed at the dispatch site (see state::ShareState).            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use bazaar_core::CoreError;
use serde::Serialize;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found: 4f2c..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item id not present in the checklist
    NotFound,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => {
                ApiError::new(ErrorCode::NotFound, format!("Item not found: {}", id))
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
