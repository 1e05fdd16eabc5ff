//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  bazaar-core errors (this file)                                    │
//! │  └── CoreError        - Checklist operation failures               │
//! │                                                                     │
//! │  Tauri API errors (in app)                                         │
//! │  └── ApiError         - What the frontend sees (serialized)        │
//! │                                                                     │
//! │  Flow: CoreError → ApiError → Frontend                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Price parsing is deliberately absent from this hierarchy: unparseable
//! price text counts as zero during aggregation and is never an error.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checklist operation errors.
///
/// The shipped frontend only ever sends item ids taken from the current
/// `ListResponse`, so `ItemNotFound` is a contract violation rather than a
/// user-reachable state. It is still reported as a typed error across the
/// IPC boundary instead of panicking the backend.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No item with the given id exists in the checklist.
    #[error("Item not found: {0}")]
    ItemNotFound(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Item not found: abc-123");
    }
}
