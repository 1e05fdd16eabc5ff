//! # Share Target
//!
//! The seam between the checklist and the platform share affordance.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Share Dispatch                                   │
//! │                                                                     │
//! │  share_list command                                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  receipt::render(checked items) ──► payload text                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ShareTarget::share(payload)                                        │
//! │       │                                                             │
//! │       ├── Ok: webview receives "share-requested" and opens the      │
//! │       │       platform share sheet. Outcome is NOT awaited.         │
//! │       │                                                             │
//! │       └── Err: logged via tracing, swallowed. The list state is     │
//! │               untouched and the user sees no error.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tauri::{AppHandle, Emitter};
use thiserror::Error;

/// Event name the webview listens on to open the share sheet.
pub const SHARE_EVENT: &str = "share-requested";

// =============================================================================
// Share Target
// =============================================================================

/// The external share collaborator.
///
/// One operation: hand the payload off. Implementations must not block on
/// the user's interaction with the share sheet; `share` only covers getting
/// the payload out the door.
pub trait ShareTarget: Send + Sync {
    /// Dispatches the payload toward the platform share affordance.
    fn share(&self, text: &str) -> Result<(), ShareError>;
}

/// Share dispatch errors.
///
/// These never reach the user: the caller logs and drops them.
#[derive(Debug, Error)]
pub enum ShareError {
    /// Event emission toward the webview failed.
    #[error("share dispatch failed: {0}")]
    Dispatch(#[from] tauri::Error),

    /// No share surface is available to receive the payload
    /// (e.g. the webview is gone during shutdown).
    #[error("no share surface available")]
    Unavailable,
}

// =============================================================================
// Production Implementation
// =============================================================================

/// Shares by emitting [`SHARE_EVENT`] to the webview.
///
/// The webview owns the actual share-sheet invocation (`navigator.share`
/// where available); this side only fires the event and returns, so the UI
/// stays interactive while the sheet is up.
pub struct WebviewShare {
    app: AppHandle,
}

impl WebviewShare {
    pub fn new(app: AppHandle) -> Self {
        WebviewShare { app }
    }
}

impl ShareTarget for WebviewShare {
    fn share(&self, text: &str) -> Result<(), ShareError> {
        self.app.emit(SHARE_EVENT, text)?;
        Ok(())
    }
}
