//! # Share State
//!
//! Holds the share target behind a trait object so tests can substitute a
//! recording implementation for the webview-backed one.

use tracing::error;

use crate::share::ShareTarget;

/// Tauri-managed share dispatch state.
pub struct ShareState {
    target: Box<dyn ShareTarget>,
}

impl ShareState {
    /// Creates the state around a share target.
    pub fn new(target: Box<dyn ShareTarget>) -> Self {
        ShareState { target }
    }

    /// Hands the payload to the share target.
    ///
    /// ## Behavior
    /// Dispatch failure is written to the diagnostic log and swallowed:
    /// the user sees no error state, nothing is retried, and no list state
    /// is rolled back. Once dispatched the share cannot be cancelled from
    /// this side.
    pub fn dispatch(&self, text: &str) {
        if let Err(err) = self.target.share(text) {
            error!(%err, "Share dispatch failed; payload dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::ShareError;
    use std::sync::{Arc, Mutex};

    struct RecordingTarget {
        payloads: Arc<Mutex<Vec<String>>>,
    }

    impl ShareTarget for RecordingTarget {
        fn share(&self, text: &str) -> Result<(), ShareError> {
            self.payloads.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct FailingTarget;

    impl ShareTarget for FailingTarget {
        fn share(&self, _text: &str) -> Result<(), ShareError> {
            Err(ShareError::Unavailable)
        }
    }

    #[test]
    fn test_dispatch_hands_payload_to_target() {
        let payloads = Arc::new(Mutex::new(Vec::new()));
        let state = ShareState::new(Box::new(RecordingTarget {
            payloads: payloads.clone(),
        }));

        state.dispatch("Total: Rs. 0.00\n");

        let seen = payloads.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], "Total: Rs. 0.00\n");
    }

    #[test]
    fn test_dispatch_swallows_target_failure() {
        let state = ShareState::new(Box::new(FailingTarget));
        // Must not panic or surface anything
        state.dispatch("payload");
    }
}
