//! # List State
//!
//! Manages the session's checklist.
//!
//! ## Thread Safety
//! The checklist is wrapped in `Arc<Mutex<T>>`:
//! 1. Multiple commands may access/modify the list
//! 2. Only one command should modify the list at a time
//! 3. Tauri commands can run concurrently
//!
//! Each command acquires the lock, runs its transition to completion, and
//! releases it, so there is no torn read between a mutation and the totals
//! computed for its response.

use std::sync::{Arc, Mutex};

use bazaar_core::Checklist;

/// Tauri-managed checklist state.
///
/// The `Checklist` itself lives in `bazaar-core`; this wrapper only adds
/// the shared-ownership and locking needed at the Tauri boundary.
#[derive(Debug)]
pub struct ListState {
    list: Arc<Mutex<Checklist>>,
}

impl ListState {
    /// Creates the state with a fresh checklist (one blank starter row).
    pub fn new() -> Self {
        ListState {
            list: Arc::new(Mutex::new(Checklist::new())),
        }
    }

    /// Executes a function with read access to the checklist.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = list_state.with_list(|list| Totals::from(list));
    /// ```
    pub fn with_list<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Checklist) -> R,
    {
        let list = self.list.lock().expect("Checklist mutex poisoned");
        f(&list)
    }

    /// Executes a function with write access to the checklist.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// list_state.with_list_mut(|list| list.toggle_item(&id))?;
    /// ```
    pub fn with_list_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Checklist) -> R,
    {
        let mut list = self.list.lock().expect("Checklist mutex poisoned");
        f(&mut list)
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}
