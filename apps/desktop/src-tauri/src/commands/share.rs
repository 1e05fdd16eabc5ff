//! # Share Command
//!
//! Renders the receipt for checked rows and hands it to the share target.

use tauri::State;
use tracing::debug;

use crate::state::{ConfigState, ListState, ShareState};
use bazaar_core::receipt;

/// Shares the checked rows as a plain-text receipt.
///
/// ## Behavior
/// - Renders the receipt over the current checked rows, in list order
/// - Hands the text to the share target and returns immediately; the
///   share-sheet outcome is never awaited or inspected
/// - Dispatch failure is logged and swallowed, so this command cannot fail
///
/// ## Returns
/// Nothing; the payload travels via the share target
#[tauri::command]
pub fn share_list(
    list: State<'_, ListState>,
    config: State<'_, ConfigState>,
    share: State<'_, ShareState>,
) {
    debug!("share_list command");

    let text = list.with_list(|l| receipt::render(l.items(), &config.currency_label));
    share.dispatch(&text);
}
