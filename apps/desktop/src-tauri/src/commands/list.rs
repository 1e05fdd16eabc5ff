//! # List Commands
//!
//! Tauri commands for checklist manipulation.
//!
//! ## Screen Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Single-screen layout (always visible)                              │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  2 Total Sum:                                   Rs. 70       │  │
//! │  │  1 Checked Sum:                                 Rs. 50       │  │
//! │  ├───────────────────────────────────────────────────────────────┤  │
//! │  │  [x] Milk            50        🗑                            │  │
//! │  │  [ ] Bread           20        🗑                            │  │
//! │  ├───────────────────────────────────────────────────────────────┤  │
//! │  │  📨   [master checkbox]                              ( + )  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  Every mutation returns the FULL ListResponse so the frontend       │
//! │  re-renders rows and summary labels from one payload.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::ListState;
use bazaar_core::{Checklist, Item, Totals};

/// Checklist response: rows plus derived display values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub items: Vec<Item>,
    pub master_checked: bool,
    pub totals: Totals,
    /// Session start, RFC 3339.
    pub created_at: String,
}

impl From<&Checklist> for ListResponse {
    fn from(list: &Checklist) -> Self {
        ListResponse {
            items: list.items().to_vec(),
            master_checked: list.master_checked(),
            totals: Totals::from(list),
            created_at: list.created_at().to_rfc3339(),
        }
    }
}

/// Gets the current checklist contents.
///
/// ## Returns
/// Current checklist with rows, master flag, and recomputed totals
#[tauri::command]
pub fn get_list(list: State<'_, ListState>) -> ListResponse {
    debug!("get_list command");
    list.with_list(|l| ListResponse::from(l))
}

/// Appends a blank row.
///
/// ## Behavior
/// - The new row's checkbox copies the current master-checked state
/// - Always succeeds; there is no row cap
///
/// ## Returns
/// Updated checklist
#[tauri::command]
pub fn add_item(list: State<'_, ListState>) -> ListResponse {
    debug!("add_item command");
    list.with_list_mut(|l| {
        let id = l.add_item().id.clone();
        debug!(item_id = %id, "Item added");
        ListResponse::from(&*l)
    })
}

/// Sets the name of one row.
///
/// ## Arguments
/// * `id` - Item id from the current response
/// * `value` - New name text, stored as-is
///
/// ## Returns
/// Updated checklist
#[tauri::command]
pub fn set_item_name(
    list: State<'_, ListState>,
    id: String,
    value: String,
) -> Result<ListResponse, ApiError> {
    debug!(item_id = %id, "set_item_name command");
    list.with_list_mut(|l| {
        l.set_name(&id, &value)?;
        Ok(ListResponse::from(&*l))
    })
}

/// Sets the price text of one row.
///
/// ## Behavior
/// The text is stored verbatim; totals in the returned response already
/// reflect it (unparseable text counts as 0 there).
///
/// ## Returns
/// Updated checklist
#[tauri::command]
pub fn set_item_price(
    list: State<'_, ListState>,
    id: String,
    value: String,
) -> Result<ListResponse, ApiError> {
    debug!(item_id = %id, "set_item_price command");
    list.with_list_mut(|l| {
        l.set_price(&id, &value)?;
        Ok(ListResponse::from(&*l))
    })
}

/// Flips one row's checkbox.
///
/// ## Behavior
/// The master flag in the response is recomputed: checking the last
/// unchecked row turns it on, unchecking any row turns it off.
///
/// ## Returns
/// Updated checklist
#[tauri::command]
pub fn toggle_item(list: State<'_, ListState>, id: String) -> Result<ListResponse, ApiError> {
    debug!(item_id = %id, "toggle_item command");
    list.with_list_mut(|l| {
        l.toggle_item(&id)?;
        Ok(ListResponse::from(&*l))
    })
}

/// Removes one row.
///
/// ## Behavior
/// Remaining rows keep their order. Removing the last row leaves the
/// master flag vacuously set (preserved behavior, pinned in core tests).
///
/// ## Returns
/// Updated checklist
#[tauri::command]
pub fn remove_item(list: State<'_, ListState>, id: String) -> Result<ListResponse, ApiError> {
    debug!(item_id = %id, "remove_item command");
    list.with_list_mut(|l| {
        l.remove_item(&id)?;
        Ok(ListResponse::from(&*l))
    })
}

/// Flips the master checkbox, forcing every row to the new value.
///
/// ## Returns
/// Updated checklist
#[tauri::command]
pub fn toggle_all(list: State<'_, ListState>) -> ListResponse {
    debug!("toggle_all command");
    list.with_list_mut(|l| {
        l.toggle_master();
        ListResponse::from(&*l)
    })
}
