//! # Domain Types
//!
//! The `Item` entity used throughout Bazaar List.
//!
//! ## Identity
//! Every item carries a UUID v4 `id`, assigned once at creation and never
//! reused. All checklist operations key on this id; positional index is
//! display order only. An id held by the frontend stays valid across adds
//! and removes of other rows.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::price;

// =============================================================================
// Item
// =============================================================================

/// One checklist entry.
///
/// ## Fields
/// - `id`: stable identity, UUID v4
/// - `name`: free-form text, may be empty
/// - `price`: raw text as typed; parsed on demand, invalid/empty counts as 0
/// - `checked`: whether the item is ticked off
///
/// The price is deliberately stored as text rather than a numeric type:
/// the user is editing a text field, and whatever they typed must round-trip
/// unchanged into the row and into the share receipt.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Stable item identity (UUID v4).
    pub id: String,

    /// Item name as entered. May be empty.
    pub name: String,

    /// Price as entered. Raw text, never reformatted.
    pub price: String,

    /// Checked-off flag.
    pub checked: bool,
}

impl Item {
    /// Creates a blank item with a fresh id.
    ///
    /// ## Behavior
    /// Name and price start empty; `checked` copies the caller's current
    /// master-checked state so a new row matches the list it joins.
    pub fn blank(checked: bool) -> Self {
        Item {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            price: String::new(),
            checked,
        }
    }

    /// Parses the stored price text into an amount.
    ///
    /// Empty or unparseable text counts as 0; see [`price::parse`].
    pub fn price_value(&self) -> f64 {
        price::parse(&self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_item_copies_checked_state() {
        let unchecked = Item::blank(false);
        assert!(!unchecked.checked);
        assert!(unchecked.name.is_empty());
        assert!(unchecked.price.is_empty());

        let checked = Item::blank(true);
        assert!(checked.checked);
    }

    #[test]
    fn test_blank_items_get_distinct_ids() {
        let a = Item::blank(false);
        let b = Item::blank(false);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_price_value_parses_on_demand() {
        let mut item = Item::blank(false);
        assert_eq!(item.price_value(), 0.0);

        item.price = "50".to_string();
        assert_eq!(item.price_value(), 50.0);

        item.price = "not a number".to_string();
        assert_eq!(item.price_value(), 0.0);
        // Raw text survives the failed parse untouched
        assert_eq!(item.price, "not a number");
    }
}
