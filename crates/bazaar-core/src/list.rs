//! # Checklist
//!
//! The checklist aggregate: an ordered sequence of items plus the derived
//! master-checked flag.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Checklist Operations                             │
//! │                                                                     │
//! │  Frontend Action        Tauri Command         Checklist Change      │
//! │  ───────────────        ─────────────         ────────────────      │
//! │                                                                     │
//! │  Tap "+" ──────────────► add_item() ─────────► items.push(blank)    │
//! │                                                                     │
//! │  Edit name field ──────► set_item_name() ────► items[id].name = v   │
//! │                                                                     │
//! │  Edit price field ─────► set_item_price() ───► items[id].price = v  │
//! │                                                                     │
//! │  Tap row checkbox ─────► toggle_item() ──────► flip + recompute     │
//! │                                                                     │
//! │  Tap trash ────────────► remove_item() ──────► retain + recompute   │
//! │                                                                     │
//! │  Tap master checkbox ──► toggle_all() ───────► flip flag, set all   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is the only ordering; it is the order rendered and the
//!   order receipt serial numbers are assigned in.
//! - `master_checked` equals the AND over all items' `checked` after every
//!   add, remove, and individual toggle. Over an empty list the AND is
//!   vacuously true; that matches the shipped behavior and is pinned by a
//!   test below rather than special-cased away.
//! - `toggle_master` forces every item to the new flag value, list-wide.

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::types::Item;

// =============================================================================
// Checklist
// =============================================================================

/// The single in-memory checklist for the session.
///
/// A new checklist seeds exactly one blank, unchecked item so the screen
/// always opens with an editable row. Nothing persists beyond the process.
#[derive(Debug, Clone)]
pub struct Checklist {
    /// Items in insertion order.
    items: Vec<Item>,

    /// Derived: true iff every item is checked.
    master_checked: bool,

    /// When this session's checklist was created.
    created_at: DateTime<Utc>,
}

impl Checklist {
    /// Creates a checklist with one blank, unchecked starter row.
    pub fn new() -> Self {
        Checklist {
            items: vec![Item::blank(false)],
            master_checked: false,
            created_at: Utc::now(),
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current master-checked flag.
    pub fn master_checked(&self) -> bool {
        self.master_checked
    }

    /// When this session's checklist was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends a blank item and returns it.
    ///
    /// ## Behavior
    /// The new item's `checked` copies the current master-checked state, so
    /// adding to a fully-checked list keeps it fully checked. Always
    /// succeeds; the list has no size cap beyond what a user will type.
    pub fn add_item(&mut self) -> &Item {
        let item = Item::blank(self.master_checked);
        self.items.push(item);
        self.recompute_master();
        self.items.last().expect("just pushed")
    }

    /// Sets the name of the item with the given id.
    pub fn set_name(&mut self, id: &str, value: &str) -> CoreResult<()> {
        let item = self.find_mut(id)?;
        item.name = value.to_string();
        Ok(())
    }

    /// Sets the price text of the item with the given id.
    ///
    /// The text is stored as given. It is parsed only when totals or the
    /// receipt need a number; invalid text simply counts as 0 there.
    pub fn set_price(&mut self, id: &str, value: &str) -> CoreResult<()> {
        let item = self.find_mut(id)?;
        item.price = value.to_string();
        Ok(())
    }

    /// Flips the checked flag of the item with the given id.
    ///
    /// ## Behavior
    /// Recomputes `master_checked` afterwards: checking the last unchecked
    /// item turns the master flag on, unchecking any item turns it off.
    pub fn toggle_item(&mut self, id: &str) -> CoreResult<()> {
        let item = self.find_mut(id)?;
        item.checked = !item.checked;
        self.recompute_master();
        Ok(())
    }

    /// Removes the item with the given id.
    ///
    /// ## Behavior
    /// Remaining items keep their relative order. `master_checked` is
    /// recomputed over what is left; removing the last item leaves the flag
    /// vacuously true (see module invariants).
    pub fn remove_item(&mut self, id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() == initial_len {
            return Err(CoreError::ItemNotFound(id.to_string()));
        }

        self.recompute_master();
        Ok(())
    }

    /// Flips the master flag and forces every item to the new value.
    ///
    /// ## Behavior
    /// Unconditional: items already at the new value stay there. On an
    /// empty list the stored flag still flips with no per-item effect.
    pub fn toggle_master(&mut self) {
        self.master_checked = !self.master_checked;
        for item in &mut self.items {
            item.checked = self.master_checked;
        }
    }

    /// Checks if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> CoreResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    /// `master_checked` = AND over all items. Vacuously true when empty.
    fn recompute_master(&mut self) {
        self.master_checked = self.items.iter().all(|i| i.checked);
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totals::Totals;

    fn id_at(list: &Checklist, index: usize) -> String {
        list.items()[index].id.clone()
    }

    /// Builds a list with the given rows, replacing the starter row.
    fn list_of(rows: &[(&str, &str, bool)]) -> Checklist {
        let mut list = Checklist::new();
        let starter = id_at(&list, 0);
        list.remove_item(&starter).unwrap();
        for &(name, price, checked) in rows {
            let id = list.add_item().id.clone();
            list.set_name(&id, name).unwrap();
            list.set_price(&id, price).unwrap();
            // add_item copies the master flag, so normalize to the wanted state
            if list.items().last().unwrap().checked != checked {
                list.toggle_item(&id).unwrap();
            }
        }
        list
    }

    #[test]
    fn test_new_list_has_one_blank_unchecked_row() {
        let list = Checklist::new();
        assert_eq!(list.items().len(), 1);
        assert!(!list.items()[0].checked);
        assert!(list.items()[0].name.is_empty());
        assert!(!list.master_checked());
    }

    #[test]
    fn test_add_item_copies_master_state() {
        let mut list = Checklist::new();
        let starter = id_at(&list, 0);
        list.toggle_item(&starter).unwrap();
        assert!(list.master_checked());

        let added = list.add_item();
        assert!(added.checked);
        assert!(list.master_checked());
    }

    #[test]
    fn test_toggle_item_recomputes_master() {
        let mut list = list_of(&[("Milk", "50", false), ("Bread", "20", false)]);
        let first = id_at(&list, 0);
        let second = id_at(&list, 1);

        list.toggle_item(&first).unwrap();
        assert!(!list.master_checked());

        list.toggle_item(&second).unwrap();
        assert!(list.master_checked());

        list.toggle_item(&second).unwrap();
        assert!(!list.master_checked());
    }

    #[test]
    fn test_toggle_master_forces_every_item() {
        let mut list = list_of(&[("Milk", "50", true), ("Bread", "20", false)]);
        assert!(!list.master_checked());

        list.toggle_master();
        assert!(list.master_checked());
        assert!(list.items().iter().all(|i| i.checked));

        list.toggle_master();
        assert!(!list.master_checked());
        assert!(list.items().iter().all(|i| !i.checked));
    }

    #[test]
    fn test_remove_item_preserves_relative_order() {
        let mut list = list_of(&[
            ("Milk", "50", false),
            ("Bread", "20", false),
            ("Eggs", "30", false),
        ]);
        let middle = id_at(&list, 1);

        list.remove_item(&middle).unwrap();

        let names: Vec<&str> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Eggs"]);
        assert_eq!(Totals::from(&list).total_items, 2);
    }

    #[test]
    fn test_remove_unknown_id_is_item_not_found() {
        let mut list = Checklist::new();
        let err = list.remove_item("no-such-id").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(_)));
        assert_eq!(list.items().len(), 1);
    }

    /// Pins the shipped behavior: the master flag is the AND over all
    /// items, which is vacuously true once the last item is removed. The
    /// master checkbox can therefore render checked over an empty list.
    #[test]
    fn test_master_flag_vacuously_true_after_last_remove() {
        let mut list = Checklist::new();
        let starter = id_at(&list, 0);
        list.remove_item(&starter).unwrap();

        assert!(list.is_empty());
        assert!(list.master_checked());

        // Adding now copies the vacuous flag onto the new row
        let added = list.add_item();
        assert!(added.checked);
    }

    #[test]
    fn test_toggle_master_on_empty_list_flips_flag_only() {
        let mut list = Checklist::new();
        let starter = id_at(&list, 0);
        list.remove_item(&starter).unwrap();
        assert!(list.master_checked());

        list.toggle_master();
        assert!(!list.master_checked());
        assert!(list.is_empty());
    }

    #[test]
    fn test_length_matches_totals_across_add_remove_sequences() {
        let mut list = Checklist::new();
        for _ in 0..5 {
            list.add_item();
        }
        assert_eq!(list.items().len(), Totals::from(&list).total_items);

        let victim = id_at(&list, 2);
        list.remove_item(&victim).unwrap();
        assert_eq!(list.items().len(), Totals::from(&list).total_items);
        assert_eq!(list.items().len(), 5);
    }

    #[test]
    fn test_set_fields_keeps_raw_text() {
        let mut list = Checklist::new();
        let id = id_at(&list, 0);

        list.set_name(&id, "Milk").unwrap();
        list.set_price(&id, "50abc").unwrap();

        assert_eq!(list.items()[0].name, "Milk");
        assert_eq!(list.items()[0].price, "50abc");
        assert_eq!(list.items()[0].price_value(), 0.0);
    }
}
