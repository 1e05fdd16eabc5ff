//! # Totals
//!
//! Derived counts and sums over a checklist.
//!
//! Totals are recomputed wholesale from the current checklist for every
//! command response rather than maintained incrementally. The list is
//! bounded by manual entry (tens of rows), so the O(n) rescan is the
//! simplest correct choice at this scale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::list::Checklist;

// =============================================================================
// Totals
// =============================================================================

/// Summary values displayed above the list.
///
/// ## Display Note
/// Sums are carried as numbers; the shell formats them (0 decimal places
/// on screen, 2 on the receipt total line — an intentional asymmetry
/// preserved from the original design).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Totals {
    /// Count of all items.
    pub total_items: usize,

    /// Count of checked items.
    pub checked_items: usize,

    /// Sum of parsed prices over all items.
    pub total_sum: f64,

    /// Sum of parsed prices over checked items only.
    pub checked_sum: f64,
}

impl From<&Checklist> for Totals {
    fn from(list: &Checklist) -> Self {
        let items = list.items();
        Totals {
            total_items: items.len(),
            checked_items: items.iter().filter(|i| i.checked).count(),
            total_sum: items.iter().map(|i| i.price_value()).sum(),
            checked_sum: items
                .iter()
                .filter(|i| i.checked)
                .map(|i| i.price_value())
                .sum(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Starter row becomes Milk (checked), Bread is added unchecked.
    /// Milk is toggled last: toggling it earlier would flip the master
    /// flag on a one-item list and the Bread row would copy it.
    fn milk_and_bread() -> Checklist {
        let mut list = Checklist::new();
        let milk = list.items()[0].id.clone();
        list.set_name(&milk, "Milk").unwrap();
        list.set_price(&milk, "50").unwrap();

        let bread = list.add_item().id.clone();
        list.set_name(&bread, "Bread").unwrap();
        list.set_price(&bread, "20").unwrap();

        list.toggle_item(&milk).unwrap();
        list
    }

    #[test]
    fn test_scenario_milk_checked_bread_unchecked() {
        let totals = Totals::from(&milk_and_bread());
        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.checked_items, 1);
        assert_eq!(totals.total_sum, 70.0);
        assert_eq!(totals.checked_sum, 50.0);
    }

    #[test]
    fn test_unparseable_prices_count_as_zero() {
        let mut list = milk_and_bread();
        let id = list.add_item().id.clone();
        list.set_price(&id, "around 30").unwrap();

        let totals = Totals::from(&list);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_sum, 70.0);
    }

    #[test]
    fn test_checked_sum_bounded_by_total_sum() {
        let mut list = milk_and_bread();
        let totals = Totals::from(&list);
        assert!(totals.checked_sum <= totals.total_sum);

        list.toggle_master();
        let totals = Totals::from(&list);
        assert_eq!(totals.checked_sum, totals.total_sum);
    }

    #[test]
    fn test_empty_list_totals() {
        let mut list = Checklist::new();
        let starter = list.items()[0].id.clone();
        list.remove_item(&starter).unwrap();

        let totals = Totals::from(&list);
        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.checked_items, 0);
        assert_eq!(totals.total_sum, 0.0);
        assert_eq!(totals.checked_sum, 0.0);
    }
}
