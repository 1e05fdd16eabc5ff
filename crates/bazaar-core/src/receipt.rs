//! # Receipt
//!
//! Renders the checked subset of a checklist into the plain-text receipt
//! handed to the share sheet.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  No.        *Item*                      *Price*                     │
//! │  ----------------------------------------------                     │
//! │  1.        Milk                          | Rs. 50                   │
//! │  ----------------------------------------------                     │
//! │  2.        Eggs                          | Rs. 30                   │
//! │  ----------------------------------------------                     │
//! │                                                                     │
//! │  Total: Rs. 80.00                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! - Only checked items appear, in list order.
//! - Serial numbers run 1..k over the checked items, independent of each
//!   item's position among unchecked neighbours.
//! - The name column is space-padded to 25; longer names overflow it
//!   without truncation.
//! - Row prices are the stored text verbatim. Only the total line is a
//!   computed sum, formatted to exactly two decimals; unparseable prices
//!   contribute 0 to it.
//! - A separator follows EVERY item row, then one blank line before the
//!   total.

use crate::price;
use crate::types::Item;
use crate::RECEIPT_NAME_WIDTH;

const HEADER: &str = "No.        *Item*                      *Price*\n";
const SEPARATOR: &str = "----------------------------------------------\n";

// =============================================================================
// Rendering
// =============================================================================

/// Renders the share text for the checked items of a list.
///
/// ## Arguments
/// * `items` - the full list in order; unchecked items are skipped here
/// * `currency_label` - label printed before each amount (default `Rs.`)
///
/// ## Returns
/// The complete share payload. With zero checked items it still carries
/// the header, the blank line, and a `0.00` total.
pub fn render(items: &[Item], currency_label: &str) -> String {
    let mut out = String::from(HEADER);
    out.push_str(SEPARATOR);

    let mut total = 0.0;
    let mut serial = 1;

    for item in items.iter().filter(|i| i.checked) {
        total += item.price_value();
        out.push_str(&format!(
            "{}.        {:<width$}      | {} {}\n",
            serial,
            item.name,
            currency_label,
            item.price,
            width = RECEIPT_NAME_WIDTH,
        ));
        out.push_str(SEPARATOR);
        serial += 1;
    }

    out.push('\n');
    out.push_str(&format!(
        "Total: {} {}\n",
        currency_label,
        price::format_amount(total, 2)
    ));

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CURRENCY_LABEL;

    fn item(name: &str, price: &str, checked: bool) -> Item {
        let mut item = Item::blank(checked);
        item.name = name.to_string();
        item.price = price.to_string();
        item
    }

    #[test]
    fn test_single_checked_item_full_payload() {
        let items = vec![item("Milk", "50", true), item("Bread", "20", false)];

        let expected = concat!(
            "No.        *Item*                      *Price*\n",
            "----------------------------------------------\n",
            "1.        Milk                           | Rs. 50\n",
            "----------------------------------------------\n",
            "\n",
            "Total: Rs. 50.00\n",
        );

        assert_eq!(render(&items, CURRENCY_LABEL), expected);
    }

    #[test]
    fn test_zero_checked_items_yields_header_and_zero_total() {
        let items = vec![item("Milk", "50", false)];

        let expected = concat!(
            "No.        *Item*                      *Price*\n",
            "----------------------------------------------\n",
            "\n",
            "Total: Rs. 0.00\n",
        );

        assert_eq!(render(&items, CURRENCY_LABEL), expected);
    }

    #[test]
    fn test_serials_run_over_checked_items_only() {
        let items = vec![
            item("Milk", "50", true),
            item("Bread", "20", false),
            item("Eggs", "30", true),
        ];

        let text = render(&items, CURRENCY_LABEL);
        assert!(text.contains("1.        Milk"));
        assert!(text.contains("2.        Eggs"));
        assert!(!text.contains("Bread"));
        assert!(text.contains("Total: Rs. 80.00"));
    }

    #[test]
    fn test_row_price_text_is_verbatim() {
        // "020" and "12.5" print as stored; only the total is reformatted
        let items = vec![item("Rice", "020", true), item("Tea", "12.5", true)];

        let text = render(&items, CURRENCY_LABEL);
        assert!(text.contains("| Rs. 020\n"));
        assert!(text.contains("| Rs. 12.5\n"));
        assert!(text.contains("Total: Rs. 32.50"));
    }

    #[test]
    fn test_long_names_overflow_the_column() {
        let long = "Extra Long Product Name That Overflows";
        let items = vec![item(long, "5", true)];

        let text = render(&items, CURRENCY_LABEL);
        assert!(text.contains(&format!("1.        {}      | Rs. 5\n", long)));
    }

    #[test]
    fn test_checked_item_with_empty_price_counts_zero() {
        let items = vec![item("Milk", "", true), item("Eggs", "30", true)];

        let text = render(&items, CURRENCY_LABEL);
        assert!(text.contains("| Rs. \n"));
        assert!(text.contains("Total: Rs. 30.00"));
    }

    #[test]
    fn test_separator_follows_every_row() {
        let items = vec![item("Milk", "50", true), item("Eggs", "30", true)];

        let text = render(&items, CURRENCY_LABEL);
        let separators = text.matches(SEPARATOR.trim_end()).count();
        // One after the header plus one per row
        assert_eq!(separators, 3);
    }
}
