//! # Price Module
//!
//! Parsing and display formatting for price text.
//!
//! ## Parsing Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Price fields are free-text inputs. The raw text is the source of   │
//! │  truth: it is what the user edits and what the receipt prints.      │
//! │                                                                     │
//! │    "50"      ──► 50.0                                               │
//! │    " 12.5 "  ──► 12.5      (surrounding whitespace ignored)         │
//! │    ""        ──► 0.0                                                │
//! │    "abc"     ──► 0.0                                                │
//! │    "inf"     ──► 0.0       (non-finite input counts as nothing)     │
//! │                                                                     │
//! │  Parsing NEVER fails and NEVER rewrites the stored text.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Parsing
// =============================================================================

/// Parses price text into an amount.
///
/// ## Behavior
/// - Surrounding whitespace is ignored
/// - Empty or unparseable text counts as 0
/// - Non-finite results (`inf`, `NaN`) count as 0, keeping sums finite
///
/// ## Example
/// ```rust
/// use bazaar_core::price::parse;
///
/// assert_eq!(parse("50"), 50.0);
/// assert_eq!(parse("12.50"), 12.5);
/// assert_eq!(parse(""), 0.0);
/// assert_eq!(parse("two"), 0.0);
/// ```
pub fn parse(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount with a fixed number of decimal places.
///
/// Used for the on-screen summary labels (0 decimals) and the receipt
/// total line (2 decimals). The per-row receipt price is NOT formatted
/// with this: rows print the stored text verbatim.
///
/// ## Example
/// ```rust
/// use bazaar_core::price::format_amount;
///
/// assert_eq!(format_amount(70.0, 0), "70");
/// assert_eq!(format_amount(50.0, 2), "50.00");
/// assert_eq!(format_amount(32.5, 2), "32.50");
/// ```
pub fn format_amount(amount: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
