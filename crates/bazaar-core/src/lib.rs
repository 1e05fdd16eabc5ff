//! # bazaar-core: Pure Business Logic for Bazaar List
//!
//! This crate is the heart of Bazaar List. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Bazaar List Architecture                       │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    Frontend (webview)                         │ │
//! │  │    Item rows ──► Summary labels ──► Share sheet               │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │ Tauri IPC                          │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                    Tauri Commands                             │ │
//! │  │    add_item, toggle_item, toggle_all, share_list, etc.        │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ bazaar-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │   ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐ ┌─────────┐   │ │
//! │  │   │ types  │ │ price  │ │  list  │ │ totals │ │ receipt │   │ │
//! │  │   │  Item  │ │ parse  │ │ Check- │ │ Totals │ │  share  │   │ │
//! │  │   │        │ │ format │ │  list  │ │        │ │  text   │   │ │
//! │  │   └────────┘ └────────┘ └────────┘ └────────┘ └─────────┘   │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Item` entity
//! - [`price`] - Price-text parsing and amount formatting
//! - [`list`] - The `Checklist` aggregate and its state transitions
//! - [`totals`] - Derived counts and sums
//! - [`receipt`] - Fixed-width share text for checked items
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic apart from id minting
//! 2. **No I/O**: File system, network, and webview access is FORBIDDEN here
//! 3. **Raw Price Text**: Prices stay as entered; parsing happens on demand
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::{Checklist, Totals};
//!
//! let mut list = Checklist::new();
//! let id = list.items()[0].id.clone();
//! list.set_name(&id, "Milk").unwrap();
//! list.set_price(&id, "50").unwrap();
//! list.toggle_item(&id).unwrap();
//!
//! let totals = Totals::from(&list);
//! assert_eq!(totals.checked_items, 1);
//! assert_eq!(totals.checked_sum, 50.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod list;
pub mod price;
pub mod receipt;
pub mod totals;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Checklist` instead of
// `use bazaar_core::list::Checklist`

pub use error::{CoreError, CoreResult};
pub use list::Checklist;
pub use totals::Totals;
pub use types::Item;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency label shown before every amount.
///
/// The app is single-currency: this label is fixed configuration, not a
/// localization surface. The desktop shell may override it via environment
/// configuration for display, the share receipt uses whatever label it is
/// handed.
pub const CURRENCY_LABEL: &str = "Rs.";

/// Width of the name column in the share receipt.
///
/// Names shorter than this are space-padded, longer names overflow the
/// column without truncation.
pub const RECEIPT_NAME_WIDTH: usize = 25;
