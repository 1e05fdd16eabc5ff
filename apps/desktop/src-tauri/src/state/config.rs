//! # Configuration State
//!
//! Display constants loaded once at startup.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use bazaar_core::{price, CURRENCY_LABEL};
use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// The app is single-currency and single-screen; these are fixed display
/// constants with environment overrides for development, not a settings
/// surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency label printed before every amount (summary labels and the
    /// share receipt alike).
    pub currency_label: String,

    /// Decimal places for the on-screen summary sums.
    ///
    /// The summary labels show whole amounts while the receipt total keeps
    /// two decimals; the asymmetry is intentional.
    pub summary_decimals: u8,
}

impl Default for ConfigState {
    /// Returns the fixed defaults: `Rs.` label, whole-number summaries.
    fn default() -> Self {
        ConfigState {
            currency_label: CURRENCY_LABEL.to_string(),
            summary_decimals: 0,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BAZAAR_CURRENCY_LABEL`: Override the currency label
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(label) = std::env::var("BAZAAR_CURRENCY_LABEL") {
            config.currency_label = label;
        }

        config
    }

    /// Formats a sum for the on-screen summary labels.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_summary(70.0), "Rs. 70");
    /// ```
    pub fn format_summary(&self, amount: f64) -> String {
        format!(
            "{} {}",
            self.currency_label,
            price::format_amount(amount, self.summary_decimals as usize)
        )
    }
}
