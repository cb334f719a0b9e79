//! Creator fee lookup.
//!
//! Fee income is accrued on-chain, which this app does not read yet. Views
//! ask a [`FeeQuery`] and render a placeholder when it has no figure.

#[cfg(test)]
#[path = "fees_test.rs"]
mod fees_test;

use crate::campaign::{Campaign, format_usdc};

/// Source of accrued creator fees per campaign.
pub trait FeeQuery {
    /// Fees earned in USDC, or `None` when no data is available.
    fn fees_earned(&self, campaign: &Campaign) -> Option<f64>;
}

/// Fee source used until a real backend is wired in.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeeData;

impl FeeQuery for NoFeeData {
    fn fees_earned(&self, _campaign: &Campaign) -> Option<f64> {
        None
    }
}

/// Render a fee figure for a profile row.
#[must_use]
pub fn fee_label(fees: &dyn FeeQuery, campaign: &Campaign) -> String {
    fees.fees_earned(campaign)
        .map_or_else(|| "—".to_owned(), |amount| format!("${} USDC", format_usdc(amount)))
}
