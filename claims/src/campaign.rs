//! Campaign and phase records plus the metrics every view derives from them.
//!
//! DESIGN
//! ======
//! The list card and the detail view both render "percent claimed" and the
//! funding line. They must agree, so the arithmetic lives in exactly one
//! place ([`ClaimMetrics::for_campaign`]) instead of being recomputed inline.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::image::ImageData;

/// Participant cap assumed when a campaign somehow has no phase.
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 100;

/// A priced, capacity-bounded tranche of a campaign's allocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    /// Price of one claim in USDC.
    pub price_per_claim: f64,
    pub max_participants: u32,
    pub tokens_allocated: u64,
}

impl Phase {
    /// An unfilled phase with a fresh id, as the editor starts with.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            price_per_claim: 0.0,
            max_participants: 0,
            tokens_allocated: 0,
        }
    }

    /// Whether the phase satisfies the publish gate (price and cap set).
    #[must_use]
    pub fn is_publishable(&self) -> bool {
        self.price_per_claim > 0.0 && self.max_participants > 0
    }

    /// Whether every numeric field is strictly positive.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_publishable() && self.tokens_allocated > 0
    }
}

/// A published token claim campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub project_name: String,
    pub token_name: String,
    pub token_symbol: String,
    pub description: String,
    pub image: ImageData,
    pub phases: Vec<Phase>,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
    pub creator_address: Option<Address>,
    #[serde(default)]
    pub total_claimed: u64,
}

impl Campaign {
    /// The phase currently open for claims.
    #[must_use]
    pub fn current_phase(&self) -> Option<&Phase> {
        self.phases.first()
    }

    #[must_use]
    pub fn metrics(&self) -> ClaimMetrics {
        ClaimMetrics::for_campaign(self)
    }

    /// Description cut to `max_chars` characters with a trailing ellipsis.
    #[must_use]
    pub fn description_snippet(&self, max_chars: usize) -> String {
        let desc = self.description.trim();
        if desc.chars().count() > max_chars {
            let cut: String = desc.chars().take(max_chars).collect();
            format!("{cut}…")
        } else {
            desc.to_owned()
        }
    }
}

/// Progress figures shown for a campaign's current phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClaimMetrics {
    /// Whole percent in `0..=100`.
    pub percent_claimed: u8,
    pub funding_raised: f64,
    pub funding_target: f64,
}

impl ClaimMetrics {
    #[must_use]
    pub fn for_campaign(campaign: &Campaign) -> Self {
        let phase = campaign.current_phase();
        let max_participants = phase.map_or(DEFAULT_MAX_PARTICIPANTS, |p| p.max_participants);
        let price = phase.map_or(0.0, |p| p.price_per_claim);
        Self::compute(campaign.total_claimed, max_participants, price)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compute(total_claimed: u64, max_participants: u32, price_per_claim: f64) -> Self {
        let percent_claimed = if max_participants > 0 {
            let ratio = total_claimed as f64 / f64::from(max_participants) * 100.0;
            ratio.round().clamp(0.0, 100.0) as u8
        } else {
            0
        };
        Self {
            percent_claimed,
            funding_raised: total_claimed as f64 * price_per_claim,
            funding_target: f64::from(max_participants) * price_per_claim,
        }
    }
}

/// Format a USDC amount with thousands separators and at most two decimals.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_usdc(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match frac {
        0 => format!("{sign}{grouped}"),
        f if f % 10 == 0 => format!("{sign}{grouped}.{}", f / 10),
        f => format!("{sign}{grouped}.{f:02}"),
    }
}
