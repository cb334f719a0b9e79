//! In-memory campaign store and the session's claim record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell owns one `CampaignStore` inside a reactive signal. Views read
//! snapshots and mutate only through [`CampaignStore::publish`] and
//! [`CampaignStore::record_claim`]. Nothing is persisted; a reload starts empty.
//!
//! There is one implicit claimant per browser session, so the claim record is
//! a plain set of campaign ids rather than a per-user map.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use crate::address::Address;
use crate::campaign::Campaign;
use crate::draft::{CampaignDraft, DraftIssue};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("draft is incomplete: {0:?}")]
    Incomplete(Vec<DraftIssue>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimError {
    #[error("unknown campaign: {0}")]
    UnknownCampaign(String),
}

/// Result of a successful [`CampaignStore::record_claim`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// First claim; the campaign's counter went up by one.
    Recorded,
    /// Already claimed in this session; nothing changed.
    AlreadyClaimed,
}

/// Where a claim stands relative to its phase filling up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    /// Phase not full yet.
    Pending,
    /// Phase reached its participant cap.
    Allocated,
}

impl ClaimStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Allocated => "allocated",
        }
    }
}

/// The current user's stake in one claimed campaign.
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimPosition {
    pub campaign_id: String,
    pub project_name: String,
    pub token_symbol: String,
    /// Tokens per participant in the current phase.
    pub allocation: u64,
    /// USDC paid for the claim.
    pub invested: f64,
    pub status: ClaimStatus,
}

impl ClaimPosition {
    fn for_campaign(campaign: &Campaign) -> Self {
        let phase = campaign.current_phase();
        let max_participants = phase.map_or(0, |p| p.max_participants);
        let allocation = phase
            .filter(|p| p.max_participants > 0)
            .map_or(0, |p| p.tokens_allocated / u64::from(p.max_participants));
        let status = if max_participants > 0 && campaign.total_claimed >= u64::from(max_participants) {
            ClaimStatus::Allocated
        } else {
            ClaimStatus::Pending
        };
        Self {
            campaign_id: campaign.id.clone(),
            project_name: campaign.project_name.clone(),
            token_symbol: campaign.token_symbol.clone(),
            allocation,
            invested: phase.map_or(0.0, |p| p.price_per_claim),
            status,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignStore {
    campaigns: Vec<Campaign>,
    claimed: HashSet<String>,
}

impl CampaignStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append it as a new campaign.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Incomplete`] with every outstanding issue; the
    /// store is left untouched in that case.
    pub fn publish(
        &mut self,
        draft: &CampaignDraft,
        creator: Option<Address>,
        now_ms: u64,
    ) -> Result<Campaign, PublishError> {
        let issues = draft.validate();
        if !issues.is_empty() {
            log::warn!("publish rejected: {} issue(s)", issues.len());
            return Err(PublishError::Incomplete(issues));
        }

        let campaign = Campaign {
            id: uuid::Uuid::new_v4().to_string(),
            project_name: draft.project_name.trim().to_owned(),
            token_name: draft.token_name.trim().to_owned(),
            token_symbol: draft.token_symbol.trim().to_owned(),
            description: draft.description.trim().to_owned(),
            image: draft.image.clone().unwrap_or_default(),
            phases: draft.phases.clone(),
            created_at: now_ms,
            creator_address: creator,
            total_claimed: 0,
        };
        log::info!("campaign published id={} symbol={}", campaign.id, campaign.token_symbol);
        self.campaigns.push(campaign.clone());
        Ok(campaign)
    }

    /// Record the session's claim on a campaign. Idempotent per campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::UnknownCampaign`] if no campaign has that id.
    pub fn record_claim(&mut self, campaign_id: &str) -> Result<ClaimOutcome, ClaimError> {
        let campaign = self
            .campaigns
            .iter_mut()
            .find(|c| c.id == campaign_id)
            .ok_or_else(|| ClaimError::UnknownCampaign(campaign_id.to_owned()))?;

        if !self.claimed.insert(campaign_id.to_owned()) {
            return Ok(ClaimOutcome::AlreadyClaimed);
        }
        campaign.total_claimed += 1;
        log::info!("claim recorded id={} total={}", campaign.id, campaign.total_claimed);
        Ok(ClaimOutcome::Recorded)
    }

    /// All campaigns in publish order.
    #[must_use]
    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    /// Campaigns with the most recently published first, as Explore lists them.
    pub fn newest_first(&self) -> impl Iterator<Item = &Campaign> {
        self.campaigns.iter().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    #[must_use]
    pub fn get(&self, campaign_id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == campaign_id)
    }

    #[must_use]
    pub fn is_claimed(&self, campaign_id: &str) -> bool {
        self.claimed.contains(campaign_id)
    }

    /// Campaigns published by `creator`.
    pub fn created_by<'a>(&'a self, creator: &'a Address) -> impl Iterator<Item = &'a Campaign> + 'a {
        self.campaigns
            .iter()
            .filter(move |c| c.creator_address.as_ref() == Some(creator))
    }

    /// Positions for every campaign claimed this session, in publish order.
    #[must_use]
    pub fn claimed(&self) -> Vec<ClaimPosition> {
        self.campaigns
            .iter()
            .filter(|c| self.claimed.contains(&c.id))
            .map(ClaimPosition::for_campaign)
            .collect()
    }
}
