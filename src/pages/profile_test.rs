use claims::{CampaignDraft, ClaimStatus, ImageData, Phase};

use super::*;

struct FixedFees(f64);

impl FeeQuery for FixedFees {
    fn fees_earned(&self, _campaign: &Campaign) -> Option<f64> {
        Some(self.0)
    }
}

fn creator() -> Address {
    Address::parse("0x1234567890abcdef1234567890abcdef12345678").unwrap()
}

fn draft(max_participants: u32) -> CampaignDraft {
    CampaignDraft {
        project_name: "Harbor".to_owned(),
        token_name: "Harbor Token".to_owned(),
        token_symbol: "HBR".to_owned(),
        description: "Dockside rewards".to_owned(),
        image: Some(ImageData::from_upload("image/png", b"png").unwrap()),
        phases: vec![Phase {
            price_per_claim: 2.5,
            max_participants,
            tokens_allocated: 5_000,
            ..Phase::empty()
        }],
        ..CampaignDraft::default()
    }
}

// =============================================================================
// created campaigns
// =============================================================================

#[test]
fn only_own_campaigns_are_listed() {
    let mut store = CampaignStore::new();
    store.publish(&draft(10), Some(creator()), 1).unwrap();
    store.publish(&draft(10), None, 2).unwrap();

    let rows = created_rows(&store, &creator(), &NoFeeData);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, "active");
    assert_eq!(rows[0].fees, "—");
}

#[test]
fn fee_source_figure_is_shown() {
    let mut store = CampaignStore::new();
    store.publish(&draft(10), Some(creator()), 1).unwrap();

    let rows = created_rows(&store, &creator(), &FixedFees(1234.5));

    assert_eq!(rows[0].fees, "$1,234.5 USDC");
}

#[test]
fn full_campaign_is_filled() {
    let mut store = CampaignStore::new();
    let id = store.publish(&draft(1), Some(creator()), 1).unwrap().id;
    store.record_claim(&id).unwrap();

    assert_eq!(campaign_status(store.get(&id).unwrap()), "filled");
}

// =============================================================================
// claims
// =============================================================================

#[test]
fn claim_captions_show_allocation_and_investment() {
    let mut store = CampaignStore::new();
    let id = store.publish(&draft(2), None, 1).unwrap().id;
    store.record_claim(&id).unwrap();

    let positions = store.claimed();
    assert_eq!(positions.len(), 1);
    assert_eq!(allocation_caption(&positions[0]), "2,500 tokens");
    assert_eq!(invested_caption(&positions[0]), "$2.5 USDC");
    assert_eq!(positions[0].status, ClaimStatus::Pending);
}
