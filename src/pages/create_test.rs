use claims::{Address, ImageData};

use super::*;

fn filled() -> CreateState {
    let mut state = CreateState::default();
    state.draft.project_name = "Harbor".to_owned();
    state.draft.token_name = "Harbor Token".to_owned();
    state.draft.set_token_symbol("hbr");
    state.draft.description = "Dockside rewards".to_owned();
    state.draft.apply_image(ImageData::from_upload("image/jpeg", b"jpg"));
    state.draft.update_phase(0, |p| {
        p.price_per_claim = 2.0;
        p.max_participants = 50;
    });
    state
}

#[test]
fn or_dash_fills_blank_preview_fields() {
    assert_eq!(or_dash("   "), "—");
    assert_eq!(or_dash(" Harbor "), "Harbor");
}

#[test]
fn submit_records_creator() {
    let creator = Address::parse("0x00000000000000000000000000000000000000aa").unwrap();
    let mut store = CampaignStore::new();
    let mut state = filled();

    assert!(submit(&mut state, &mut store, Some(creator), 10));

    assert!(state.published);
    assert_eq!(store.created_by(&creator).count(), 1);
}

#[test]
fn submit_incomplete_draft_leaves_store_unchanged() {
    let mut store = CampaignStore::new();
    let mut state = filled();
    state.draft.description.clear();

    assert!(!submit(&mut state, &mut store, None, 10));

    assert!(store.is_empty());
    assert!(!state.published);
    assert!(state.draft.touched);
    assert!(state.draft.highlighted(DraftIssue::Description));
}
