use super::*;
use claims::{DraftIssue, ImageData};

fn filled_state() -> CreateState {
    let mut state = CreateState::default();
    let draft = &mut state.draft;
    draft.project_name = "Project".to_owned();
    draft.token_name = "Token".to_owned();
    draft.set_token_symbol("tkn");
    draft.description = "About".to_owned();
    draft.apply_image(ImageData::from_upload("image/png", b"png"));
    draft.update_phase(0, |p| {
        p.price_per_claim = 1.5;
        p.max_participants = 10;
        p.tokens_allocated = 1_000;
    });
    state
}

#[test]
fn publish_success_shows_success_panel() {
    let mut store = CampaignStore::new();
    let mut state = filled_state();
    state.show_preview = true;

    let campaign = state.publish(&mut store, None, 7).unwrap();

    assert!(state.published);
    assert!(!state.show_preview);
    assert_eq!(campaign.token_symbol, "TKN");
    assert_eq!(store.len(), 1);
}

#[test]
fn publish_failure_marks_touched_and_keeps_draft() {
    let mut store = CampaignStore::new();
    let mut state = filled_state();
    state.draft.project_name.clear();

    let err = state.publish(&mut store, None, 7).unwrap_err();

    assert_eq!(err, PublishError::Incomplete(vec![DraftIssue::ProjectName]));
    assert!(state.draft.touched);
    assert!(!state.published);
    assert_eq!(state.draft.token_name, "Token");
    assert!(store.is_empty());
}

#[test]
fn reset_returns_to_empty_form() {
    let mut store = CampaignStore::new();
    let mut state = filled_state();
    state.publish(&mut store, None, 7).unwrap();
    state.reset();
    assert!(!state.published);
    assert!(!state.draft.touched);
    assert!(state.draft.project_name.is_empty());
    assert!(state.draft.image.is_none());
    assert_eq!(state.draft.phases.len(), 1);
}
