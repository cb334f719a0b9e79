use super::*;
use crate::test_support::{sample_image, valid_draft};

// =============================================================
// validate / is_publishable
// =============================================================

#[test]
fn default_draft_lists_every_issue() {
    let draft = CampaignDraft::default();
    assert_eq!(
        draft.validate(),
        vec![
            DraftIssue::ProjectName,
            DraftIssue::TokenName,
            DraftIssue::TokenSymbol,
            DraftIssue::Description,
            DraftIssue::Image,
            DraftIssue::PhasePrice(0),
            DraftIssue::PhaseParticipants(0),
        ]
    );
    assert!(!draft.is_publishable());
}

#[test]
fn valid_draft_is_publishable() {
    assert!(valid_draft().is_publishable());
}

#[test]
fn whitespace_only_text_counts_as_empty() {
    let mut draft = valid_draft();
    draft.description = "   ".to_owned();
    assert_eq!(draft.validate(), vec![DraftIssue::Description]);
}

#[test]
fn every_phase_is_checked() {
    let mut draft = valid_draft();
    draft.add_phase();
    draft.update_phase(1, |p| p.max_participants = 10);
    assert_eq!(draft.validate(), vec![DraftIssue::PhasePrice(1)]);
}

#[test]
fn tokens_allocated_does_not_gate_publish() {
    let mut draft = valid_draft();
    draft.update_phase(0, |p| p.tokens_allocated = 0);
    assert!(draft.is_publishable());
}

// =============================================================
// touched-gated highlighting
// =============================================================

#[test]
fn issues_are_not_highlighted_until_touched() {
    let mut draft = CampaignDraft::default();
    assert!(!draft.highlighted(DraftIssue::ProjectName));
    assert!(!draft.phase_invalid(0));

    draft.touched = true;
    assert!(draft.highlighted(DraftIssue::ProjectName));
    assert!(draft.phase_invalid(0));
}

#[test]
fn phase_invalid_requires_tokens_allocated() {
    let mut draft = valid_draft();
    draft.touched = true;
    assert!(!draft.phase_invalid(0));
    draft.update_phase(0, |p| p.tokens_allocated = 0);
    assert!(draft.phase_invalid(0));
}

// =============================================================
// field edits
// =============================================================

#[test]
fn token_symbol_is_uppercased() {
    let mut draft = CampaignDraft::default();
    draft.set_token_symbol("mtk");
    assert_eq!(draft.token_symbol, "MTK");
}

#[test]
fn rejected_upload_keeps_previous_image_and_fields() {
    let mut draft = valid_draft();
    let before = draft.clone();
    draft.apply_image(Err(ImageError::UnsupportedType("image/gif".to_owned())));

    assert_eq!(draft.image, before.image);
    assert_eq!(draft.project_name, before.project_name);
    assert_eq!(draft.image_error, Some(ImageError::UnsupportedType("image/gif".to_owned())));
}

#[test]
fn accepted_upload_clears_previous_error() {
    let mut draft = CampaignDraft::default();
    draft.apply_image(Err(ImageError::Unreadable("boom".to_owned())));
    draft.apply_image(Ok(sample_image()));
    assert!(draft.image.is_some());
    assert!(draft.image_error.is_none());
}

#[test]
fn last_phase_cannot_be_removed() {
    let mut draft = CampaignDraft::default();
    assert!(!draft.can_remove_phase());
    assert!(!draft.remove_phase(0));

    draft.add_phase();
    assert!(draft.can_remove_phase());
    assert!(draft.remove_phase(0));
    assert_eq!(draft.phases.len(), 1);
    assert!(!draft.remove_phase(5));
}

#[test]
fn reset_restores_defaults() {
    let mut draft = valid_draft();
    draft.touched = true;
    draft.reset();
    assert_eq!(draft.project_name, "");
    assert!(!draft.touched);
    assert_eq!(draft.phases.len(), 1);
}

// =============================================================
// numeric inputs
// =============================================================

#[test]
fn parse_amount_treats_garbage_as_zero() {
    assert_eq!(parse_amount("2.5"), 2.5);
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("abc"), 0.0);
    assert_eq!(parse_amount("inf"), 0.0);
}

#[test]
fn parse_count_treats_negative_as_zero() {
    assert_eq!(parse_count::<u32>("42"), 42);
    assert_eq!(parse_count::<u32>("-3"), 0);
    assert_eq!(parse_count::<u64>("1.5"), 0);
}
