//! Campaign detail with the hold-to-claim control.

#[cfg(test)]
#[path = "campaign_detail_test.rs"]
mod campaign_detail_test;

use leptos::prelude::*;

use claims::{Campaign, CampaignStore, ClaimError, ClaimMetrics, ClaimOutcome};

use crate::components::campaign_card::token_caption;
use crate::components::hold_button::HoldButton;
use crate::components::progress_bar::ProgressBar;
use crate::state::ui::UiState;

/// Record a completed hold against the store and log the outcome.
///
/// # Errors
///
/// Returns [`ClaimError::UnknownCampaign`] if the campaign vanished.
pub fn commit_claim(store: &mut CampaignStore, campaign_id: &str) -> Result<ClaimOutcome, ClaimError> {
    let outcome = store.record_claim(campaign_id)?;
    if outcome == ClaimOutcome::AlreadyClaimed {
        log::debug!("claim already recorded for {campaign_id}");
    }
    Ok(outcome)
}

fn metrics_or_empty(campaign: Option<&Campaign>) -> ClaimMetrics {
    campaign.map_or_else(|| ClaimMetrics::compute(0, 0, 0.0), Campaign::metrics)
}

#[component]
pub fn CampaignDetail(campaign_id: String) -> impl IntoView {
    let store = expect_context::<RwSignal<CampaignStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let campaign_id = StoredValue::new(campaign_id);

    let campaign = Memo::new(move |_| store.with(|s| campaign_id.with_value(|id| s.get(id).cloned())));
    let claimed = Signal::derive(move || store.with(|s| campaign_id.with_value(|id| s.is_claimed(id))));
    let metrics = Signal::derive(move || campaign.with(|c| metrics_or_empty(c.as_ref())));
    let text = move |f: fn(&Campaign) -> String| campaign.with(|c| c.as_ref().map(f).unwrap_or_default());

    let on_commit = Callback::new(move |()| {
        let id = campaign_id.get_value();
        store.update(|s| {
            if let Err(e) = commit_claim(s, &id) {
                log::warn!("claim not recorded: {e}");
            }
        });
    });

    view! {
        <div class="campaign-detail">
            <button type="button" class="campaign-detail__back" on:click=move |_| ui.update(UiState::close_campaign)>
                "← Back"
            </button>
            <Show
                when=move || campaign.with(Option::is_some)
                fallback=|| view! { <p class="campaign-detail__missing">"Campaign not found."</p> }
            >
                <div class="campaign-detail__hero">
                    {move || {
                        let image = text(|c| c.image.as_str().to_owned());
                        if image.is_empty() {
                            view! { <div class="campaign-detail__image-placeholder"></div> }.into_any()
                        } else {
                            view! { <img class="campaign-detail__image" src=image alt=""/> }.into_any()
                        }
                    }}
                </div>
                <div class="campaign-detail__body">
                    <h1 class="campaign-detail__title">{move || text(|c| c.project_name.clone())}</h1>
                    <p class="campaign-detail__meta">{move || text(token_caption)}</p>
                    {move || {
                        let description = text(|c| c.description.trim().to_owned());
                        (!description.is_empty())
                            .then(|| view! { <p class="campaign-detail__desc">{description}</p> })
                    }}
                    <ProgressBar metrics=metrics/>
                    <HoldButton claimed=claimed on_commit=on_commit/>
                </div>
            </Show>
        </div>
    }
}
