//! Explore tab: live campaigns, newest first.
//!
//! Opening a card swaps the list for the campaign detail view in place.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use leptos::prelude::*;

use claims::{Campaign, CampaignStore};

use crate::components::campaign_card::CampaignCard;
use crate::pages::campaign_detail::CampaignDetail;
use crate::state::ui::UiState;

pub fn live_count_label(count: usize) -> String {
    format!("{count} campaign(s) live")
}

/// Campaigns in display order.
pub fn listing(store: &CampaignStore) -> Vec<Campaign> {
    store.newest_first().cloned().collect()
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let store = expect_context::<RwSignal<CampaignStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_open = Callback::new(move |id: String| ui.update(|u| u.open_campaign(id)));
    let open_campaign = move || ui.with(|u| u.open_campaign.clone());

    view! {
        {move || match open_campaign() {
            Some(id) => view! { <CampaignDetail campaign_id=id/> }.into_any(),
            None => {
                view! {
                    <div class="explore">
                        <h2>"Explore Tokens"</h2>
                        <p class="explore__subtitle">"Browse active claim campaigns"</p>
                        {move || {
                            let count = store.with(CampaignStore::len);
                            if count == 0 {
                                view! {
                                    <p class="explore__empty">"No campaigns yet. Publish one from Create Token."</p>
                                }
                                    .into_any()
                            } else {
                                view! { <p class="explore__count">{live_count_label(count)}</p> }.into_any()
                            }
                        }}
                        <div class="explore__list">
                            {move || {
                                store
                                    .with(listing)
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, campaign)| {
                                        view! { <CampaignCard campaign=campaign index=index on_open=on_open/> }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
