//! Profile tab: connected address, created campaigns, claims, sign out.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use claims::campaign::format_usdc;
use claims::fees::{FeeQuery, NoFeeData, fee_label};
use claims::{Address, Campaign, CampaignStore, ClaimPosition};

use crate::components::progress_bar::ProgressBar;
use crate::state::auth::AuthState;
use crate::state::create::CreateState;
use crate::state::ui::UiState;

/// Status badge for a campaign the user created.
pub fn campaign_status(campaign: &Campaign) -> &'static str {
    if campaign.metrics().percent_claimed >= 100 { "filled" } else { "active" }
}

/// A created campaign as the profile lists it.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatedRow {
    pub campaign: Campaign,
    pub status: &'static str,
    pub fees: String,
}

pub fn created_rows(store: &CampaignStore, creator: &Address, fees: &dyn FeeQuery) -> Vec<CreatedRow> {
    store
        .created_by(creator)
        .map(|campaign| CreatedRow {
            campaign: campaign.clone(),
            status: campaign_status(campaign),
            fees: fee_label(fees, campaign),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
pub fn allocation_caption(position: &ClaimPosition) -> String {
    format!("{} tokens", format_usdc(position.allocation as f64))
}

pub fn invested_caption(position: &ClaimPosition) -> String {
    format!("${} USDC", format_usdc(position.invested))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<RwSignal<CampaignStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let create = expect_context::<RwSignal<CreateState>>();

    let address = move || auth.with(|a| a.user.as_ref().map(|u| u.address));
    let created = move || {
        address().map_or_else(Vec::new, |creator| store.with(|s| created_rows(s, &creator, &NoFeeData)))
    };
    let claims = move || store.with(CampaignStore::claimed);

    let on_sign_out = move |_| {
        if let Some(user) = auth.try_update(AuthState::sign_out).flatten() {
            log::info!("signed out address={}", user.address);
        }
        ui.set(UiState::default());
        create.update(CreateState::reset);
    };

    view! {
        <div class="profile">
            <h2>"My Profile"</h2>
            <div class="profile__address-row">
                <span class="profile__address-label">"Connected"</span>
                <span class="profile__address">{move || address().map(|a| a.short()).unwrap_or_default()}</span>
            </div>

            <section class="profile__section">
                <h3>"Campaigns Created"</h3>
                {move || {
                    let rows = created();
                    if rows.is_empty() {
                        return view! { <div class="profile__empty">"No campaigns created yet"</div> }.into_any();
                    }
                    view! {
                        <div class="profile__list">
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let metrics = row.campaign.metrics();
                                    view! {
                                        <div class="profile-card">
                                            <div class="profile-card__header">
                                                <div>
                                                    <div class="profile-card__name">{row.campaign.project_name}</div>
                                                    <div class="profile-card__symbol">{row.campaign.token_symbol}</div>
                                                </div>
                                                <span class=format!("status-badge status-badge--{}", row.status)>
                                                    {row.status}
                                                </span>
                                            </div>
                                            <ProgressBar metrics=Signal::stored(metrics)/>
                                            <div class="profile-card__detail">
                                                <span class="profile-card__label">"Fees earned:"</span>
                                                <span class="profile-card__value">{row.fees}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </section>

            <section class="profile__section">
                <h3>"My Claims"</h3>
                {move || {
                    let positions = claims();
                    if positions.is_empty() {
                        return view! { <div class="profile__empty">"No active claims"</div> }.into_any();
                    }
                    view! {
                        <div class="profile__list">
                            {positions
                                .into_iter()
                                .map(|position| {
                                    let allocation = allocation_caption(&position);
                                    let invested = invested_caption(&position);
                                    let status = position.status.label();
                                    view! {
                                        <div class="profile-card">
                                            <div class="profile-card__header">
                                                <div>
                                                    <div class="profile-card__name">{position.project_name}</div>
                                                    <div class="profile-card__symbol">{position.token_symbol}</div>
                                                </div>
                                                <span class=format!("status-badge status-badge--{status}")>{status}</span>
                                            </div>
                                            <div class="profile-card__detail">
                                                <span class="profile-card__label">"Allocation:"</span>
                                                <span class="profile-card__value">{allocation}</span>
                                            </div>
                                            <div class="profile-card__detail">
                                                <span class="profile-card__label">"Invested:"</span>
                                                <span class="profile-card__value">{invested}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </section>

            <div class="profile__sign-out">
                <button type="button" class="profile__sign-out-button" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
