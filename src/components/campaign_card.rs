//! Explore list card for one campaign.

#[cfg(test)]
#[path = "campaign_card_test.rs"]
mod campaign_card_test;

use leptos::prelude::*;

use claims::Campaign;

use crate::components::progress_bar::ProgressBar;

/// Longest description shown on a card before it is cut.
pub const SNIPPET_CHARS: usize = 60;

/// `"Token Name (SYM)"`.
pub fn token_caption(campaign: &Campaign) -> String {
    format!("{} ({})", campaign.token_name, campaign.token_symbol)
}

/// Staggered entrance animation per list position.
pub fn animation_delay(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let seconds = index as f64 * 0.06;
    format!("animation-delay: {seconds:.2}s")
}

/// A clickable card; activating it opens the campaign detail.
#[component]
pub fn CampaignCard(campaign: Campaign, index: usize, on_open: Callback<String>) -> impl IntoView {
    let snippet = campaign.description_snippet(SNIPPET_CHARS);
    let caption = token_caption(&campaign);
    let metrics = campaign.metrics();
    let image = campaign.image.clone();
    let open = {
        let id = campaign.id.clone();
        move || on_open.run(id.clone())
    };
    let open_on_key = open.clone();

    view! {
        <article
            class="campaign-card"
            role="button"
            tabindex="0"
            style=animation_delay(index)
            on:click=move |_| open()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    open_on_key();
                }
            }
        >
            <div class="campaign-card__top">
                <div class="campaign-card__image-wrap">
                    {if image.is_empty() {
                        view! { <div class="campaign-card__image-placeholder"></div> }.into_any()
                    } else {
                        view! { <img class="campaign-card__image" src=image.as_str().to_owned() alt=""/> }
                            .into_any()
                    }}
                </div>
                <div class="campaign-card__body">
                    <h3 class="campaign-card__title">{campaign.project_name.clone()}</h3>
                    <p class="campaign-card__meta">{caption}</p>
                    {(!snippet.is_empty()).then(|| view! { <p class="campaign-card__desc">{snippet}</p> })}
                </div>
            </div>
            <ProgressBar metrics=Signal::stored(metrics)/>
        </article>
    }
}
