//! Claim progress bar with the percent and funding captions.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

use claims::ClaimMetrics;
use claims::campaign::format_usdc;

/// `"$50 / $200 USDC"`.
pub fn funding_caption(metrics: &ClaimMetrics) -> String {
    format!(
        "${} / ${} USDC",
        format_usdc(metrics.funding_raised),
        format_usdc(metrics.funding_target)
    )
}

#[component]
pub fn ProgressBar(#[prop(into)] metrics: Signal<ClaimMetrics>) -> impl IntoView {
    view! {
        <div class="claim-progress">
            <div class="claim-progress__bar">
                <div
                    class="claim-progress__fill"
                    style:width=move || format!("{}%", metrics.get().percent_claimed)
                ></div>
            </div>
            <div class="claim-progress__labels">
                <span class="claim-progress__percent">
                    {move || format!("{}% claimed", metrics.get().percent_claimed)}
                </span>
                <span class="claim-progress__funding">{move || funding_caption(&metrics.get())}</span>
            </div>
        </div>
    }
}
