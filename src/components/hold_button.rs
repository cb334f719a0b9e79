//! Hold-to-claim button.
//!
//! Pointer-down starts a [`HoldController`]; pointer-up, pointer-leave and
//! pointer-cancel all release it. Progress drives the liquid fill through the
//! `--hold` CSS custom property (0 to 100).

#[cfg(test)]
#[path = "hold_button_test.rs"]
mod hold_button_test;

use std::rc::Rc;

use leptos::prelude::*;

use claims::{ClaimGesture, HoldController, SystemClock};

use crate::util::scheduler::BrowserScheduler;

/// Label under the fill for a given progress percentage.
pub fn hold_caption(progress: f64) -> &'static str {
    if progress >= 100.0 {
        "Claimed!"
    } else if progress > 0.0 {
        "Keep holding…"
    } else {
        "Hold To Claim"
    }
}

/// Inline style carrying the fill level.
pub fn hold_style(progress: f64) -> String {
    format!("--hold: {:.1}", progress.clamp(0.0, 100.0))
}

#[component]
pub fn HoldButton(#[prop(into)] claimed: Signal<bool>, on_commit: Callback<()>) -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);
    let controller = StoredValue::new_local(HoldController::new(
        ClaimGesture::new(claimed.get_untracked()),
        BrowserScheduler,
        Rc::new(SystemClock),
        move |value| {
            let _ = progress.try_set(value);
        },
        move || on_commit.run(()),
    ));

    let press = move || {
        controller.with_value(|c| {
            c.press();
        });
    };
    let release = move || {
        controller.with_value(|c| {
            c.release();
        });
    };

    view! {
        <div class="hold-claim">
            <Show
                when=move || !claimed.get()
                fallback=|| {
                    view! {
                        <button type="button" class="hold-claim__claimed" disabled=true>
                            "Claimed!"
                        </button>
                    }
                }
            >
                <button
                    type="button"
                    class="hold-claim__button"
                    on:pointerdown=move |_| press()
                    on:pointerup=move |_| release()
                    on:pointerleave=move |_| release()
                    on:pointercancel=move |_| release()
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || format!("{:.0}", progress.get())
                >
                    <span class="hold-claim__liquid" style=move || hold_style(progress.get())></span>
                    <span class="hold-claim__label">{move || hold_caption(progress.get())}</span>
                </button>
            </Show>
        </div>
    }
}
