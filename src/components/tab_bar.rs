//! Top navigation between the three signed-in views.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            class="tab"
                            class:tab--active=move || ui.with(|u| u.tab == tab)
                            on:click=move |_| ui.update(|u| u.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
