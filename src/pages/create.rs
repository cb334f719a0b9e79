//! Create tab: campaign form, preview modal, and publish.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft lives in the `CreateState` context rather than in component
//! locals, so switching tabs keeps a half-filled form. Publishing moves the
//! draft into the `CampaignStore` context and shows the success panel.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use leptos::prelude::*;

use claims::image::ACCEPT_ATTR;
use claims::{Address, CampaignDraft, CampaignStore, Clock, DraftIssue, SystemClock};

use crate::components::phase_editor::PhaseEditor;
use crate::state::auth::AuthState;
use crate::state::create::CreateState;

/// Preview text for a possibly blank field.
pub fn or_dash(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { "—".to_owned() } else { trimmed.to_owned() }
}

/// Publish the form's draft on behalf of `creator`, logging rejections.
pub fn submit(state: &mut CreateState, store: &mut CampaignStore, creator: Option<Address>, now_ms: u64) -> bool {
    match state.publish(store, creator, now_ms) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("publish blocked: {e}");
            false
        }
    }
}

#[component]
pub fn CreatePage() -> impl IntoView {
    let create = expect_context::<RwSignal<CreateState>>();
    let store = expect_context::<RwSignal<CampaignStore>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let published = move || create.with(|s| s.published);

    view! {
        <div class="create">
            <h2>"Create Token"</h2>
            <Show
                when=published
                fallback=move || view! { <CampaignForm create=create store=store auth=auth/> }
            >
                <div class="create__success">
                    <p>"Campaign published successfully."</p>
                    <p class="create__success-hint">"It will appear on Explore."</p>
                    <button type="button" class="create__reset" on:click=move |_| create.update(CreateState::reset)>
                        "Create another"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CampaignForm(
    create: RwSignal<CreateState>,
    store: RwSignal<CampaignStore>,
    auth: RwSignal<AuthState>,
) -> impl IntoView {
    let draft = move |f: fn(&CampaignDraft) -> String| create.with(|s| f(&s.draft));
    let flagged = move |issue: DraftIssue| create.with(|s| s.draft.highlighted(issue));
    let publishable = move || create.with(|s| s.draft.is_publishable());
    let phase_ids = move || create.with(|s| s.draft.phases.iter().map(|p| p.id.clone()).collect::<Vec<_>>());

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = crate::util::file::selected_file(&input) else {
                create.update(|s| s.draft.clear_image());
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::util::file::read_image(file).await;
                if let Err(e) = &result {
                    log::warn!("image rejected: {e}");
                }
                create.update(|s| s.draft.apply_image(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_publish = move |_| {
        let creator = auth.with_untracked(|a| a.user.as_ref().map(|u| u.address));
        let now_ms = SystemClock.now_ms();
        let mut state = create.get_untracked();
        store.update(|s| {
            submit(&mut state, s, creator, now_ms);
        });
        create.set(state);
    };

    let close_preview = move || create.update(|s| s.show_preview = false);

    view! {
        <p class="create__subtitle">"Launch your own claim campaign"</p>
        <section class="create__section">
            <div class="create__fields">
                <label class:create__field--error=move || flagged(DraftIssue::ProjectName)>
                    <span>"Project name"</span>
                    <input
                        type="text"
                        placeholder="My Project"
                        prop:value=move || draft(|d| d.project_name.clone())
                        on:input=move |ev| create.update(|s| s.draft.project_name = event_target_value(&ev))
                    />
                </label>
                <label class:create__field--error=move || flagged(DraftIssue::TokenName)>
                    <span>"Token name"</span>
                    <input
                        type="text"
                        placeholder="My Token"
                        prop:value=move || draft(|d| d.token_name.clone())
                        on:input=move |ev| create.update(|s| s.draft.token_name = event_target_value(&ev))
                    />
                </label>
                <label class:create__field--error=move || flagged(DraftIssue::TokenSymbol)>
                    <span>"Token symbol"</span>
                    <input
                        type="text"
                        placeholder="MTK"
                        prop:value=move || draft(|d| d.token_symbol.clone())
                        on:input=move |ev| create.update(|s| s.draft.set_token_symbol(&event_target_value(&ev)))
                    />
                </label>
                <label class:create__field--error=move || flagged(DraftIssue::Description)>
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        placeholder="What is this campaign about?"
                        prop:value=move || draft(|d| d.description.clone())
                        on:input=move |ev| create.update(|s| s.draft.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label
                    class="create__image"
                    class:create__field--error=move || flagged(DraftIssue::Image)
                    class:create__image--has=move || create.with(|s| s.draft.image.is_some())
                >
                    <span>"Image (JPG or PNG, max 1 MB)"</span>
                    <input type="file" class="create__file-input" accept=ACCEPT_ATTR on:change=on_image_change/>
                    {move || {
                        match create.with(|s| s.draft.image.clone()) {
                            Some(image) => {
                                view! {
                                    <div class="create__image-preview">
                                        <img src=image.as_str().to_owned() alt=""/>
                                        <span class="create__image-check">"✓"</span>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => view! { <div class="create__image-placeholder">"Choose file"</div> }.into_any(),
                        }
                    }}
                    {move || {
                        create
                            .with(|s| s.draft.image_error.as_ref().map(claims::ImageError::user_message))
                            .map(|message| view! { <span class="create__inline-error">{message}</span> })
                    }}
                </label>
            </div>
        </section>

        <section class="create__section create__phases">
            <h3>"Phases"</h3>
            <For each=phase_ids key=|id| id.clone() let:id>
                <PhaseEditor phase_id=id/>
            </For>
            <button type="button" class="create__add-phase" on:click=move |_| create.update(|s| s.draft.add_phase())>
                "Add phase"
            </button>
        </section>

        <div class="create__actions">
            <button
                type="button"
                class="create__preview"
                on:click=move |_| create.update(|s| s.show_preview = true)
            >
                "Preview"
            </button>
            <button
                type="button"
                class="create__publish"
                on:click=on_publish
                disabled=move || !publishable()
            >
                "Publish"
            </button>
        </div>

        <Show when=move || create.with(|s| s.show_preview)>
            <div class="create__modal" on:click=move |_| close_preview()>
                <div class="create__modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="create__modal-header">
                        <h3>"Preview"</h3>
                        <button type="button" class="create__modal-close" on:click=move |_| close_preview()>
                            "×"
                        </button>
                    </div>
                    <div class="create__preview-body">
                        {move || {
                            create
                                .with(|s| s.draft.image.clone())
                                .map(|image| {
                                    view! { <img class="create__preview-logo" src=image.as_str().to_owned() alt=""/> }
                                })
                        }}
                        <p>
                            <strong>{move || draft(|d| or_dash(&d.project_name))}</strong>
                        </p>
                        <p>{move || draft(|d| format!("{} ({})", d.token_name.trim(), d.token_symbol.trim()))}</p>
                        <p class="create__preview-desc">{move || draft(|d| or_dash(&d.description))}</p>
                    </div>
                    <button type="button" class="create__modal-done" on:click=move |_| close_preview()>
                        "Done"
                    </button>
                </div>
            </div>
        </Show>
    }
}
