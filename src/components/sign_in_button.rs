//! Wallet sign-in control with its progress and error lines.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::state::auth::AuthState;

#[component]
pub fn SignInButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();

    let on_click = move |_| {
        if !auth.try_update(AuthState::begin_sign_in).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let session = session.get_value();
            leptos::task::spawn_local(async move {
                let result = session.sign_in().await;
                auth.update(|a| a.finish_sign_in(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
            auth.update(|a| a.finish_sign_in(Err(claims::SignInError::ProviderUnavailable)));
        }
    };

    let loading = move || auth.with(|a| a.loading);
    let error = move || auth.with(|a| a.error.clone());

    view! {
        <div class="sign-in">
            <button type="button" class="sign-in__button" on:click=on_click disabled=loading>
                "Sign in with Base"
            </button>
            <Show when=loading>
                <p class="sign-in__status">"Connecting…"</p>
            </Show>
            {move || {
                error()
                    .map(|message| {
                        view! {
                            <p class="sign-in__error" role="alert">
                                <span>{message}</span>
                                <button
                                    type="button"
                                    class="sign-in__dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| auth.update(AuthState::dismiss_error)
                                >
                                    "×"
                                </button>
                            </p>
                        }
                    })
            }}
        </div>
    }
}
