//! Sign-in gate shown until a wallet session exists.

use leptos::prelude::*;

use claims::AppConfig;

use crate::components::sign_in_button::SignInButton;

#[component]
pub fn SignInPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    view! {
        <div class="sign-in-page">
            <div class="sign-in-page__card">
                <img class="sign-in-page__logo" src=config.logo_path.clone() alt=""/>
                <h1>{config.app_name.clone()}</h1>
                <p class="sign-in-page__subtitle">"Sign in with your wallet to continue"</p>
                <SignInButton/>
            </div>
        </div>
    }
}
