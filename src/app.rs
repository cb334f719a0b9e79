//! Root application component and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads shared state from context: `RwSignal`s for auth, the
//! campaign store, navigation, and the create draft, plus the immutable
//! `AppConfig` and the wallet session. Views switch on `UiState::tab`; there
//! is no URL routing.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{Title, provide_meta_context};

use claims::{AppConfig, CampaignStore, ReadyOnce, WalletSession};

use crate::components::tab_bar::TabBar;
use crate::net::host::ParentFrameHost;
use crate::net::provider::BrowserWallet;
use crate::pages::{create::CreatePage, explore::ExplorePage, profile::ProfilePage, sign_in::SignInPage};
use crate::state::{auth::AuthState, create::CreateState, ui::Tab, ui::UiState};

/// Wallet session bound to the injected browser provider.
pub type Session = WalletSession<BrowserWallet>;

/// Context handle for the session. The session is not `Send`.
pub type SessionHandle = StoredValue<Rc<Session>, LocalStorage>;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let store = RwSignal::new(CampaignStore::new());
    let ui = RwSignal::new(UiState::default());
    let create = RwSignal::new(CreateState::default());
    let session: SessionHandle = StoredValue::new_local(Rc::new(Session::new(BrowserWallet, config.clone())));

    provide_context(auth);
    provide_context(store);
    provide_context(ui);
    provide_context(create);
    provide_context(session);
    provide_context(config.clone());

    let ready = StoredValue::new_local(ReadyOnce::new(ParentFrameHost));
    Effect::new(move |_| {
        ready.with_value(|r| {
            r.signal();
        });
    });

    let signed_in = move || auth.with(AuthState::is_signed_in);

    view! {
        <Title text=config.app_name.clone()/>
        <main class="app">
            <Show when=signed_in fallback=|| view! { <SignInPage/> }>
                <header class="app__header">
                    <h1 class="app__title">{expect_context::<AppConfig>().app_name}</h1>
                </header>
                <TabBar/>
                <section class="app__view">
                    {move || match ui.with(|u| u.tab) {
                        Tab::Explore => view! { <ExplorePage/> }.into_any(),
                        Tab::Create => view! { <CreatePage/> }.into_any(),
                        Tab::Profile => view! { <ProfilePage/> }.into_any(),
                    }}
                </section>
            </Show>
        </main>
    }
}
