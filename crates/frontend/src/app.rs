//! Application shell.
//!
//! Bootstrap order follows the session phase: while credentials restore the
//! spinner shows, an unauthenticated session gets the auth screen, and only
//! a signed-in session reveals the main view, at which point the hash
//! router takes over and renders the page the fragment resolves to.

use yew::prelude::*;

use crate::components::{AuthPage, Dashboard, LoadingSpinner, Nav, TaxPage, TransactionsPage};
use crate::config::{AppConfig, manifest_url};
use crate::router::{Page, use_hash_route};
use crate::services::TonConnect;
use crate::session::{SessionPhase, SessionProvider, use_session};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <AppContent />
        </SessionProvider>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let session = use_session();

    match session.phase() {
        SessionPhase::Restoring => html! { <LoadingSpinner text="Loading..." /> },
        SessionPhase::SignedOut => html! { <AuthPage /> },
        SessionPhase::SignedIn => html! { <MainApp /> },
    }
}

#[function_component(MainApp)]
fn main_app() -> Html {
    let session = use_session();
    let page = use_hash_route(true);
    let wallet_address = use_state(|| Option::<String>::None);
    let ton_connect = use_mut_ref(|| Option::<TonConnect>::None);

    // Reveal-time setup: check the linked wallet and bring up the
    // TonConnect bridge. A freshly connected account is pushed to the
    // backend before the UI picks the address up.
    {
        let session = session.clone();
        let wallet_address = wallet_address.clone();
        let ton_connect = ton_connect.clone();
        use_effect_with((), move |_| {
            {
                let session = session.clone();
                let wallet_address = wallet_address.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match session.client.wallet().await {
                        Ok(wallet) if wallet.connected => {
                            wallet_address.set(wallet.wallet_address);
                        }
                        Ok(_) => wallet_address.set(None),
                        Err(err) => log::error!("wallet check failed: {err}"),
                    }
                });
            }

            let handle = TonConnect::init(&manifest_url(), move |address| match address {
                Some(address) => {
                    let session = session.clone();
                    let wallet_address = wallet_address.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match session
                            .client
                            .connect_wallet(address, AppConfig::WALLET_TYPE)
                            .await
                        {
                            Ok(wallet) => wallet_address.set(wallet.wallet_address),
                            Err(err) => log::error!("failed to link wallet: {err}"),
                        }
                    });
                }
                None => wallet_address.set(None),
            });
            *ton_connect.borrow_mut() = handle;
            || ()
        });
    }

    html! {
        <div class="app-shell">
            <Nav page={*page} />
            <main class="content">
                {match *page {
                    Page::Dashboard => html! {
                        <Dashboard wallet_address={(*wallet_address).clone()} />
                    },
                    Page::Transactions => html! {
                        <TransactionsPage wallet_address={(*wallet_address).clone()} />
                    },
                    Page::Tax => html! { <TaxPage /> },
                }}
            </main>
        </div>
    }
}
