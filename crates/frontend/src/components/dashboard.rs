//! Dashboard view: wallet status and balance

use tontax_http::types::BalanceResponse;
use yew::prelude::*;

use crate::format::format_address;
use crate::services::TonConnect;
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    #[prop_or_default]
    pub wallet_address: Option<String>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_session();
    let balance = use_state(|| Option::<BalanceResponse>::None);
    let error = use_state(|| Option::<String>::None);

    // Balance follows the linked wallet
    {
        let session = session.clone();
        let balance = balance.clone();
        let error = error.clone();
        use_effect_with(props.wallet_address.clone(), move |address| {
            balance.set(None);
            error.set(None);
            if address.is_some() {
                wasm_bindgen_futures::spawn_local(async move {
                    match session.client.balance().await {
                        Ok(response) => balance.set(Some(response)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            || ()
        });
    }

    let connected = props.wallet_address.is_some();

    let on_connect = Callback::from(|_: MouseEvent| {
        wasm_bindgen_futures::spawn_local(TonConnect::open_modal());
    });
    let on_disconnect = Callback::from(|_: MouseEvent| {
        wasm_bindgen_futures::spawn_local(TonConnect::disconnect());
    });

    html! {
        <div class="page dashboard-page">
            <section class="card wallet-card">
                <h2>{"Wallet"}</h2>
                <div class="wallet-status">
                    <span class={if connected { "status-dot connected" } else { "status-dot" }}></span>
                    <span class="status-text">
                        {if connected { "Connected" } else { "Not connected" }}
                    </span>
                </div>
                <p class="wallet-address">
                    {props.wallet_address.as_deref().map(format_address).unwrap_or_else(|| "Not connected".to_string())}
                </p>
                {if connected {
                    html! {
                        <button class="btn btn-danger" onclick={on_disconnect}>
                            {"Disconnect wallet"}
                        </button>
                    }
                } else {
                    html! {
                        <button class="btn btn-primary" onclick={on_connect}>
                            {"Connect wallet"}
                        </button>
                    }
                }}
            </section>

            <section class="card balance-card">
                <h2>{"Balance"}</h2>
                {match (&*balance, &*error) {
                    (Some(balance), _) => html! {
                        <>
                            <p class="balance-value">{format!("{} TON", balance.balance_ton)}</p>
                            <p class="balance-state">
                                {if balance.is_active { "Active" } else { "Inactive" }}
                            </p>
                        </>
                    },
                    (None, Some(error)) => html! { <p class="message error">{error.clone()}</p> },
                    (None, None) if connected => html! { <p class="balance-value muted">{"Loading..."}</p> },
                    (None, None) => html! { <p class="balance-value muted">{"0.00 TON"}</p> },
                }}
            </section>
        </div>
    }
}
