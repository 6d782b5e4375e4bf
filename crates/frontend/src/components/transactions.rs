//! Transaction history view

use tontax_http::types::TransactionRecord;
use yew::prelude::*;

use crate::components::LoadingSpinner;
use crate::format::format_address;
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct TransactionsProps {
    #[prop_or_default]
    pub wallet_address: Option<String>,
}

#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsProps) -> Html {
    let session = use_session();
    let transactions = use_state(|| Option::<Vec<TransactionRecord>>::None);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let load = {
        let session = session.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |refresh: bool| {
            loading.set(true);
            error.set(None);
            let session = session.clone();
            let transactions = transactions.clone();
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.client.transactions(refresh).await {
                    Ok(history) => transactions.set(Some(history.transactions)),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    // Load automatically when the view is entered with a linked wallet
    {
        let load = load.clone();
        use_effect_with(props.wallet_address.clone(), move |address| {
            if address.is_some() {
                load.emit(false);
            }
            || ()
        });
    }

    let on_refresh = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(true))
    };

    let wallet = props.wallet_address.clone();

    html! {
        <div class="page transactions-page">
            <div class="page-actions">
                <button
                    class="btn btn-secondary"
                    onclick={on_refresh}
                    disabled={*loading || wallet.is_none()}
                >
                    {"Refresh"}
                </button>
            </div>
            {if wallet.is_none() {
                empty_state("Connect a wallet to see its history")
            } else if *loading && transactions.is_none() {
                html! { <LoadingSpinner text="Loading transactions..." /> }
            } else if let Some(error) = &*error {
                html! { <p class="message error">{error.clone()}</p> }
            } else {
                match &*transactions {
                    Some(transactions) if !transactions.is_empty() => html! {
                        <ul class="transaction-list">
                            {for transactions.iter().map(|tx| transaction_row(tx, wallet.as_deref()))}
                        </ul>
                    },
                    _ => empty_state("Nothing recorded for this wallet yet"),
                }
            }}
        </div>
    }
}

fn empty_state(hint: &str) -> Html {
    html! {
        <div class="empty-state">
            <h3>{"No transactions"}</h3>
            <p>{hint.to_string()}</p>
        </div>
    }
}

fn transaction_row(tx: &TransactionRecord, wallet: Option<&str>) -> Html {
    let outgoing = wallet.is_some_and(|wallet| tx.from_address == wallet);
    let (class, sign, counterparty) = if outgoing {
        ("transaction outgoing", "-", &tx.to_address)
    } else {
        ("transaction incoming", "+", &tx.from_address)
    };

    html! {
        <li class={class} key={tx.tx_hash.clone()}>
            <span class="tx-direction">{if outgoing { "Sent" } else { "Received" }}</span>
            <span class="tx-counterparty">{format_address(counterparty)}</span>
            <span class="tx-amount">{format!("{sign}{} TON", tx.amount_ton)}</span>
            <span class="tx-time">{tx.timestamp.clone().unwrap_or_default()}</span>
            <span class="tx-status">{tx.status.clone()}</span>
        </li>
    }
}
