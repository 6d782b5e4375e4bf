//! Tax reporting view.
//!
//! All figures are computed by the backend; this view only picks periods
//! and renders the results.

use tontax_http::types::{MonthlyTax, TotalTaxResponse};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::format::{format_ton, format_usd};
use crate::session::use_session;

fn input_setter(target: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        target.set(input.value());
    })
}

fn parse_month(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|m| (1..=12).contains(m))
}

#[function_component(TaxPage)]
pub fn tax_page() -> Html {
    let session = use_session();

    let year = use_state(String::new);
    let month = use_state(String::new);
    let start_year = use_state(String::new);
    let start_month = use_state(String::new);

    let monthly = use_state(|| Option::<MonthlyTax>::None);
    let all_months = use_state(|| Option::<Vec<MonthlyTax>>::None);
    let total = use_state(|| Option::<TotalTaxResponse>::None);
    let error = use_state(|| Option::<String>::None);

    let on_year_input = input_setter(year.clone());
    let on_month_input = input_setter(month.clone());
    let on_start_year_input = input_setter(start_year.clone());
    let on_start_month_input = input_setter(start_month.clone());

    let on_load_month = {
        let session = session.clone();
        let year = year.clone();
        let month = month.clone();
        let monthly = monthly.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let (Ok(year_value), Some(month_value)) =
                (year.parse::<i32>(), parse_month(&month))
            else {
                error.set(Some("Enter a valid year and a month from 1 to 12".into()));
                return;
            };

            error.set(None);
            let session = session.clone();
            let monthly = monthly.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.client.tax_for_month(year_value, month_value).await {
                    Ok(summary) => monthly.set(Some(summary)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    // The start filters are optional; empty inputs mean the backend decides
    // the period from the first recorded transaction.
    let start_filters = {
        let start_year = start_year.clone();
        let start_month = start_month.clone();
        move || {
            (
                start_year.parse::<i32>().ok(),
                parse_month(&start_month),
            )
        }
    };

    let on_load_all = {
        let session = session.clone();
        let start_filters = start_filters.clone();
        let all_months = all_months.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let (from_year, from_month) = start_filters();
            error.set(None);
            let session = session.clone();
            let all_months = all_months.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.client.tax_for_all_months(from_year, from_month).await {
                    Ok(response) => all_months.set(Some(response.monthly_taxes)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_load_total = {
        let session = session.clone();
        let start_filters = start_filters.clone();
        let total = total.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let (from_year, from_month) = start_filters();
            error.set(None);
            let session = session.clone();
            let total = total.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.client.total_tax(from_year, from_month).await {
                    Ok(response) => total.set(Some(response)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="page tax-page">
            {if let Some(error) = &*error {
                html! { <p class="message error">{error.clone()}</p> }
            } else {
                html! {}
            }}

            <section class="card">
                <h2>{"Month"}</h2>
                <div class="tax-form">
                    <input
                        type="number"
                        placeholder="Year"
                        value={(*year).clone()}
                        oninput={on_year_input}
                    />
                    <input
                        type="number"
                        placeholder="Month"
                        min="1"
                        max="12"
                        value={(*month).clone()}
                        oninput={on_month_input}
                    />
                    <button class="btn btn-primary" onclick={on_load_month}>{"Calculate"}</button>
                </div>
                {monthly_view(&monthly)}
            </section>

            <section class="card">
                <h2>{"Period"}</h2>
                <div class="tax-form">
                    <input
                        type="number"
                        placeholder="Start year (optional)"
                        value={(*start_year).clone()}
                        oninput={on_start_year_input}
                    />
                    <input
                        type="number"
                        placeholder="Start month (optional)"
                        min="1"
                        max="12"
                        value={(*start_month).clone()}
                        oninput={on_start_month_input}
                    />
                    <button class="btn btn-secondary" onclick={on_load_all}>{"All months"}</button>
                    <button class="btn btn-secondary" onclick={on_load_total}>{"Total"}</button>
                </div>
                {all_months_view(&all_months)}
                {total_view(&total)}
            </section>
        </div>
    }
}

fn monthly_view(monthly: &Option<MonthlyTax>) -> Html {
    let Some(summary) = monthly else {
        return html! {};
    };

    html! {
        <div class="tax-summary">
            <h3>{format!("{}-{:02}", summary.year, summary.month)}</h3>
            <dl class="tax-figures">
                <dt>{"Sold"}</dt>
                <dd>{format!("{} ({})", format_ton(summary.total_sent_ton), format_usd(summary.total_sent_usd))}</dd>
                <dt>{"Tax"}</dt>
                <dd>{format!("{} ({})", format_ton(summary.total_tax_ton), format_usd(summary.total_tax_usd))}</dd>
                <dt>{"Operations"}</dt>
                <dd>{summary.transactions_count}</dd>
            </dl>
        </div>
    }
}

fn all_months_view(all_months: &Option<Vec<MonthlyTax>>) -> Html {
    let Some(months) = all_months else {
        return html! {};
    };

    if months.is_empty() {
        return html! { <p class="muted">{"No months with activity"}</p> };
    }

    html! {
        <ul class="tax-month-list">
            {for months.iter().map(|summary| html! {
                <li key={format!("{}-{}", summary.year, summary.month)}>
                    <span class="tax-month">{format!("{}-{:02}", summary.year, summary.month)}</span>
                    <span class="tax-amount">
                        {format!("{} ({})", format_ton(summary.total_tax_ton), format_usd(summary.total_tax_usd))}
                    </span>
                    <span class="tax-count">{format!("{} operations", summary.transactions_count)}</span>
                </li>
            })}
        </ul>
    }
}

fn total_view(total: &Option<TotalTaxResponse>) -> Html {
    let Some(summary) = total else {
        return html! {};
    };

    html! {
        <div class="tax-summary total">
            <h3>
                {match &summary.period {
                    Some(period) => format!("Total {} to {}", period.start, period.end),
                    None => "Total".to_string(),
                }}
            </h3>
            <dl class="tax-figures">
                <dt>{"Sold"}</dt>
                <dd>{format!("{} ({})", format_ton(summary.total_sent_ton), format_usd(summary.total_sent_usd))}</dd>
                <dt>{"Tax"}</dt>
                <dd>{format!("{} ({})", format_ton(summary.total_tax_ton), format_usd(summary.total_tax_usd))}</dd>
                <dt>{"Transactions"}</dt>
                <dd>{summary.total_transactions}</dd>
                <dt>{"TON price"}</dt>
                <dd>{format_usd(summary.ton_price_usd)}</dd>
            </dl>
        </div>
    }
}
