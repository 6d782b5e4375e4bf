//! Login and registration forms on switchable tabs

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::session::use_session;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

#[derive(Clone, PartialEq)]
enum Feedback {
    Error(String),
    Success(String),
}

fn feedback_view(feedback: &Option<Feedback>) -> Html {
    match feedback {
        Some(Feedback::Error(message)) => html! { <p class="message error">{message.clone()}</p> },
        Some(Feedback::Success(message)) => {
            html! { <p class="message success">{message.clone()}</p> }
        }
        None => html! {},
    }
}

fn input_setter(target: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        target.set(input.value());
    })
}

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let session = use_session();

    let active_tab = use_state(|| AuthTab::Login);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let password_confirm = use_state(String::new);
    let busy = use_state(|| false);
    let feedback = use_state(|| Option::<Feedback>::None);

    let on_tab = {
        let active_tab = active_tab.clone();
        let feedback = feedback.clone();
        Callback::from(move |tab: AuthTab| {
            active_tab.set(tab);
            feedback.set(None);
        })
    };

    let on_email_input = input_setter(email.clone());
    let on_password_input = input_setter(password.clone());
    let on_password_confirm_input = input_setter(password_confirm.clone());

    let on_login = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            let email_value = (*email).clone();
            let password_value = (*password).clone();

            if email_value.is_empty() || password_value.is_empty() {
                feedback.set(Some(Feedback::Error("Please fill in all fields".into())));
                return;
            }

            busy.set(true);
            let session = session.clone();
            let busy = busy.clone();
            let feedback = feedback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.client.login(email_value, password_value).await {
                    Ok(_) => {
                        feedback.set(Some(Feedback::Success("Signed in".into())));
                        session.signed_in();
                    }
                    Err(err) => feedback.set(Some(Feedback::Error(err.to_string()))),
                }
                busy.set(false);
            });
        })
    };

    let on_register = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let password_confirm = password_confirm.clone();
        let busy = busy.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let confirm_value = (*password_confirm).clone();

            if email_value.is_empty() || password_value.is_empty() || confirm_value.is_empty() {
                feedback.set(Some(Feedback::Error("Please fill in all fields".into())));
                return;
            }
            if password_value != confirm_value {
                feedback.set(Some(Feedback::Error("Passwords do not match".into())));
                return;
            }

            busy.set(true);
            let session = session.clone();
            let busy = busy.clone();
            let feedback = feedback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session
                    .client
                    .register(email_value, password_value, confirm_value)
                    .await
                {
                    Ok(_) => {
                        feedback.set(Some(Feedback::Success("Account created".into())));
                        session.signed_in();
                    }
                    Err(err) => feedback.set(Some(Feedback::Error(err.to_string()))),
                }
                busy.set(false);
            });
        })
    };

    let tab_class = |tab: AuthTab| {
        if *active_tab == tab {
            "auth-tab active"
        } else {
            "auth-tab"
        }
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="brand">{"TonTax"}</h1>
                <div class="auth-tabs">
                    <button
                        class={tab_class(AuthTab::Login)}
                        onclick={on_tab.reform(|_| AuthTab::Login)}
                    >
                        {"Sign in"}
                    </button>
                    <button
                        class={tab_class(AuthTab::Register)}
                        onclick={on_tab.reform(|_| AuthTab::Register)}
                    >
                        {"Register"}
                    </button>
                </div>

                <div class="auth-form">
                    <input
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                    if *active_tab == AuthTab::Register {
                        <input
                            type="password"
                            placeholder="Confirm password"
                            value={(*password_confirm).clone()}
                            oninput={on_password_confirm_input}
                        />
                    }

                    {feedback_view(&feedback)}

                    if *active_tab == AuthTab::Login {
                        <button class="btn btn-primary" onclick={on_login} disabled={*busy}>
                            {"Sign in"}
                        </button>
                    } else {
                        <button class="btn btn-primary" onclick={on_register} disabled={*busy}>
                            {"Create account"}
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}
