//! Top navigation bar.
//!
//! The highlighted link and the document title derive 1:1 from the resolved
//! page; neither carries state of its own.

use gloo::utils::document;
use yew::prelude::*;

use crate::router::{Page, navigate};
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub page: Page,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let session = use_session();
    let page = props.page;

    use_effect_with(page, |page| {
        document().set_title(&format!("{} - TonTax", page.title()));
        || ()
    });

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.sign_out())
    };

    html! {
        <header class="topbar">
            <span class="brand">{"TonTax"}</span>
            <h1 class="page-title">{page.title()}</h1>
            <nav class="nav-links">
                {for Page::ALL.iter().map(|link| {
                    let link = *link;
                    let class = nav_link_class(link, page);
                    let onclick = Callback::from(move |_: MouseEvent| navigate(link));
                    html! {
                        <button {class} {onclick}>{link.title()}</button>
                    }
                })}
            </nav>
            <button class="btn btn-secondary" onclick={on_logout}>{"Logout"}</button>
        </header>
    }
}

fn nav_link_class(link: Page, current: Page) -> &'static str {
    if link == current {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_link_is_active() {
        for current in Page::ALL {
            let active: Vec<Page> = Page::ALL
                .into_iter()
                .filter(|link| nav_link_class(*link, current).ends_with("active"))
                .collect();
            assert_eq!(active, vec![current]);
        }
    }
}

