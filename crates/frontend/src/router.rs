//! Hash router.
//!
//! A fixed route table maps the URL fragment to exactly one page; an absent
//! or unrecognized fragment falls back to the dashboard. Navigation always
//! goes through the fragment, so the browser history stays the single
//! source of truth and every transition arrives via `hashchange`.

use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

/// The route table, fixed at compile time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Transactions,
    Tax,
}

impl Page {
    /// Designated home page for absent or unknown fragments
    pub const HOME: Page = Page::Dashboard;

    /// All pages, in navigation order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Transactions, Page::Tax];

    /// Resolve a URL fragment. Total: unknown keys land on the home page.
    pub fn from_fragment(fragment: &str) -> Page {
        match fragment.trim_start_matches('#') {
            "dashboard" => Page::Dashboard,
            "transactions" => Page::Transactions,
            "tax" => Page::Tax,
            _ => Page::HOME,
        }
    }

    /// The fragment identifying this page
    pub fn fragment(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Transactions => "transactions",
            Page::Tax => "tax",
        }
    }

    /// Navigation label and page title
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Transactions => "Transactions",
            Page::Tax => "Taxes",
        }
    }
}

/// Page the current URL fragment resolves to
pub fn current_page() -> Page {
    let hash = window().location().hash().unwrap_or_default();
    Page::from_fragment(&hash)
}

/// Navigate by setting the URL fragment; the state change itself flows
/// through the `hashchange` transition.
pub fn navigate(page: Page) {
    if window().location().set_hash(page.fragment()).is_err() {
        log::warn!("failed to set location hash");
    }
}

/// Current page, kept in sync with the URL fragment.
///
/// While `active` is false (the main view is hidden behind the auth screen)
/// transitions are suppressed; flipping it to true re-synchronizes from the
/// fragment, which covers the initial render after login.
#[hook]
pub fn use_hash_route(active: bool) -> UseStateHandle<Page> {
    let page = use_state(current_page);

    {
        let page = page.clone();
        use_effect_with(active, move |active| {
            let listener = active.then(|| {
                page.set(current_page());
                EventListener::new(&window(), "hashchange", move |_| page.set(current_page()))
            });
            move || drop(listener)
        });
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fragments_resolve_to_their_page() {
        assert_eq!(Page::from_fragment("dashboard"), Page::Dashboard);
        assert_eq!(Page::from_fragment("transactions"), Page::Transactions);
        assert_eq!(Page::from_fragment("tax"), Page::Tax);
        assert_eq!(Page::from_fragment("#tax"), Page::Tax);
    }

    #[test]
    fn empty_fragment_resolves_to_home() {
        assert_eq!(Page::from_fragment(""), Page::HOME);
        assert_eq!(Page::from_fragment("#"), Page::HOME);
    }

    #[test]
    fn unknown_fragment_resolves_to_home() {
        assert_eq!(Page::from_fragment("bogus"), Page::Dashboard);
        assert_eq!(Page::from_fragment("#bogus"), Page::Dashboard);
    }

    #[test]
    fn fragments_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_fragment(page.fragment()), page);
        }
    }

    #[test]
    fn titles_are_distinct() {
        assert_eq!(Page::Dashboard.title(), "Dashboard");
        assert_eq!(Page::Transactions.title(), "Transactions");
        assert_eq!(Page::Tax.title(), "Taxes");
    }
}
