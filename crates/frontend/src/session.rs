//! Session context.
//!
//! One [`SessionClient`] is constructed at application start and handed to
//! every consumer through this context, together with the shell phase that
//! decides whether the auth screen or the main view renders. The client's
//! session-end hook feeds back into the same phase, so a failed renewal
//! anywhere drops the user back to the login view.

use std::rc::Rc;

use tontax_http::{SessionClient, SessionEndHook};
use yew::prelude::*;

use crate::config::api_base_url;
use crate::storage::BrowserTokenStore;

/// Which shell view is visible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Credentials are being restored from storage
    Restoring,
    SignedOut,
    SignedIn,
}

/// Session transitions
pub enum SessionEvent {
    Restored { authenticated: bool },
    SignedIn,
    Ended,
}

impl Reducible for SessionPhase {
    type Action = SessionEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            SessionEvent::Restored {
                authenticated: true,
            }
            | SessionEvent::SignedIn => SessionPhase::SignedIn,
            SessionEvent::Restored {
                authenticated: false,
            }
            | SessionEvent::Ended => SessionPhase::SignedOut,
        })
    }
}

/// The session handle available through [`use_session`]
#[derive(Clone)]
pub struct Session {
    pub client: Rc<SessionClient>,
    phase: UseReducerHandle<SessionPhase>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client) && self.phase == other.phase
    }
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        *self.phase
    }

    /// Reveal the main view after a successful login or registration
    pub fn signed_in(&self) {
        self.phase.dispatch(SessionEvent::SignedIn);
    }

    /// Tear the session down and return to the auth view
    pub fn sign_out(&self) {
        self.client.logout();
        self.phase.dispatch(SessionEvent::Ended);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Constructs the application-lifetime [`SessionClient`] and provides it to
/// the component tree
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let phase = use_reducer(|| SessionPhase::Restoring);

    let client = {
        let dispatcher = phase.dispatcher();
        use_memo((), move |_| {
            let on_session_end: SessionEndHook = Rc::new(move || {
                dispatcher.dispatch(SessionEvent::Ended);
            });
            SessionClient::builder()
                .base_url(api_base_url())
                .token_store(Rc::new(BrowserTokenStore))
                .on_session_end(on_session_end)
                .build()
                .expect("session client should build")
        })
    };

    // Restore the stored session once on startup
    {
        let phase = phase.clone();
        let client = client.clone();
        use_effect_with((), move |_| {
            phase.dispatch(SessionEvent::Restored {
                authenticated: client.is_authenticated(),
            });
            || ()
        });
    }

    let session = Session {
        client: Rc::clone(&client),
        phase,
    };

    html! {
        <ContextProvider<Session> context={session}>
            {props.children.clone()}
        </ContextProvider<Session>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> Session {
    use_context::<Session>()
        .expect("Session context not found. Wrap the component tree in SessionProvider")
}
