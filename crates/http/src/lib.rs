//! Typed TonTax API client.
//!
//! [`SessionClient`] owns the session credential pair, issues requests
//! against the fixed-origin backend and renews the access token exactly once
//! on an authorization failure before giving up. The durable side of the
//! pair lives behind the [`client::store::TokenStore`] seam so the browser
//! frontend can back it with `localStorage` while tests run in memory.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::store::{
    ACCESS_TOKEN_KEY, Credentials, MemoryTokenStore, REFRESH_TOKEN_KEY, TokenStore,
};
pub use client::{SessionClient, SessionClientBuilder, SessionEndHook};
