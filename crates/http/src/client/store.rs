//! Durable storage for the session credential pair

use std::sync::Mutex;

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// The session credential pair.
///
/// Both halves are written and cleared together; no code path replaces one
/// without the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

impl Credentials {
    /// Pair adopted from a successful login, registration or renewal
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: Some(access.into()),
            refresh: Some(refresh.into()),
        }
    }

    /// Whether no credentials are held at all
    pub fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh.is_none()
    }
}

/// Durable key-value storage for the credential pair.
///
/// The browser frontend backs this with `localStorage` under
/// [`ACCESS_TOKEN_KEY`] and [`REFRESH_TOKEN_KEY`]; native builds and tests
/// use [`MemoryTokenStore`]. Implementations persist and clear the pair as a
/// whole.
pub trait TokenStore {
    /// Load the stored pair; missing keys come back as `None`
    fn load(&self) -> Credentials;

    /// Persist the pair, overwriting both keys
    fn save(&self, credentials: &Credentials);

    /// Remove both keys
    fn clear(&self);
}

/// In-memory token store
#[derive(Default)]
pub struct MemoryTokenStore {
    credentials: Mutex<Credentials>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Credentials {
        self.credentials
            .lock()
            .expect("Failed to acquire token store lock")
            .clone()
    }

    fn save(&self, credentials: &Credentials) {
        *self
            .credentials
            .lock()
            .expect("Failed to acquire token store lock") = credentials.clone();
    }

    fn clear(&self) {
        *self
            .credentials
            .lock()
            .expect("Failed to acquire token store lock") = Credentials::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_overwrites_the_whole_pair() {
        let store = MemoryTokenStore::new();
        store.save(&Credentials::new("A1", "R1"));
        store.save(&Credentials::new("A2", "R2"));

        assert_eq!(store.load(), Credentials::new("A2", "R2"));
    }

    #[test]
    fn clear_removes_both_tokens() {
        let store = MemoryTokenStore::new();
        store.save(&Credentials::new("A1", "R1"));
        store.clear();

        let credentials = store.load();
        assert!(credentials.is_empty());
        assert_eq!(credentials.access, None);
        assert_eq!(credentials.refresh, None);
    }

    #[test]
    fn empty_store_loads_an_empty_pair() {
        assert!(MemoryTokenStore::new().load().is_empty());
    }
}
