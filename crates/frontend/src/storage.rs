//! `localStorage`-backed token store

use gloo::storage::{LocalStorage, Storage};
use tontax_http::{ACCESS_TOKEN_KEY, Credentials, REFRESH_TOKEN_KEY, TokenStore};

/// Durable credential storage under the fixed browser keys.
///
/// Tokens are stored as plain strings so sessions created by earlier
/// deployments keep working.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Credentials {
        let storage = LocalStorage::raw();
        Credentials {
            access: storage.get_item(ACCESS_TOKEN_KEY).ok().flatten(),
            refresh: storage.get_item(REFRESH_TOKEN_KEY).ok().flatten(),
        }
    }

    fn save(&self, credentials: &Credentials) {
        let storage = LocalStorage::raw();
        match &credentials.access {
            Some(access) => {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
            }
            None => {
                let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            }
        }
        match &credentials.refresh {
            Some(refresh) => {
                let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
            }
            None => {
                let _ = storage.remove_item(REFRESH_TOKEN_KEY);
            }
        }
    }

    fn clear(&self) {
        let storage = LocalStorage::raw();
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
