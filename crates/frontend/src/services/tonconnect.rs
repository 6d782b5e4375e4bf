//! TonConnect UI binding.
//!
//! The wallet connector is an external SDK loaded by the host page as the
//! `TON_CONNECT_UI` global; this module only bridges to it. The SDK keeps
//! one instance per page and one status subscription; registering again
//! swaps the callback the subscription forwards to, so the previous closure
//! can be dropped safely.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
let tonConnectUI = null;
let statusCallback = null;
let subscribed = false;

export function ton_connect_init(manifestUrl) {
    if (typeof TON_CONNECT_UI === 'undefined') {
        return false;
    }
    if (!tonConnectUI) {
        tonConnectUI = new TON_CONNECT_UI.TonConnectUI({ manifestUrl });
    }
    return true;
}

export function ton_connect_on_status_change(callback) {
    statusCallback = callback;
    if (tonConnectUI && !subscribed) {
        subscribed = true;
        tonConnectUI.onStatusChange((wallet) => {
            if (statusCallback) {
                statusCallback(wallet && wallet.account ? wallet.account.address : null);
            }
        });
    }
}

export function ton_connect_clear_status_change() {
    statusCallback = null;
}

export async function ton_connect_open_modal() {
    if (tonConnectUI) {
        await tonConnectUI.openModal();
    }
}

export async function ton_connect_disconnect() {
    if (tonConnectUI) {
        try {
            await tonConnectUI.disconnect();
        } catch (e) {
            // Already disconnected
        }
    }
}

export function ton_connect_account_address() {
    if (tonConnectUI && tonConnectUI.account) {
        return tonConnectUI.account.address;
    }
    return null;
}
")]
extern "C" {
    #[wasm_bindgen(js_name = ton_connect_init)]
    fn init_raw(manifest_url: &str) -> bool;

    #[wasm_bindgen(js_name = ton_connect_on_status_change)]
    fn on_status_change_raw(callback: &Closure<dyn Fn(Option<String>)>);

    #[wasm_bindgen(js_name = ton_connect_clear_status_change)]
    fn clear_status_change_raw();

    #[wasm_bindgen(js_name = ton_connect_open_modal)]
    async fn open_modal_raw();

    #[wasm_bindgen(js_name = ton_connect_disconnect)]
    async fn disconnect_raw();

    #[wasm_bindgen(js_name = ton_connect_account_address)]
    fn account_address_raw() -> Option<String>;
}

/// Handle to the host-page TonConnect UI instance.
///
/// Keeps the registered status-change closure alive; dropping the handle
/// unregisters it first.
pub struct TonConnect {
    _status_callback: Closure<dyn Fn(Option<String>)>,
}

impl TonConnect {
    /// Initialize the SDK against the backend-served manifest and register
    /// the status callback. `on_change` receives the connected account
    /// address, or `None` on disconnect. Returns `None` when the SDK script
    /// is not present on the page.
    pub fn init(manifest_url: &str, on_change: impl Fn(Option<String>) + 'static) -> Option<Self> {
        if !init_raw(manifest_url) {
            log::warn!("TonConnect UI is not available on this page");
            return None;
        }

        let callback = Closure::new(move |address: Option<String>| on_change(address));
        on_status_change_raw(&callback);
        Some(Self {
            _status_callback: callback,
        })
    }

    /// Open the wallet selection modal
    pub async fn open_modal() {
        open_modal_raw().await;
    }

    /// Disconnect the wallet; a no-op when nothing is connected
    pub async fn disconnect() {
        disconnect_raw().await;
    }

    /// Address of the currently connected account, if any
    pub fn account_address() -> Option<String> {
        account_address_raw()
    }
}

impl Drop for TonConnect {
    fn drop(&mut self) {
        clear_status_change_raw();
    }
}
