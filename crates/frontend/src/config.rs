//! Frontend configuration

use gloo::utils::window;

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Path prefix the API is mounted under
    pub const API_BASE_PATH: &'static str = "/api";

    /// Wallet type reported when linking an address through TonConnect
    pub const WALLET_TYPE: &'static str = "tonkeeper";

    /// Path of the TonConnect manifest served by the backend
    pub const TONCONNECT_MANIFEST_PATH: &'static str = "/tonconnect-manifest.json";
}

/// API base URL for the current deployment origin
pub fn api_base_url() -> String {
    format!("{}{}", origin(), AppConfig::API_BASE_PATH)
}

/// TonConnect manifest URL for the current deployment origin
pub fn manifest_url() -> String {
    format!("{}{}", origin(), AppConfig::TONCONNECT_MANIFEST_PATH)
}

fn origin() -> String {
    window().location().origin().unwrap_or_default()
}
