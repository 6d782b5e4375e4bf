//! Request and response types for the TonTax API.
//!
//! Every endpoint gets an explicit shape; the client never probes optional
//! JSON fields ad hoc. Error bodies share [`ApiErrorBody`].

use serde::{Deserialize, Serialize};

/// Access/refresh token pair as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body of `POST /register/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Body of `POST /login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /refresh/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful login or registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    pub tokens: TokenPair,
}

/// Successful renewal response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensResponse {
    pub tokens: TokenPair,
}

/// Body of `POST /Wallet/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectWalletRequest {
    pub wallet_address: String,
    pub wallet_type: String,
}

/// Wallet session state from `GET`/`POST /Wallet/`.
///
/// The backend answers `{connected: false, message}` when no wallet is
/// linked, so everything but the flag is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletResponse {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub wallet_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /wallet/balance/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub address: String,
    pub balance: f64,
    pub is_active: bool,
    /// Balance preformatted with nine decimal places
    pub balance_ton: String,
}

/// Single transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub tx_hash: String,
    pub timestamp: Option<String>,
    pub amount: f64,
    pub amount_ton: String,
    pub from_address: String,
    pub to_address: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /wallet/transactions/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionRecord>,
    pub count: usize,
    #[serde(default)]
    pub loaded_from_blockchain: usize,
    #[serde(default)]
    pub saved_to_db: usize,
    #[serde(default)]
    pub from_cache: bool,
}

/// One operation inside a monthly tax summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxOperation {
    pub tx_hash: String,
    pub timestamp: String,
    /// `"buy"` or `"sell"`
    pub operation_type: String,
    pub amount_ton: f64,
    pub amount_usd: f64,
    pub matched_buy_amount_ton: f64,
    pub profit_ton: f64,
    pub profit_usd: f64,
    pub tax_rate: f64,
    pub tax_amount_ton: f64,
    pub tax_amount_usd: f64,
}

/// Tax summary for a single month, from `GET /tax/month/` and embedded in
/// the all-months and total responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTax {
    pub year: i32,
    pub month: u32,
    pub total_sent_ton: f64,
    pub total_sent_usd: f64,
    pub total_tax_ton: f64,
    pub total_tax_usd: f64,
    pub transactions_count: usize,
    #[serde(default)]
    pub transactions: Vec<TaxOperation>,
    /// Demo-only aggregation the backend includes; rendered verbatim,
    /// never interpreted
    #[serde(default)]
    pub demo_deals: Vec<serde_json::Value>,
}

/// Response of `GET /tax/all/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllMonthsResponse {
    pub monthly_taxes: Vec<MonthlyTax>,
    #[serde(default)]
    pub count: usize,
}

/// Covered period inside the total summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPeriod {
    pub start: String,
    pub end: String,
}

/// Response of `GET /tax/total/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalTaxResponse {
    pub total_tax_ton: f64,
    pub total_tax_usd: f64,
    pub total_sent_ton: f64,
    pub total_sent_usd: f64,
    pub total_transactions: usize,
    pub ton_price_usd: f64,
    #[serde(default)]
    pub monthly_taxes: Vec<MonthlyTax>,
    #[serde(default)]
    pub period: Option<TaxPeriod>,
}

/// Error body the backend attaches to non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
