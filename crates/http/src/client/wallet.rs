//! Wallet endpoints

use reqwest::Method;

use super::SessionClient;
use super::error::ClientError;
use crate::types::{BalanceResponse, ConnectWalletRequest, TransactionsResponse, WalletResponse};

impl SessionClient {
    /// Wallet session state for the authenticated user
    pub async fn wallet(&self) -> Result<WalletResponse, ClientError> {
        let request = self.request(Method::GET, "/Wallet/");
        self.execute(request).await
    }

    /// Link a wallet address to the account
    pub async fn connect_wallet(
        &self,
        wallet_address: impl Into<String>,
        wallet_type: impl Into<String>,
    ) -> Result<WalletResponse, ClientError> {
        let request = self
            .request(Method::POST, "/Wallet/")
            .json(&ConnectWalletRequest {
                wallet_address: wallet_address.into(),
                wallet_type: wallet_type.into(),
            });
        self.execute(request).await
    }

    /// TON balance of the linked wallet
    pub async fn balance(&self) -> Result<BalanceResponse, ClientError> {
        let request = self.request(Method::GET, "/wallet/balance/");
        self.execute(request).await
    }

    /// Transaction history; `refresh` forces a re-read from the blockchain
    /// instead of the backend cache
    pub async fn transactions(&self, refresh: bool) -> Result<TransactionsResponse, ClientError> {
        let mut request = self.request(Method::GET, "/wallet/transactions/");
        if refresh {
            request = request.query(&[("refresh", "true")]);
        }
        self.execute(request).await
    }
}
