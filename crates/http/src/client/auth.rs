//! Account endpoints (public, no bearer authorization)

use reqwest::Method;

use super::SessionClient;
use super::error::ClientError;
use super::store::Credentials;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};

impl SessionClient {
    /// Register a new account.
    ///
    /// On success the returned token pair is adopted as the active session.
    pub async fn register(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirm: impl Into<String>,
    ) -> Result<AuthResponse, ClientError> {
        let request = self
            .request(Method::POST, "/register/")
            .json(&RegisterRequest {
                email: email.into(),
                password: password.into(),
                password_confirm: password_confirm.into(),
            });

        let response: AuthResponse = self.execute_public(request).await?;
        self.set_credentials(Credentials::new(
            response.tokens.access.clone(),
            response.tokens.refresh.clone(),
        ));
        Ok(response)
    }

    /// Log in with email and password.
    ///
    /// On success the returned token pair is adopted as the active session.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<AuthResponse, ClientError> {
        let request = self.request(Method::POST, "/login/").json(&LoginRequest {
            email: email.into(),
            password: password.into(),
        });

        let response: AuthResponse = self.execute_public(request).await?;
        self.set_credentials(Credentials::new(
            response.tokens.access.clone(),
            response.tokens.refresh.clone(),
        ));
        Ok(response)
    }
}
