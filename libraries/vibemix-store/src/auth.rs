//! Identity-provider operations.

use crate::error::{Result, StoreClientError};
use crate::types::{auth_reason_from_code, AuthErrorBody, CredentialsRequest, SignInResponse};
use reqwest::Client;
use tracing::{debug, info, warn};
use vibemix_core::AuthReason;

/// Auth client for the identity provider endpoints.
pub(crate) struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Sign in with email and password.
    pub(crate) async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse> {
        self.submit_credentials("login", email, password).await
    }

    /// Register a new account; the provider signs it in on success.
    pub(crate) async fn sign_up(&self, email: &str, password: &str) -> Result<SignInResponse> {
        self.submit_credentials("register", email, password).await
    }

    async fn submit_credentials(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<SignInResponse> {
        let url = format!("{}/api/auth/{}", self.base_url, endpoint);
        debug!(url = %url, email = %email, "Submitting credentials");

        let request = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    StoreClientError::Unreachable(e.to_string())
                } else {
                    StoreClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let signed_in: SignInResponse = response.json().await.map_err(|e| {
                StoreClientError::ParseError(format!("Failed to parse sign-in response: {}", e))
            })?;

            info!(
                user_id = %signed_in.user_id,
                email = %signed_in.email,
                "Signed in"
            );

            Ok(signed_in)
        } else if status.as_u16() == 400 || status.as_u16() == 401 {
            let reason = response
                .json::<AuthErrorBody>()
                .await
                .ok()
                .and_then(|body| auth_reason_from_code(&body.code))
                .unwrap_or(AuthReason::InvalidCredential);

            warn!(status = %status, reason = %reason, "Credentials rejected");
            Err(StoreClientError::AuthRejected(reason))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(StoreClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
