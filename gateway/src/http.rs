//! HTTP implementation of the registry gateway.
//!
//! This file contains the complete concrete implementation of the
//! `RegistryApi` trait over reqwest: request construction, bearer
//! authentication, and translation of non-success responses into
//! `GatewayError`. One attempt per call; no timeout, retry, or backoff.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Response;

use crate::errors::GatewayError;
use crate::models::{ErrorBody, LoginRequest, Patient, PatientDraft, TokenResponse};
use crate::RegistryApi;

/// Client for one patient-registry deployment, addressed by its base URL.
#[derive(Debug)]
pub struct HttpRegistry {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRegistry {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Drains a non-success response into the undifferentiated status error,
    /// keeping the server-sent message when the body carries one.
    async fn status_error(response: Response) -> GatewayError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        GatewayError::Status { status, message }
    }
}

#[async_trait]
impl RegistryApi for HttpRegistry {
    async fn login(&self, username: &str, password: &str) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::status_error(response).await;
            tracing::warn!("login rejected by the registry service: {err}");
            return Err(err);
        }

        let body: TokenResponse = response.json().await?;
        Ok(body.token)
    }

    async fn list_patients(&self, token: &str) -> Result<Vec<Patient>, GatewayError> {
        let response = self
            .http
            .get(self.endpoint("/patients"))
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::status_error(response).await;
            tracing::warn!("patient list fetch failed: {err}");
            return Err(err);
        }

        Ok(response.json().await?)
    }

    async fn create_patient(&self, draft: &PatientDraft, token: &str) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(self.endpoint("/patients"))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::status_error(response).await;
            tracing::warn!("patient creation failed: {err}");
            return Err(err);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_cleanly_regardless_of_trailing_slash() {
        let plain = HttpRegistry::new("http://127.0.0.1:8080");
        assert_eq!(plain.endpoint("/patients"), "http://127.0.0.1:8080/patients");

        let slashed = HttpRegistry::new("http://127.0.0.1:8080/");
        assert_eq!(
            slashed.endpoint("/auth/login"),
            "http://127.0.0.1:8080/auth/login"
        );
    }
}
