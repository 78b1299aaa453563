//! Core `gateway` crate for abstracting patient-registry interactions.
//!
//! This crate defines the `RegistryApi` trait, which outlines the operations
//! the remote patient-management service exposes to this client, and provides
//! a central point for accessing the concrete HTTP implementation.

use async_trait::async_trait;

pub mod errors;
pub mod http;
pub mod models;

pub use errors::GatewayError;
pub use http::HttpRegistry;
pub use models::{Patient, PatientDraft};

/// Operations of the patient-registry service, seen from the client side.
///
/// All business rules (credential checks, persistence, authorization) live
/// behind these calls on the server; implementations only move requests and
/// responses.
#[async_trait]
pub trait RegistryApi {
    /// Exchanges a username/password pair for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<String, GatewayError>;

    /// Fetches the full patient collection with bearer authentication.
    async fn list_patients(&self, token: &str) -> Result<Vec<Patient>, GatewayError>;

    /// Submits a candidate patient. The caller is expected to re-fetch the
    /// list afterwards; no response body is interpreted on success.
    async fn create_patient(&self, draft: &PatientDraft, token: &str) -> Result<(), GatewayError>;
}
