//! Wire-level data models for the `gateway` crate.
//!
//! These models mirror the JSON bodies exchanged with the patient-registry
//! service. Struct fields use this crate's naming; serde renames map them
//! onto the service's wire keys, which are owned by the remote side and
//! must not drift.

use serde::{Deserialize, Serialize};

/// A patient record as returned by the registry service.
///
/// Every field is server-owned; the client never fabricates an `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "cin")]
    pub national_id: String,
    #[serde(rename = "codeAssure")]
    pub insurance_code: String,
}

/// A candidate patient for creation requests. Carries no `id`; the server
/// assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientDraft {
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "cin")]
    pub national_id: String,
    #[serde(rename = "codeAssure")]
    pub insurance_code: String,
}

impl PatientDraft {
    /// True when all four required fields carry a non-empty value.
    pub fn is_complete(&self) -> bool {
        !self.last_name.is_empty()
            && !self.first_name.is_empty()
            && !self.national_id.is_empty()
            && !self.insurance_code.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body returned by the auth endpoint on a successful login.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

/// Error body some registry endpoints attach to non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
