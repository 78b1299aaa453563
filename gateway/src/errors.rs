//! Custom error types specific to the `gateway` crate.
//!
//! This module defines the errors that can occur while talking to the
//! patient-registry service, providing a unified error handling mechanism
//! for every call the client issues.

use thiserror::Error;

/// Failure of a single registry call.
///
/// Non-success HTTP statuses are one variant: the client reports 401 and
/// 500 identically and never retries. The numeric code and any server-sent
/// message ride along for diagnostics and for surfacing mutation failures
/// verbatim.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed (connection refused, DNS, broken body).
    #[error("could not reach the registry service: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("registry service answered with HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
}

impl GatewayError {
    /// Message the server attached to a non-success response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { message, .. } => message.as_deref(),
            GatewayError::Transport(_) => None,
        }
    }
}
