//! Data structures for session-related entities.
//!
//! This module defines the role tags, the claims embedded in a bearer
//! token, and the derived in-memory session handed to authenticated
//! screens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::errors::SessionError;

/// Authorization tag carried in the token's `roles` claim.
///
/// The tag only controls which actions the screens offer; the service
/// enforces authorization on every call regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Claims embedded in the bearer token.
///
/// `iat` and `exp` are integer unix seconds. A token whose claims cannot be
/// represented here (unknown role tag, empty roles list, missing field) is
/// treated exactly like an absent credential by the callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub roles: Vec<Role>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Parses the claims segment of a bearer token.
    ///
    /// Only the payload segment is read; the signature is never verified on
    /// this side. Expiry is not checked here.
    pub fn decode(token: &str) -> Result<Self, SessionError> {
        let payload = token
            .split('.')
            .nth(1)
            .ok_or(SessionError::Malformed("missing claims segment"))?;

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| SessionError::Malformed("claims segment is not base64url"))?;

        let claims: Claims = serde_json::from_slice(&bytes)
            .map_err(|_| SessionError::Malformed("claims do not match the expected shape"))?;

        if claims.roles.is_empty() {
            return Err(SessionError::Malformed("roles list is empty"));
        }

        Ok(claims)
    }
}

/// An authenticated session. Lives in memory only; the raw token string is
/// the single thing ever persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
    /// First entry of the roles claim.
    pub role: Role,
}
