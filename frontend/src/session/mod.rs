//! Session handling for the client.
//!
//! Covers the whole credential lifecycle: the on-disk token slot, claim
//! decoding, and the guard that turns a stored token into an authenticated
//! session or a reason to sign in again.

pub mod errors;
pub mod guard;
pub mod models;
pub mod store;

// Re-exports for convenience
pub use errors::*;
pub use guard::*;
pub use models::*;
pub use store::*;

#[cfg(test)]
pub(crate) mod testing {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    use super::models::{Claims, Role};

    /// Builds a structurally valid token carrying the given claims. The
    /// signature segment is a placeholder; nothing on this side checks it.
    pub fn token_with(claims: &Claims) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
        format!("{header}.{payload}.unsigned")
    }

    pub fn claims(sub: &str, roles: Vec<Role>, exp: i64) -> Claims {
        Claims {
            sub: sub.to_owned(),
            roles,
            iat: exp - 3_600,
            exp,
        }
    }
}
