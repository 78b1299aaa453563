//! Session resolution for screens that require an authenticated user.
//!
//! Loads the stored token, decodes its claims, and checks expiry. Any
//! failure along the way leaves the store empty so stale credentials do
//! not linger, and the caller falls back to the sign-in flow.

use super::errors::SessionError;
use super::models::{Claims, Session};
use super::store::TokenStore;

/// Resolves the current session from the store, or reports why there is
/// none. On any failure other than an unreadable store the slot is cleared.
pub fn resolve_session(store: &TokenStore) -> Result<Session, SessionError> {
    resolve_at(store, chrono::Utc::now().timestamp())
}

fn resolve_at(store: &TokenStore, now: i64) -> Result<Session, SessionError> {
    let token = match store.load() {
        Ok(Some(token)) => token,
        Ok(None) => return Err(SessionError::Missing),
        Err(err) => {
            tracing::warn!(error = %err, "credential storage could not be read");
            return Err(SessionError::Storage(err));
        }
    };

    let claims = match Claims::decode(&token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, "discarding undecodable credential");
            discard(store);
            return Err(err);
        }
    };

    if claims.exp <= now {
        tracing::debug!(expired_at = claims.exp, now, "discarding expired credential");
        discard(store);
        return Err(SessionError::Expired {
            expired_at: claims.exp,
            now,
        });
    }

    // Decoding rejected empty roles lists, so the first entry exists.
    let role = claims.roles[0];
    Ok(Session { token, claims, role })
}

fn discard(store: &TokenStore) {
    if let Err(err) = store.clear() {
        tracing::warn!(error = %err, "failed to clear credential storage");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::models::Role;
    use crate::session::testing;

    fn store_in(dir: &tempfile::TempDir) -> TokenStore {
        TokenStore::new(dir.path().join("token"))
    }

    #[test]
    fn reports_missing_when_the_slot_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let err = resolve_at(&store, 1_000).unwrap_err();
        assert!(matches!(err, SessionError::Missing));
    }

    #[test]
    fn resolves_a_valid_token_into_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let claims = testing::claims("amina", vec![Role::Admin, Role::User], 2_000);
        let token = testing::token_with(&claims);
        store.save(&token).unwrap();

        let session = resolve_at(&store, 1_000).unwrap();
        assert_eq!(session.token, token);
        assert_eq!(session.claims, claims);
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn rejects_an_expired_token_and_clears_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let claims = testing::claims("amina", vec![Role::User], 100);
        store.save(&testing::token_with(&claims)).unwrap();

        let err = resolve_at(&store, 200).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Expired {
                expired_at: 100,
                now: 200
            }
        ));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn a_token_expiring_exactly_now_counts_as_expired() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let claims = testing::claims("amina", vec![Role::User], 500);
        store.save(&testing::token_with(&claims)).unwrap();

        let err = resolve_at(&store, 500).unwrap_err();
        assert!(matches!(err, SessionError::Expired { .. }));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn discards_a_token_that_does_not_decode() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("not-a-real-token").unwrap();

        let err = resolve_at(&store, 1_000).unwrap_err();
        assert!(matches!(err, SessionError::Malformed(_)));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn a_whitespace_only_slot_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("   ").unwrap();

        let err = resolve_at(&store, 1_000).unwrap_err();
        assert!(matches!(err, SessionError::Missing));
    }
}
