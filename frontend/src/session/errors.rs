//! Custom error types specific to session validation failures.
//!
//! This module defines the ways a stored credential can fail to produce a
//! usable session: absent, structurally unreadable, expired, or the storage
//! slot itself being unreachable.

use thiserror::Error;

/// Why a stored credential did not yield an active session.
///
/// Every variant routes the user back to the sign-in screen; the
/// distinctions exist for diagnostics, not for the UI.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no stored credential")]
    Missing,
    #[error("stored credential is malformed: {0}")]
    Malformed(&'static str),
    #[error("stored credential expired at {expired_at} (now {now})")]
    Expired { expired_at: i64, now: i64 },
    #[error("credential storage is unreachable: {0}")]
    Storage(#[from] std::io::Error),
}
