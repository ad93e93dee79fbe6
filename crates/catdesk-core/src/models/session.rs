//! Session state model.

use serde::{Deserialize, Serialize};

use super::user::User;

/// The single process-wide session.
///
/// Invariant: `is_authenticated` implies `user` is set. There is no
/// persistence across restarts — a fresh process starts signed out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True only in the transient state between "credentials accepted"
    /// and "code accepted" for non-admin logins while the verification
    /// gate is on.
    pub verification_required: bool,
}
