//! Credential-store contract.
//!
//! All operations are async. Password hashing and username uniqueness
//! are entirely the store's responsibility — callers never see stored
//! hashes, and the session layer only handles a plaintext password for
//! the duration of a single `authenticate` call.

use uuid::Uuid;

use crate::error::CatdeskResult;
use crate::models::user::{CreateUser, User};

pub trait CredentialStore: Send + Sync {
    /// Look up a user by username and verify the password.
    ///
    /// Returns `Ok(None)` for an unknown username or a wrong password;
    /// the two cases are indistinguishable to callers.
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = CatdeskResult<Option<User>>> + Send;

    /// Create a user. A duplicate username yields `AlreadyExists`.
    fn create(&self, input: CreateUser) -> impl Future<Output = CatdeskResult<User>> + Send;

    /// All users, ordered by creation time.
    fn list(&self) -> impl Future<Output = CatdeskResult<Vec<User>>> + Send;

    /// Soft-disable or re-enable an account.
    fn set_active(
        &self,
        id: Uuid,
        active: bool,
    ) -> impl Future<Output = CatdeskResult<()>> + Send;

    /// Hard delete — the record is removed, not disabled.
    fn delete(&self, id: Uuid) -> impl Future<Output = CatdeskResult<()>> + Send;
}
