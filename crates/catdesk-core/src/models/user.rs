//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staff role. Assigned once at creation; no role-change operation
/// exists anywhere in the system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Sales,
    AfterSales,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Login key. Uniqueness is enforced by the credential store.
    pub username: String,
    pub email: String,
    pub role: UserRole,
    /// Display name, shown in the UI and in welcome notices.
    pub name: String,
    /// Soft-disable flag. Disabled accounts cannot log in.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Raw password (hashed by the credential store before storage).
    pub password: String,
}
