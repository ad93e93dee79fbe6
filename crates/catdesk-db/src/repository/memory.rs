//! In-memory fallback implementation of [`CredentialStore`].
//!
//! Used when the database is unreachable at startup. Holds a plain
//! table of users with plaintext passwords for local matching — the
//! same shape as the database store minus hashing. The demo seed
//! provides one account per role, all with the password
//! `password123`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use catdesk_core::error::{CatdeskError, CatdeskResult};
use catdesk_core::models::user::{CreateUser, User, UserRole};
use catdesk_core::repository::CredentialStore;
use chrono::Utc;
use uuid::Uuid;

/// A stored user plus its plaintext password.
#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password: String,
}

#[derive(Debug)]
pub struct MemoryCredentialStore {
    users: Mutex<Vec<StoredUser>>,
}

impl MemoryCredentialStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// A store seeded with the fixed demo staff table.
    pub fn with_demo_users() -> Self {
        let now = Utc::now();
        let demo = |n: u128, username: &str, name: &str, role: UserRole| StoredUser {
            user: User {
                id: Uuid::from_u128(n),
                username: username.into(),
                email: format!("{username}@catdesk.local"),
                role,
                name: name.into(),
                is_active: true,
                created_at: now,
            },
            password: "password123".into(),
        };

        Self {
            users: Mutex::new(vec![
                demo(1, "admin", "Store Admin", UserRole::Admin),
                demo(2, "sales", "Sales Desk", UserRole::Sales),
                demo(3, "aftersales", "After-sales Desk", UserRole::AfterSales),
            ]),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StoredUser>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn authenticate(&self, username: &str, password: &str) -> CatdeskResult<Option<User>> {
        let users = self.lock();
        Ok(users
            .iter()
            .find(|s| s.user.username == username && s.password == password)
            .map(|s| s.user.clone()))
    }

    async fn create(&self, input: CreateUser) -> CatdeskResult<User> {
        let mut users = self.lock();
        if users.iter().any(|s| s.user.username == input.username) {
            return Err(CatdeskError::AlreadyExists {
                entity: "user".into(),
            });
        }

        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            role: input.role,
            name: input.name,
            is_active: true,
            created_at: Utc::now(),
        };
        users.push(StoredUser {
            user: user.clone(),
            password: input.password,
        });
        Ok(user)
    }

    async fn list(&self) -> CatdeskResult<Vec<User>> {
        // Insertion order is creation order.
        let users = self.lock();
        Ok(users.iter().map(|s| s.user.clone()).collect())
    }

    async fn set_active(&self, id: Uuid, active: bool) -> CatdeskResult<()> {
        let mut users = self.lock();
        match users.iter_mut().find(|s| s.user.id == id) {
            Some(stored) => {
                stored.user.is_active = active;
                Ok(())
            }
            None => Err(CatdeskError::NotFound {
                entity: "user".into(),
                id: id.to_string(),
            }),
        }
    }

    async fn delete(&self, id: Uuid) -> CatdeskResult<()> {
        let mut users = self.lock();
        users.retain(|s| s.user.id != id);
        Ok(())
    }
}
