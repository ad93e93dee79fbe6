//! One-shot credential-store selection at startup.

use catdesk_core::error::CatdeskResult;
use catdesk_core::models::user::{CreateUser, User};
use catdesk_core::repository::CredentialStore;
use surrealdb::engine::remote::ws::Client;
use tracing::{info, warn};
use uuid::Uuid;

use crate::connection::{DbConfig, DbManager};
use crate::repository::{MemoryCredentialStore, SurrealCredentialStore};
use crate::schema::run_migrations;

/// The store chosen by [`select_store`]. Delegates every operation to
/// the selected backend.
pub enum AnyCredentialStore {
    Remote(SurrealCredentialStore<Client>),
    Fallback(MemoryCredentialStore),
}

impl AnyCredentialStore {
    /// True when running against the in-memory demo table.
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnyCredentialStore::Fallback(_))
    }
}

impl CredentialStore for AnyCredentialStore {
    async fn authenticate(&self, username: &str, password: &str) -> CatdeskResult<Option<User>> {
        match self {
            AnyCredentialStore::Remote(store) => store.authenticate(username, password).await,
            AnyCredentialStore::Fallback(store) => store.authenticate(username, password).await,
        }
    }

    async fn create(&self, input: CreateUser) -> CatdeskResult<User> {
        match self {
            AnyCredentialStore::Remote(store) => store.create(input).await,
            AnyCredentialStore::Fallback(store) => store.create(input).await,
        }
    }

    async fn list(&self) -> CatdeskResult<Vec<User>> {
        match self {
            AnyCredentialStore::Remote(store) => store.list().await,
            AnyCredentialStore::Fallback(store) => store.list().await,
        }
    }

    async fn set_active(&self, id: Uuid, active: bool) -> CatdeskResult<()> {
        match self {
            AnyCredentialStore::Remote(store) => store.set_active(id, active).await,
            AnyCredentialStore::Fallback(store) => store.set_active(id, active).await,
        }
    }

    async fn delete(&self, id: Uuid) -> CatdeskResult<()> {
        match self {
            AnyCredentialStore::Remote(store) => store.delete(id).await,
            AnyCredentialStore::Fallback(store) => store.delete(id).await,
        }
    }
}

/// Probe the database once and pick the backend.
///
/// A reachable SurrealDB with migrations applied wins; anything else
/// falls back to the in-memory demo table. The session core never
/// branches on connectivity again after this call.
pub async fn select_store(config: &DbConfig) -> AnyCredentialStore {
    match DbManager::connect(config).await {
        Ok(manager) => match run_migrations(manager.client()).await {
            Ok(()) => {
                info!("using database credential store");
                AnyCredentialStore::Remote(SurrealCredentialStore::new(manager.client().clone()))
            }
            Err(e) => {
                warn!(error = %e, "migrations failed, falling back to demo store");
                AnyCredentialStore::Fallback(MemoryCredentialStore::with_demo_users())
            }
        },
        Err(e) => {
            warn!(error = %e, "database unreachable, falling back to demo store");
            AnyCredentialStore::Fallback(MemoryCredentialStore::with_demo_users())
        }
    }
}
