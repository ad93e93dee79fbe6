//! CATDESK Database — SurrealDB connection management, schema
//! migrations, and credential-store implementations.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - The database credential store ([`SurrealCredentialStore`])
//! - The in-memory fallback store ([`MemoryCredentialStore`])
//! - One-shot backend selection at startup ([`select_store`])

mod connection;
mod error;
pub mod repository;
mod schema;
mod select;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use repository::{MemoryCredentialStore, SurrealCredentialStore};
pub use schema::run_migrations;
pub use select::{AnyCredentialStore, select_store};
