//! Credential-store implementations.

mod credential;
mod memory;

pub use credential::{SurrealCredentialStore, verify_password};
pub use memory::MemoryCredentialStore;
