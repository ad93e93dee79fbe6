//! CATDESK Core — domain models, the credential-store contract, and
//! shared error types.

pub mod error;
pub mod models;
pub mod repository;
