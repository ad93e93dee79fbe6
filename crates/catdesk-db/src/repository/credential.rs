//! SurrealDB implementation of [`CredentialStore`].
//!
//! Password hashing uses Argon2id with OWASP-recommended parameters
//! (memory: 19 MiB, iterations: 2, parallelism: 1). Salt is randomly
//! generated per hash. An optional pepper (server-side secret) can be
//! provided at construction time.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};
use catdesk_core::error::CatdeskResult;
use catdesk_core::models::user::{CreateUser, User, UserRole};
use catdesk_core::repository::CredentialStore;
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct UserRow {
    username: String,
    email: String,
    name: String,
    role: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct UserRowWithId {
    record_id: String,
    username: String,
    email: String,
    name: String,
    role: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

fn parse_role(s: &str) -> Result<UserRole, DbError> {
    match s {
        "Admin" => Ok(UserRole::Admin),
        "Sales" => Ok(UserRole::Sales),
        "AfterSales" => Ok(UserRole::AfterSales),
        other => Err(DbError::Migration(format!("unknown user role: {other}"))),
    }
}

fn role_to_string(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Admin",
        UserRole::Sales => "Sales",
        UserRole::AfterSales => "AfterSales",
    }
}

impl UserRow {
    fn into_user(self, id: Uuid) -> Result<User, DbError> {
        Ok(User {
            id,
            username: self.username,
            email: self.email,
            role: parse_role(&self.role)?,
            name: self.name,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Migration(format!("invalid UUID: {e}")))?;
        Ok(User {
            id,
            username: self.username,
            email: self.email,
            role: parse_role(&self.role)?,
            name: self.name,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}

/// Hash a password with Argon2id using OWASP-recommended parameters.
///
/// If a pepper is provided, it is prepended to the password before
/// hashing. The salt is randomly generated for each call.
fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, DbError> {
    // OWASP ASVS recommended: m=19456 (19 MiB), t=2, p=1
    let params = argon2::Params::new(19456, 2, 1, None)
        .map_err(|e| DbError::Hash(format!("argon2 params error: {e}")))?;
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let peppered: String;
    let input = match pepper {
        Some(p) => {
            peppered = format!("{p}{password}");
            peppered.as_bytes()
        }
        None => password.as_bytes(),
    };

    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    let hash = argon2
        .hash_password(input, &salt)
        .map_err(|e| DbError::Hash(format!("password hash error: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a password against an Argon2id hash.
///
/// Public for tests and tooling; login flows go through
/// [`CredentialStore::authenticate`].
pub fn verify_password(password: &str, hash: &str, pepper: Option<&str>) -> Result<bool, DbError> {
    use argon2::PasswordVerifier;

    let peppered: String;
    let input = match pepper {
        Some(p) => {
            peppered = format!("{p}{password}");
            peppered.as_bytes()
        }
        None => password.as_bytes(),
    };

    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| DbError::Hash(format!("invalid hash format: {e}")))?;

    let argon2 = Argon2::default();
    match argon2.verify_password(input, &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(DbError::Hash(format!("verify error: {e}"))),
    }
}

/// SurrealDB implementation of the credential store.
#[derive(Clone)]
pub struct SurrealCredentialStore<C: Connection> {
    db: Surreal<C>,
    /// Optional server-side pepper for password hashing.
    pepper: Option<String>,
}

impl<C: Connection> SurrealCredentialStore<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db, pepper: None }
    }

    pub fn with_pepper(db: Surreal<C>, pepper: String) -> Self {
        Self {
            db,
            pepper: Some(pepper),
        }
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<UserRowWithId>, DbError> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 WHERE username = $username",
            )
            .bind(("username", username.to_string()))
            .await?;

        let rows: Vec<UserRowWithId> = result.take(0)?;
        Ok(rows.into_iter().next())
    }
}

impl<C: Connection> CredentialStore for SurrealCredentialStore<C> {
    async fn authenticate(&self, username: &str, password: &str) -> CatdeskResult<Option<User>> {
        let Some(row) = self.get_by_username(username).await? else {
            return Ok(None);
        };

        if !verify_password(password, &row.password_hash, self.pepper.as_deref())? {
            return Ok(None);
        }

        Ok(Some(row.try_into_user()?))
    }

    async fn create(&self, input: CreateUser) -> CatdeskResult<User> {
        // The unique index enforces this too, but checking here lets
        // the caller see a clean AlreadyExists instead of a raw index
        // violation.
        if self.get_by_username(&input.username).await?.is_some() {
            return Err(DbError::AlreadyExists {
                entity: "user".into(),
            }
            .into());
        }

        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let password_hash = hash_password(&input.password, self.pepper.as_deref())?;

        let result = self
            .db
            .query(
                "CREATE type::record('user', $id) SET \
                 username = $username, email = $email, \
                 name = $name, role = $role, \
                 password_hash = $password_hash, \
                 is_active = true",
            )
            .bind(("id", id_str.clone()))
            .bind(("username", input.username))
            .bind(("email", input.email))
            .bind(("name", input.name))
            .bind(("role", role_to_string(input.role).to_string()))
            .bind(("password_hash", password_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: id_str,
        })?;

        Ok(row.into_user(id)?)
    }

    async fn list(&self) -> CatdeskResult<Vec<User>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;

        let users = rows
            .into_iter()
            .map(|row| row.try_into_user())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(users)
    }

    async fn set_active(&self, id: Uuid, active: bool) -> CatdeskResult<()> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("UPDATE type::record('user', $id) SET is_active = $active")
            .bind(("id", id_str.clone()))
            .bind(("active", active))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "user".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> CatdeskResult<()> {
        // Hard delete: the record is removed, not disabled.
        self.db
            .query("DELETE type::record('user', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
