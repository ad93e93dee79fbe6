//! Integration tests for the credential stores using in-memory
//! SurrealDB, plus the fallback store.

use catdesk_core::error::CatdeskError;
use catdesk_core::models::user::{CreateUser, UserRole};
use catdesk_core::repository::CredentialStore;
use catdesk_db::repository::verify_password;
use catdesk_db::{MemoryCredentialStore, SurrealCredentialStore};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use surrealdb_types::SurrealValue;
use uuid::Uuid;

/// Helper: spin up an in-memory DB and run migrations.
async fn setup() -> SurrealCredentialStore<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    catdesk_db::run_migrations(&db).await.unwrap();
    SurrealCredentialStore::new(db)
}

fn sales_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.into(),
        email: format!("{username}@shop.test"),
        name: "Lin".into(),
        role: UserRole::Sales,
        password: "correct-horse-battery".into(),
    }
}

// -----------------------------------------------------------------------
// SurrealDB store
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_authenticate() {
    let store = setup().await;

    let user = store.create(sales_user("lin")).await.unwrap();
    assert_eq!(user.username, "lin");
    assert_eq!(user.role, UserRole::Sales);
    assert!(user.is_active);

    let found = store
        .authenticate("lin", "correct-horse-battery")
        .await
        .unwrap()
        .expect("user should authenticate");
    assert_eq!(found.id, user.id);
    assert_eq!(found.name, "Lin");
}

#[tokio::test]
async fn wrong_password_yields_none() {
    let store = setup().await;
    store.create(sales_user("lin")).await.unwrap();

    let result = store.authenticate("lin", "wrong").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn unknown_username_yields_none() {
    let store = setup().await;
    let result = store.authenticate("nobody", "anything").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let store = setup().await;
    store.create(sales_user("lin")).await.unwrap();

    let err = store.create(sales_user("lin")).await.unwrap_err();
    assert!(
        matches!(err, CatdeskError::AlreadyExists { .. }),
        "expected AlreadyExists, got: {err:?}"
    );
}

#[tokio::test]
async fn passwords_are_stored_hashed() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    catdesk_db::run_migrations(&db).await.unwrap();

    let store = SurrealCredentialStore::new(db.clone());
    store.create(sales_user("lin")).await.unwrap();

    #[derive(surrealdb_types::SurrealValue)]
    struct HashRow {
        password_hash: String,
    }

    let mut result = db
        .query("SELECT password_hash FROM user WHERE username = 'lin'")
        .await
        .unwrap();
    let rows: Vec<HashRow> = result.take(0).unwrap();
    let hash = &rows.first().expect("row should exist").password_hash;

    assert_ne!(hash, "correct-horse-battery");
    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("correct-horse-battery", hash, None).unwrap());
    assert!(!verify_password("wrong", hash, None).unwrap());
}

#[tokio::test]
async fn list_is_ordered_by_creation() {
    let store = setup().await;
    store.create(sales_user("first")).await.unwrap();
    store.create(sales_user("second")).await.unwrap();
    store.create(sales_user("third")).await.unwrap();

    let users = store.list().await.unwrap();
    let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(usernames, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn set_active_toggles_the_flag() {
    let store = setup().await;
    let user = store.create(sales_user("lin")).await.unwrap();

    store.set_active(user.id, false).await.unwrap();
    let users = store.list().await.unwrap();
    assert!(!users[0].is_active);

    // Authenticate still matches; the session core decides what a
    // disabled account means.
    let found = store
        .authenticate("lin", "correct-horse-battery")
        .await
        .unwrap()
        .unwrap();
    assert!(!found.is_active);

    store.set_active(user.id, true).await.unwrap();
    let users = store.list().await.unwrap();
    assert!(users[0].is_active);
}

#[tokio::test]
async fn set_active_on_a_missing_user_is_not_found() {
    let store = setup().await;
    let err = store.set_active(Uuid::new_v4(), false).await.unwrap_err();
    assert!(matches!(err, CatdeskError::NotFound { .. }));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let store = setup().await;
    let user = store.create(sales_user("lin")).await.unwrap();

    store.delete(user.id).await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
    assert!(
        store
            .authenticate("lin", "correct-horse-battery")
            .await
            .unwrap()
            .is_none()
    );

    // The username is free again after a hard delete.
    store.create(sales_user("lin")).await.unwrap();
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    catdesk_db::run_migrations(&db).await.unwrap();
    catdesk_db::run_migrations(&db).await.unwrap();
}

// -----------------------------------------------------------------------
// In-memory fallback store
// -----------------------------------------------------------------------

#[tokio::test]
async fn demo_table_has_one_account_per_role() {
    let store = MemoryCredentialStore::with_demo_users();
    let users = store.list().await.unwrap();

    let roles: Vec<UserRole> = users.iter().map(|u| u.role).collect();
    assert_eq!(
        roles,
        vec![UserRole::Admin, UserRole::Sales, UserRole::AfterSales]
    );

    for username in ["admin", "sales", "aftersales"] {
        let found = store
            .authenticate(username, "password123")
            .await
            .unwrap();
        assert!(found.is_some(), "{username} should authenticate");
    }
}

#[tokio::test]
async fn fallback_matches_passwords_exactly() {
    let store = MemoryCredentialStore::with_demo_users();
    assert!(
        store
            .authenticate("admin", "Password123")
            .await
            .unwrap()
            .is_none()
    );
    assert!(store.authenticate("admin", "").await.unwrap().is_none());
}

#[tokio::test]
async fn fallback_supports_the_full_admin_surface() {
    let store = MemoryCredentialStore::new();

    let user = store.create(sales_user("lin")).await.unwrap();
    assert_eq!(store.list().await.unwrap().len(), 1);

    let err = store.create(sales_user("lin")).await.unwrap_err();
    assert!(matches!(err, CatdeskError::AlreadyExists { .. }));

    store.set_active(user.id, false).await.unwrap();
    assert!(!store.list().await.unwrap()[0].is_active);

    store.delete(user.id).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());

    let err = store.set_active(user.id, false).await.unwrap_err();
    assert!(matches!(err, CatdeskError::NotFound { .. }));
}
