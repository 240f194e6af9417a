//! The local record store: a single `users` collection over embedded SQLite.
//!
//! Opening the store is the readiness signal. `open()` only returns once the
//! database file exists and migrations have run, so every operation on a
//! `UserStore` value is operating on a ready store by construction - there is
//! no separate "initialized" state for callers to race against.

use crate::{DbError, Result as DbErrorResult};

use doorman_core::{LoginRequest, UserRecord};

use std::panic::Location;
use std::path::Path;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub struct UserStore {
    pool: SqlitePool,
}

/// Raw row shape; `created_at` is stored as RFC 3339 text.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password: String,
    full_name: String,
    phone: String,
    created_at: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<UserRecord> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DbError::Initialization {
                message: format!("Invalid timestamp in users.created_at: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(UserRecord {
            id: row.id,
            username: row.username,
            email: row.email,
            password: row.password,
            full_name: row.full_name,
            phone: row.phone,
            created_at,
        })
    }
}

impl UserStore {
    /// Open (creating if absent) the store at `path` and run migrations.
    pub async fn open(path: impl AsRef<Path>) -> DbErrorResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create store directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        Self::connect(options, 5).await
    }

    /// Open an in-memory store (tests, throwaway sessions).
    pub async fn open_in_memory() -> DbErrorResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // In-memory databases exist per-connection; a larger pool would see
        // a different (empty) database on each checkout.
        Self::connect(options, 1).await
    }

    async fn connect(options: SqliteConnectOptions, max_connections: u32) -> DbErrorResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { pool })
    }

    /// Insert a new user, stamping `created_at` and assigning the next id.
    ///
    /// Returns the stored record. Fails with [`DbError::DuplicateEmail`] when
    /// a record with the same email already exists.
    pub async fn add_user(&self, request: &LoginRequest) -> DbErrorResult<UserRecord> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
                INSERT INTO users (username, email, password, full_name, phone, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.password)
        .bind(&request.full_name)
        .bind(&request.phone)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_insert_error(e, &request.email))?;

        let id = result.last_insert_rowid();
        log::debug!("User added with id {}", id);

        Ok(UserRecord {
            id,
            username: request.username.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
            full_name: request.full_name.clone(),
            phone: request.phone.clone(),
            created_at,
        })
    }

    /// Insert a record whose id was assigned elsewhere (remote login mirror).
    ///
    /// The caller decides whether a failure here matters; after a remote
    /// success the mirror is advisory only.
    pub async fn mirror_user(&self, record: &UserRecord) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, username, email, password, full_name, phone, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id)
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.password)
        .bind(&record.full_name)
        .bind(&record.phone)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_insert_error(e, &record.email))?;

        Ok(())
    }

    /// The most recently inserted record, or `None` for an empty store.
    pub async fn latest_user(&self) -> DbErrorResult<Option<UserRecord>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, username, email, password, full_name, phone, created_at
                FROM users
                ORDER BY id DESC
                LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    /// All records in insertion order.
    pub async fn all_users(&self) -> DbErrorResult<Vec<UserRecord>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT id, username, email, password, full_name, phone, created_at
                FROM users
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(UserRecord::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn user_count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Empty the collection, returning how many rows were removed.
    /// Irreversible.
    pub async fn clear_all(&self) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    #[track_caller]
    fn map_insert_error(e: sqlx::Error, email: &str) -> DbError {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DbError::DuplicateEmail {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => DbError::from(e),
        }
    }
}
