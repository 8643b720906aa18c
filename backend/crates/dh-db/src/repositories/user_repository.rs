use crate::{DbError, Result as DbErrorResult};

use dh_core::{Identity, StoreResult, UserStore};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, password, full_name, is_admin, is_email_confirmed, \
                            email_confirmation_token, created_at";

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    password: String,
    full_name: String,
    is_admin: bool,
    is_email_confirmed: bool,
    email_confirmation_token: Option<String>,
    created_at: i64,
}

impl UserRow {
    #[track_caller]
    fn into_identity(self) -> DbErrorResult<Identity> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DbError::corrupt_row(&self.id, format!("invalid id: {e}")))?;
        let created_at = DateTime::from_timestamp(self.created_at, 0)
            .ok_or_else(|| DbError::corrupt_row(&self.id, "created_at out of range"))?;

        Ok(Identity {
            id,
            email: self.email,
            password: self.password,
            full_name: self.full_name,
            is_admin: self.is_admin,
            is_email_confirmed: self.is_email_confirmed,
            email_confirmation_token: self.email_confirmation_token,
            created_at,
        })
    }
}

/// SQLite-backed identity store
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
              INSERT INTO dh_users (
                  id, email, password, full_name,
                  is_admin, is_email_confirmed, email_confirmation_token, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.email)
        .bind(&identity.password)
        .bind(&identity.full_name)
        .bind(identity.is_admin)
        .bind(identity.is_email_confirmed)
        .bind(&identity.email_confirmation_token)
        .bind(identity.created_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DbError::Duplicate {
                    field: "email".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM dh_users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_identity).transpose()
    }

    pub async fn find_unconfirmed_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM dh_users WHERE email = ? AND is_email_confirmed = 0"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_identity).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM dh_users WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_identity).transpose()
    }

    /// Writes every mutable column. Email and id are the record's identity
    /// and are never changed here.
    pub async fn update(&self, identity: &Identity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE dh_users
              SET password = ?, full_name = ?, is_admin = ?,
                  is_email_confirmed = ?, email_confirmation_token = ?
              WHERE id = ?
              "#,
        )
        .bind(&identity.password)
        .bind(&identity.full_name)
        .bind(identity.is_admin)
        .bind(identity.is_email_confirmed)
        .bind(&identity.email_confirmation_token)
        .bind(identity.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        Ok(UserRepository::find_by_email(self, email).await?)
    }

    async fn find_unconfirmed_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        Ok(UserRepository::find_unconfirmed_by_email(self, email).await?)
    }

    async fn insert(&self, identity: &Identity) -> StoreResult<()> {
        Ok(self.create(identity).await?)
    }

    async fn update(&self, identity: &Identity) -> StoreResult<()> {
        Ok(UserRepository::update(self, identity).await?)
    }
}
