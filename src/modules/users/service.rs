use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{NewUser, User};

/// Internal row for the authentication path; the only place the stored
/// digest is ever read.
#[derive(Debug, sqlx::FromRow)]
pub struct UserWithPassword {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl UserWithPassword {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email_address: self.email_address,
        }
    }
}

pub struct UserService;

impl UserService {
    /// Persists a signup. The password is hashed before it reaches the
    /// store; the duplicate-email case is decided by the store's uniqueness
    /// constraint so concurrent signups cannot both succeed.
    #[instrument(skip(db, new_user))]
    pub async fn create_user(db: &SqlitePool, new_user: NewUser) -> Result<User, AppError> {
        let hashed_password = hash_password(&new_user.password)?;
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, first_name, last_name, email_address, password, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, first_name, last_name, email_address",
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email_address)
        .bind(&hashed_password)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                AppError::conflict("The email address provided is already in use")
            } else {
                AppError::internal(anyhow::Error::new(e).context("Failed to insert user"))
            }
        })?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &SqlitePool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email_address FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }

    /// Case-sensitive exact match on email, digest included. Used by the
    /// authenticator only.
    #[instrument(skip(db, email))]
    pub async fn find_by_email_with_password(
        db: &SqlitePool,
        email: &str,
    ) -> Result<Option<UserWithPassword>, AppError> {
        let record = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, first_name, last_name, email_address, password
             FROM users WHERE email_address = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(record)
    }
}
