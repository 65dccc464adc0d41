//! SQLite pool initialization.
//!
//! The connection string comes from `DATABASE_URL` and defaults to a local
//! database file. Migrations from `migrations/` are applied on startup, so
//! a fresh checkout boots against an empty file.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if the database cannot be opened or migrated;
//! there is nothing useful the server can do without its store.

use sqlx::SqlitePool;
use std::env;

pub async fn init_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:coursebook.db?mode=rwc".to_string());

    let pool = SqlitePool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
