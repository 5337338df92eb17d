//! User queries
//!
//! The password digest is only ever read through [`get_password_hash`]; the
//! `User` type handed to callers never carries it.

use chrono::Utc;
use mixtape_core::{error::Result, types::*};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor, SqlitePool};

fn user_from_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        created_at: row.get("created_at"),
    }
}

pub async fn create(executor: impl SqliteExecutor<'_>, user: CreateUser) -> Result<User> {
    let created_at = Utc::now();
    let result = sqlx::query("INSERT INTO users (email, password_hash, created_at) VALUES (?, ?, ?)")
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(created_at)
        .execute(executor)
        .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        email: user.email,
        created_at,
    })
}

pub async fn get_by_id(executor: impl SqliteExecutor<'_>, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, email, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|row| user_from_row(&row)))
}

pub async fn find_by_email(
    executor: impl SqliteExecutor<'_>,
    email: &str,
) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, email, created_at FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|row| user_from_row(&row)))
}

/// Get a user's password hash for credential verification
pub async fn get_password_hash(
    executor: impl SqliteExecutor<'_>,
    user_id: UserId,
) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, email, created_at FROM users ORDER BY email")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(user_from_row).collect())
}
