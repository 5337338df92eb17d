//! Genre queries

use mixtape_core::{error::Result, types::*};
use sqlx::{Row, SqliteExecutor, SqlitePool};

pub async fn create(executor: impl SqliteExecutor<'_>, genre: CreateGenre) -> Result<Genre> {
    let result = sqlx::query("INSERT INTO genres (label) VALUES (?)")
        .bind(&genre.label)
        .execute(executor)
        .await?;

    Ok(Genre {
        id: result.last_insert_rowid(),
        label: genre.label,
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Genre>> {
    let rows = sqlx::query("SELECT id, label FROM genres ORDER BY label")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| Genre {
            id: row.get("id"),
            label: row.get("label"),
        })
        .collect())
}

pub async fn get_by_id(executor: impl SqliteExecutor<'_>, id: GenreId) -> Result<Option<Genre>> {
    let row = sqlx::query("SELECT id, label FROM genres WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|row| Genre {
        id: row.get("id"),
        label: row.get("label"),
    }))
}

/// Exact-label lookup, used for duplicate checks and genre resolution
pub async fn find_by_label(
    executor: impl SqliteExecutor<'_>,
    label: &str,
) -> Result<Option<Genre>> {
    let row = sqlx::query("SELECT id, label FROM genres WHERE label = ?")
        .bind(label)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|row| Genre {
        id: row.get("id"),
        label: row.get("label"),
    }))
}
