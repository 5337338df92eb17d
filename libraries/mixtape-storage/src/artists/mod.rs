//! Artist queries

use chrono::Utc;
use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqliteExecutor, SqlitePool};

fn artist_from_row(row: &SqliteRow) -> Artist {
    Artist {
        id: row.get("id"),
        name: row.get("name"),
        created_by: row.get("created_by"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub async fn create(
    executor: impl SqliteExecutor<'_>,
    artist: CreateArtist,
    created_by: UserId,
) -> Result<Artist> {
    let created_at = Utc::now();
    let result = sqlx::query("INSERT INTO artists (name, created_by, created_at) VALUES (?, ?, ?)")
        .bind(&artist.name)
        .bind(created_by)
        .bind(created_at)
        .execute(executor)
        .await?;

    Ok(Artist {
        id: result.last_insert_rowid(),
        name: artist.name,
        created_by,
        created_at,
        updated_at: None,
    })
}

pub async fn get_by_id(executor: impl SqliteExecutor<'_>, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query(
        "SELECT id, name, created_by, created_at, updated_at FROM artists WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(|row| artist_from_row(&row)))
}

/// Exact-name lookup, used by the duplicate check on create
pub async fn find_by_name(
    executor: impl SqliteExecutor<'_>,
    name: &str,
) -> Result<Option<Artist>> {
    let row = sqlx::query(
        "SELECT id, name, created_by, created_at, updated_at FROM artists WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(|row| artist_from_row(&row)))
}

/// List artists whose name contains `name`, paginated
pub async fn list(pool: &SqlitePool, name: &str, limit: i64, skip: i64) -> Result<Vec<Artist>> {
    let pattern = format!("%{name}%");
    let rows = sqlx::query(
        "SELECT id, name, created_by, created_at, updated_at
         FROM artists
         WHERE name LIKE ?
         ORDER BY id
         LIMIT ? OFFSET ?",
    )
    .bind(&pattern)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(artist_from_row).collect())
}

/// Get an artist with its songs expanded
pub async fn get_with_songs(pool: &SqlitePool, id: ArtistId) -> Result<Option<ArtistWithSongs>> {
    let Some(artist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    let songs = crate::songs::get_by_artist(pool, id).await?;

    Ok(Some(ArtistWithSongs { artist, songs }))
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: ArtistId,
    changes: UpdateArtist,
) -> Result<Artist> {
    sqlx::query(
        "UPDATE artists
         SET name = COALESCE(?, name), updated_at = ?
         WHERE id = ?",
    )
    .bind(&changes.name)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *conn)
    .await?;

    get_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Artist", id))
}

pub async fn delete(executor: impl SqliteExecutor<'_>, id: ArtistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::not_found("Artist", id));
    }

    Ok(())
}
