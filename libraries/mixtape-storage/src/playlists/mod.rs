//! Playlist queries

use chrono::Utc;
use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqliteExecutor, SqlitePool};

fn playlist_from_row(row: &SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        name: row.get("name"),
        private: row.get("private"),
        description: row.get("description"),
        created_by: row.get("created_by"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub async fn create(
    executor: impl SqliteExecutor<'_>,
    playlist: CreatePlaylist,
    created_by: UserId,
) -> Result<Playlist> {
    let created_at = Utc::now();
    let result = sqlx::query(
        "INSERT INTO playlists (name, private, description, created_by, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&playlist.name)
    .bind(playlist.private)
    .bind(&playlist.description)
    .bind(created_by)
    .bind(created_at)
    .execute(executor)
    .await?;

    Ok(Playlist {
        id: result.last_insert_rowid(),
        name: playlist.name,
        private: playlist.private,
        description: playlist.description,
        created_by,
        created_at,
        updated_at: None,
    })
}

pub async fn get_by_id(
    executor: impl SqliteExecutor<'_>,
    id: PlaylistId,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        "SELECT id, name, private, description, created_by, created_at, updated_at
         FROM playlists WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(|row| playlist_from_row(&row)))
}

/// Duplicate check: (created_by, name) must be unique per owner
pub async fn find_by_owner_and_name(
    executor: impl SqliteExecutor<'_>,
    owner: UserId,
    name: &str,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        "SELECT id, name, private, description, created_by, created_at, updated_at
         FROM playlists WHERE created_by = ? AND name = ?",
    )
    .bind(owner)
    .bind(name)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(|row| playlist_from_row(&row)))
}

/// List playlists visible to the actor: public ones OR their own, filtered
/// by a name substring
pub async fn list_visible(pool: &SqlitePool, actor: UserId, name: &str) -> Result<Vec<Playlist>> {
    let pattern = format!("%{name}%");
    let rows = sqlx::query(
        "SELECT id, name, private, description, created_by, created_at, updated_at
         FROM playlists
         WHERE name LIKE ? AND (private = 0 OR created_by = ?)
         ORDER BY id",
    )
    .bind(&pattern)
    .bind(actor)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(playlist_from_row).collect())
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: PlaylistId,
    changes: UpdatePlaylist,
) -> Result<Playlist> {
    sqlx::query(
        "UPDATE playlists
         SET name = COALESCE(?, name),
             private = COALESCE(?, private),
             description = COALESCE(?, description),
             updated_at = ?
         WHERE id = ?",
    )
    .bind(&changes.name)
    .bind(changes.private)
    .bind(&changes.description)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *conn)
    .await?;

    get_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Playlist", id))
}

pub async fn delete(executor: impl SqliteExecutor<'_>, id: PlaylistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::not_found("Playlist", id));
    }

    Ok(())
}
