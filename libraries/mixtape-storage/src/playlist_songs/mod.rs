//! Playlist membership queries
//!
//! The (playlist_id, song_id) composite primary key is the uniqueness
//! arbiter; a duplicate insert surfaces as a constraint violation.

use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::{Row, SqliteExecutor, SqlitePool};

pub async fn add(
    executor: impl SqliteExecutor<'_>,
    playlist_id: PlaylistId,
    song_id: SongId,
    created_by: UserId,
) -> Result<PlaylistSong> {
    sqlx::query("INSERT INTO playlist_songs (playlist_id, song_id, created_by) VALUES (?, ?, ?)")
        .bind(playlist_id)
        .bind(song_id)
        .bind(created_by)
        .execute(executor)
        .await?;

    Ok(PlaylistSong {
        playlist_id,
        song_id,
        created_by,
    })
}

pub async fn exists(
    executor: impl SqliteExecutor<'_>,
    playlist_id: PlaylistId,
    song_id: SongId,
) -> Result<bool> {
    let row = sqlx::query(
        "SELECT COUNT(*) AS count FROM playlist_songs WHERE playlist_id = ? AND song_id = ?",
    )
    .bind(playlist_id)
    .bind(song_id)
    .fetch_one(executor)
    .await?;

    Ok(row.get::<i64, _>("count") > 0)
}

pub async fn remove(
    executor: impl SqliteExecutor<'_>,
    playlist_id: PlaylistId,
    song_id: SongId,
) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ? AND song_id = ?")
        .bind(playlist_id)
        .bind(song_id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::not_found(
            "PlaylistSong",
            format!("{playlist_id}/{song_id}"),
        ));
    }

    Ok(())
}

/// Songs joined through the membership table for one playlist
pub async fn songs_in(pool: &SqlitePool, playlist_id: PlaylistId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT s.id, s.title, s.genre_id, s.length, s.artist_id, s.created_by,
                s.created_at, s.updated_at
         FROM songs s
         INNER JOIN playlist_songs ps ON ps.song_id = s.id
         WHERE ps.playlist_id = ?
         ORDER BY s.id",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Song {
            id: row.get("id"),
            title: row.get("title"),
            genre_id: row.get("genre_id"),
            length: row.get("length"),
            artist_id: row.get("artist_id"),
            created_by: row.get("created_by"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
        .collect())
}
