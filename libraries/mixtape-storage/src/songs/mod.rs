//! Song queries
//!
//! List and single-song reads join against `likes` to attach the computed
//! per-song like count.

use chrono::{NaiveTime, Utc};
use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqliteExecutor, SqlitePool};

/// Resolved partial update; the caller has already turned any `GenreRef`
/// into a canonical genre id
#[derive(Debug, Clone, Default)]
pub struct SongChanges {
    pub title: Option<String>,
    pub genre_id: Option<GenreId>,
    pub length: Option<NaiveTime>,
}

fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        genre_id: row.get("genre_id"),
        length: row.get("length"),
        artist_id: row.get("artist_id"),
        created_by: row.get("created_by"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn song_with_likes_from_row(row: &SqliteRow) -> SongWithLikes {
    SongWithLikes {
        song: song_from_row(row),
        likes: row.get("likes"),
    }
}

pub async fn create(
    executor: impl SqliteExecutor<'_>,
    song: CreateSong,
    genre_id: Option<GenreId>,
    created_by: UserId,
) -> Result<Song> {
    let created_at = Utc::now();
    let result = sqlx::query(
        "INSERT INTO songs (title, genre_id, length, artist_id, created_by, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&song.title)
    .bind(genre_id)
    .bind(song.length)
    .bind(song.artist_id)
    .bind(created_by)
    .bind(created_at)
    .execute(executor)
    .await?;

    Ok(Song {
        id: result.last_insert_rowid(),
        title: song.title,
        genre_id,
        length: song.length,
        artist_id: song.artist_id,
        created_by,
        created_at,
        updated_at: None,
    })
}

pub async fn get_by_id(executor: impl SqliteExecutor<'_>, id: SongId) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, title, genre_id, length, artist_id, created_by, created_at, updated_at
         FROM songs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(|row| song_from_row(&row)))
}

/// All songs by one artist, used for the artist one-to-many expansion
pub async fn get_by_artist(pool: &SqlitePool, artist_id: ArtistId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, title, genre_id, length, artist_id, created_by, created_at, updated_at
         FROM songs WHERE artist_id = ? ORDER BY id",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Duplicate check scoped to one artist: (artist_id, title) must be unique
pub async fn find_duplicate(
    executor: impl SqliteExecutor<'_>,
    artist_id: ArtistId,
    title: &str,
) -> Result<Option<SongId>> {
    let row = sqlx::query("SELECT id FROM songs WHERE artist_id = ? AND title = ?")
        .bind(artist_id)
        .bind(title)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(|r| r.get("id")))
}

const SELECT_WITH_LIKES: &str = "SELECT s.id, s.title, s.genre_id, s.length, s.artist_id,
        s.created_by, s.created_at, s.updated_at,
        COUNT(l.song_id) AS likes
 FROM songs s
 LEFT JOIN likes l ON l.song_id = s.id";

pub async fn get_with_likes(pool: &SqlitePool, id: SongId) -> Result<Option<SongWithLikes>> {
    let sql = format!("{SELECT_WITH_LIKES} WHERE s.id = ? GROUP BY s.id");
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    Ok(row.map(|row| song_with_likes_from_row(&row)))
}

/// List songs with their like counts, filtered by title substring and,
/// independently, by genre (exact id or label substring)
pub async fn list(pool: &SqlitePool, filter: &SongFilter) -> Result<Vec<SongWithLikes>> {
    let title_pattern = format!("%{}%", filter.title.as_deref().unwrap_or(""));

    let rows = match &filter.genre {
        None => {
            let sql = format!("{SELECT_WITH_LIKES} WHERE s.title LIKE ? GROUP BY s.id ORDER BY s.id");
            sqlx::query(&sql).bind(&title_pattern).fetch_all(pool).await?
        }
        Some(GenreRef::Id(genre_id)) => {
            let sql = format!(
                "{SELECT_WITH_LIKES} WHERE s.title LIKE ? AND s.genre_id = ? GROUP BY s.id ORDER BY s.id"
            );
            sqlx::query(&sql)
                .bind(&title_pattern)
                .bind(genre_id)
                .fetch_all(pool)
                .await?
        }
        Some(GenreRef::Label(label)) => {
            let label_pattern = format!("%{label}%");
            let sql = format!(
                "{SELECT_WITH_LIKES}
                 LEFT JOIN genres g ON g.id = s.genre_id
                 WHERE s.title LIKE ? AND g.label LIKE ?
                 GROUP BY s.id ORDER BY s.id"
            );
            sqlx::query(&sql)
                .bind(&title_pattern)
                .bind(&label_pattern)
                .fetch_all(pool)
                .await?
        }
    };

    Ok(rows.iter().map(song_with_likes_from_row).collect())
}

pub async fn update(conn: &mut SqliteConnection, id: SongId, changes: SongChanges) -> Result<Song> {
    sqlx::query(
        "UPDATE songs
         SET title = COALESCE(?, title),
             genre_id = COALESCE(?, genre_id),
             length = COALESCE(?, length),
             updated_at = ?
         WHERE id = ?",
    )
    .bind(&changes.title)
    .bind(changes.genre_id)
    .bind(changes.length)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *conn)
    .await?;

    get_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| MixtapeError::not_found("Song", id))
}

pub async fn delete(executor: impl SqliteExecutor<'_>, id: SongId) -> Result<()> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::not_found("Song", id));
    }

    Ok(())
}
