//! Like queries
//!
//! Existence of a row is the entire state: liked / not liked. Counts are
//! attached to song reads in the `songs` slice.

use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::{Row, SqliteExecutor};

pub async fn exists(
    executor: impl SqliteExecutor<'_>,
    song_id: SongId,
    user_id: UserId,
) -> Result<bool> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM likes WHERE song_id = ? AND created_by = ?")
        .bind(song_id)
        .bind(user_id)
        .fetch_one(executor)
        .await?;

    Ok(row.get::<i64, _>("count") > 0)
}

pub async fn insert(
    executor: impl SqliteExecutor<'_>,
    song_id: SongId,
    user_id: UserId,
) -> Result<Like> {
    sqlx::query("INSERT INTO likes (song_id, created_by) VALUES (?, ?)")
        .bind(song_id)
        .bind(user_id)
        .execute(executor)
        .await?;

    Ok(Like {
        song_id,
        created_by: user_id,
    })
}

pub async fn remove(
    executor: impl SqliteExecutor<'_>,
    song_id: SongId,
    user_id: UserId,
) -> Result<()> {
    let result = sqlx::query("DELETE FROM likes WHERE song_id = ? AND created_by = ?")
        .bind(song_id)
        .bind(user_id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::not_found(
            "Like",
            format!("{song_id}/{user_id}"),
        ));
    }

    Ok(())
}
