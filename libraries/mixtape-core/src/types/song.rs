//! Song types

use crate::types::{ArtistId, GenreId, GenreRef, SongId, UserId};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub genre_id: Option<GenreId>,
    /// Track length as a time-of-day duration (e.g. "00:03:42")
    pub length: NaiveTime,
    pub artist_id: ArtistId,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data for creating a new song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSong {
    pub title: String,
    pub genre: Option<GenreRef>,
    pub artist_id: ArtistId,
    pub length: NaiveTime,
}

/// Partial update for a song
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSong {
    pub title: Option<String>,
    pub genre: Option<GenreRef>,
    pub length: Option<NaiveTime>,
}

/// A song with its like count attached (computed on read)
#[derive(Debug, Clone, Serialize)]
pub struct SongWithLikes {
    #[serde(flatten)]
    pub song: Song,
    pub likes: i64,
}

/// Filters for the song listing query
///
/// `title` is a case-sensitive substring match. `genre` matches either the
/// exact genre id or a substring of the genre label, depending on which
/// variant the client supplied.
#[derive(Debug, Clone, Default)]
pub struct SongFilter {
    pub title: Option<String>,
    pub genre: Option<GenreRef>,
}
