//! Artist types

use crate::types::{ArtistId, Song, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data for creating a new artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtist {
    pub name: String,
}

/// Partial update for an artist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
}

/// An artist with its songs expanded (one-to-many)
#[derive(Debug, Clone, Serialize)]
pub struct ArtistWithSongs {
    #[serde(flatten)]
    pub artist: Artist,
    pub songs: Vec<Song>,
}
