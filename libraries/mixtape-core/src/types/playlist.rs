//! Playlist types

use crate::types::{PlaylistId, SongId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    /// Private playlists are readable only by their creator
    pub private: bool,
    pub description: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    #[serde(default = "default_private")]
    pub private: bool,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_private() -> bool {
    true
}

/// Partial update for a playlist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlaylist {
    pub name: Option<String>,
    pub private: Option<bool>,
    pub description: Option<String>,
}

/// Playlist membership row: its existence alone encodes "this song is in
/// this playlist"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSong {
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
    /// The actor who added the song, not necessarily the playlist owner
    pub created_by: UserId,
}
