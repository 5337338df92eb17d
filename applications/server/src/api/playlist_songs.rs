/// Playlist membership API routes
use crate::{
    error::Result, middleware::AuthenticatedUser, services::playlists, state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mixtape_core::types::{PlaylistId, PlaylistSong, Song, SongId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddPlaylistSongRequest {
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
}

/// POST /playlist-songs
/// Add one song to an existing playlist
pub async fn add_playlist_song(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<AddPlaylistSongRequest>,
) -> Result<(StatusCode, Json<PlaylistSong>)> {
    let membership =
        playlists::add_song(&app_state.pool, auth.actor(), req.playlist_id, req.song_id).await?;

    Ok((StatusCode::CREATED, Json(membership)))
}

/// GET /playlist-songs/:playlist_id
/// List the songs in the given playlist
pub async fn get_playlist_songs(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Song>>> {
    let songs = playlists::list_songs(&app_state.pool, auth.actor(), id).await?;
    Ok(Json(songs))
}

/// DELETE /playlist-songs/:playlist_id/:song_id
/// Remove a song from a playlist (owner only)
pub async fn delete_playlist_song(
    Path((playlist_id, song_id)): Path<(PlaylistId, SongId)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    playlists::remove_song(&app_state.pool, auth.actor(), playlist_id, song_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
